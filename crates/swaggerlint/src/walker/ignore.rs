use crate::refs::OpenApiSection;
use crate::Dialect;
use serde_json::Value;
use std::borrow::Cow;
use swaggerlint_config::IgnoreConfig;

/// Drop ignored paths and section members before a walk.
///
/// Swagger honours `paths` and `definitions`; OpenAPI honours `paths` and
/// every `components.<section>` list. The document is only cloned when
/// something would actually be removed.
pub fn filter_ignored<'a>(
    document: &'a Value,
    dialect: Dialect,
    ignore: &IgnoreConfig,
) -> Cow<'a, Value> {
    let removals = removals(dialect, ignore);
    if !removals
        .iter()
        .any(|(container, names)| has_any(document, container, names))
    {
        return Cow::Borrowed(document);
    }

    let mut filtered = document.clone();
    for (container, names) in &removals {
        if let Some(members) = member_map(&mut filtered, container) {
            let before = members.len();
            members.retain(|name, _| !names.contains(name));
            tracing::debug!(
                section = %container.join("."),
                removed = before - members.len(),
                "Applied ignore list"
            );
        }
    }
    Cow::Owned(filtered)
}

type Removal<'c> = (Vec<&'static str>, &'c [String]);

fn removals(dialect: Dialect, ignore: &IgnoreConfig) -> Vec<Removal<'_>> {
    let mut removals = vec![(vec!["paths"], ignore.paths.as_slice())];
    match dialect {
        Dialect::Swagger => removals.push((vec!["definitions"], ignore.definitions.as_slice())),
        Dialect::OpenApi => {
            for section in OpenApiSection::ALL {
                removals.push((
                    vec!["components", section.key()],
                    ignore.components.section(section.key()),
                ));
            }
        }
    }
    removals.retain(|(_, names)| !names.is_empty());
    removals
}

fn has_any(document: &Value, container: &[&str], names: &[String]) -> bool {
    container
        .iter()
        .try_fold(document, |node, key| node.get(key))
        .and_then(Value::as_object)
        .is_some_and(|members| names.iter().any(|name| members.contains_key(name)))
}

fn member_map<'v>(
    document: &'v mut Value,
    container: &[&str],
) -> Option<&'v mut serde_json::Map<String, Value>> {
    container
        .iter()
        .try_fold(document, |node, key| node.get_mut(key))
        .and_then(Value::as_object_mut)
}
