use super::Rule;
use crate::lint::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use crate::Location;
use serde_json::{json, Map, Value};
use swaggerlint_config::RuleSetting;

/// Lint rule that only allows ASCII letters and digits in definition names.
///
/// Characters listed in the `ignore` option are allowed too.
pub struct LatinDefinitionsOnlyRule;

impl LatinDefinitionsOnlyRule {
    fn check(
        cx: &mut VisitContext<'_>,
        definitions: Option<&Map<String, Value>>,
        location: Location,
    ) {
        let Some(definitions) = definitions else {
            return;
        };
        let ignored = cx.setting().string_list_option("ignore");
        for name in definitions.keys() {
            let latin = name.chars().all(|c| {
                c.is_ascii_alphanumeric() || ignored.iter().any(|ignore| ignore.starts_with(c))
            });
            if !latin {
                cx.report_at(
                    format!("Definition name \"{name}\" contains non latin characters."),
                    location.child(name),
                );
            }
        }
    }
}

impl Rule for LatinDefinitionsOnlyRule {
    fn name(&self) -> &'static str {
        "latin-definitions-only"
    }

    fn description(&self) -> &'static str {
        "Bans non Latin characters usage in definition names"
    }

    fn default_setting(&self) -> Option<RuleSetting> {
        let options = json!({"ignore": []});
        Some(RuleSetting::custom("").with_options(options.as_object().cloned().unwrap_or_default()))
    }

    /// `ignore`, when given, must be a list of single characters
    fn is_valid_setting(&self, setting: &RuleSetting) -> bool {
        match setting.option("ignore") {
            None => true,
            Some(Value::Array(items)) => items
                .iter()
                .all(|item| item.as_str().is_some_and(|text| text.chars().count() == 1)),
            Some(_) => false,
        }
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[SwaggerVisitorName::Definitions]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[OpenApiVisitorName::Components]
    }

    fn visit_swagger(&self, _kind: SwaggerVisitorName, cx: &mut VisitContext<'_>) {
        let definitions = cx.node().as_object();
        let location = cx.location().clone();
        Self::check(cx, definitions, location);
    }

    fn visit_openapi(&self, _kind: OpenApiVisitorName, cx: &mut VisitContext<'_>) {
        let schemas = cx.node().get("schemas").and_then(Value::as_object);
        let location = cx.location().child("schemas");
        Self::check(cx, schemas, location);
    }
}
