//! Reference classification and same-document resolution.

use crate::Location;
use serde_json::Value;
use std::fmt::Debug;
use std::hash::Hash;

/// The `$ref` string of a reference node, if the node is one
#[must_use]
pub fn reference_of(node: &Value) -> Option<&str> {
    node.get("$ref").and_then(Value::as_str)
}

#[must_use]
pub fn is_ref(node: &Value) -> bool {
    reference_of(node).is_some()
}

/// Whether a `$ref` points into the same document
#[must_use]
pub fn is_internal(reference: &str) -> bool {
    reference.starts_with('#')
}

/// A top-level map that references can point into
pub trait RefSection: Copy + Eq + Hash + Debug + 'static {
    /// Keys leading from the document root to the section's map
    fn container(self) -> &'static [&'static str];

    /// The `$ref` prefix naming a member of this section
    fn prefix(self) -> &'static str;
}

/// Swagger 2.0 reusable object maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwaggerSection {
    Definitions,
    Parameters,
    Responses,
}

impl SwaggerSection {
    pub const ALL: [Self; 3] = [Self::Definitions, Self::Parameters, Self::Responses];

    /// Key of this section at the document root
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Definitions => "definitions",
            Self::Parameters => "parameters",
            Self::Responses => "responses",
        }
    }
}

impl RefSection for SwaggerSection {
    fn container(self) -> &'static [&'static str] {
        match self {
            Self::Definitions => &["definitions"],
            Self::Parameters => &["parameters"],
            Self::Responses => &["responses"],
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Definitions => "#/definitions/",
            Self::Parameters => "#/parameters/",
            Self::Responses => "#/responses/",
        }
    }
}

/// OpenAPI 3.x `components` sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenApiSection {
    Schemas,
    Responses,
    Parameters,
    Examples,
    RequestBodies,
    Headers,
    SecuritySchemes,
    Links,
    Callbacks,
}

impl OpenApiSection {
    pub const ALL: [Self; 9] = [
        Self::Schemas,
        Self::Responses,
        Self::Parameters,
        Self::Examples,
        Self::RequestBodies,
        Self::Headers,
        Self::SecuritySchemes,
        Self::Links,
        Self::Callbacks,
    ];

    /// Key of this section inside `components`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Schemas => "schemas",
            Self::Responses => "responses",
            Self::Parameters => "parameters",
            Self::Examples => "examples",
            Self::RequestBodies => "requestBodies",
            Self::Headers => "headers",
            Self::SecuritySchemes => "securitySchemes",
            Self::Links => "links",
            Self::Callbacks => "callbacks",
        }
    }
}

impl RefSection for OpenApiSection {
    fn container(self) -> &'static [&'static str] {
        match self {
            Self::Schemas => &["components", "schemas"],
            Self::Responses => &["components", "responses"],
            Self::Parameters => &["components", "parameters"],
            Self::Examples => &["components", "examples"],
            Self::RequestBodies => &["components", "requestBodies"],
            Self::Headers => &["components", "headers"],
            Self::SecuritySchemes => &["components", "securitySchemes"],
            Self::Links => &["components", "links"],
            Self::Callbacks => &["components", "callbacks"],
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Schemas => "#/components/schemas/",
            Self::Responses => "#/components/responses/",
            Self::Parameters => "#/components/parameters/",
            Self::Examples => "#/components/examples/",
            Self::RequestBodies => "#/components/requestBodies/",
            Self::Headers => "#/components/headers/",
            Self::SecuritySchemes => "#/components/securitySchemes/",
            Self::Links => "#/components/links/",
            Self::Callbacks => "#/components/callbacks/",
        }
    }
}

/// A resolved reference target
#[derive(Debug, Clone, PartialEq)]
pub struct Target<'a> {
    /// Member name inside the section
    pub name: String,
    pub node: &'a Value,
    /// Canonical location of the target, e.g. `definitions.Pet`
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Internal(Target<'a>),
    /// Points outside the document; never followed
    External,
    /// Internal, but the prefix does not match the section or the member
    /// does not exist
    Unresolved,
}

/// Resolve `reference` against the map of `section` inside `root`.
#[must_use]
pub fn resolve<'a, S: RefSection>(root: &'a Value, section: S, reference: &str) -> Resolution<'a> {
    if !is_internal(reference) {
        return Resolution::External;
    }
    let Some(escaped) = reference.strip_prefix(section.prefix()) else {
        return Resolution::Unresolved;
    };
    if escaped.is_empty() || escaped.contains('/') {
        return Resolution::Unresolved;
    }
    let name = unescape(escaped);

    let mut container = root;
    for key in section.container() {
        match container.get(key) {
            Some(next) => container = next,
            None => return Resolution::Unresolved,
        }
    }

    match container.get(&name) {
        Some(node) => {
            let location = section
                .container()
                .iter()
                .copied()
                .chain(std::iter::once(name.as_str()))
                .collect();
            Resolution::Internal(Target {
                name,
                node,
                location,
            })
        }
        None => Resolution::Unresolved,
    }
}

/// Decode a JSON pointer segment (`~1` is `/`, `~0` is `~`)
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifiers() {
        assert!(is_ref(&json!({"$ref": "#/definitions/Pet"})));
        assert!(!is_ref(&json!({"$ref": 1})));
        assert!(!is_ref(&json!({"type": "string"})));
        assert!(is_internal("#/definitions/Pet"));
        assert!(!is_internal("pets.yaml#/Pet"));
    }

    #[test]
    fn test_resolve_swagger_definition() {
        let root = json!({"definitions": {"Pet": {"type": "object"}}});
        let Resolution::Internal(target) =
            resolve(&root, SwaggerSection::Definitions, "#/definitions/Pet")
        else {
            panic!("expected an internal target");
        };
        assert_eq!(target.name, "Pet");
        assert_eq!(target.node, &json!({"type": "object"}));
        assert_eq!(target.location, ["definitions", "Pet"]);
    }

    #[test]
    fn test_resolve_openapi_component() {
        let root = json!({"components": {"requestBodies": {"a/b": {"content": {}}}}});
        let resolution = resolve(
            &root,
            OpenApiSection::RequestBodies,
            "#/components/requestBodies/a~1b",
        );
        let Resolution::Internal(target) = resolution else {
            panic!("expected an internal target");
        };
        assert_eq!(target.location, ["components", "requestBodies", "a/b"]);
    }

    #[test]
    fn test_resolve_failures() {
        let root = json!({"definitions": {"Pet": {}}});
        assert_eq!(
            resolve(&root, SwaggerSection::Definitions, "other.yaml#/Pet"),
            Resolution::External
        );
        assert_eq!(
            resolve(&root, SwaggerSection::Definitions, "#/definitions/Missing"),
            Resolution::Unresolved
        );
        assert_eq!(
            resolve(&root, SwaggerSection::Parameters, "#/definitions/Pet"),
            Resolution::Unresolved
        );
        assert_eq!(
            resolve(&root, SwaggerSection::Definitions, "#/definitions/Pet/properties/id"),
            Resolution::Unresolved
        );
    }
}
