use crate::Location;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of errors raised by the linter itself rather than by a rule
pub const CORE_NAME: &str = "swaggerlint-core";

/// Name of the error produced when a document cannot be walked
pub const WALKER_NAME: &str = "swaggerlint-walker";

/// A single lint finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintError {
    /// Rule name, or [`CORE_NAME`] / [`WALKER_NAME`]
    pub name: String,

    /// Human readable message
    pub msg: String,

    /// Where in the document the problem is
    pub location: Location,

    /// Id of the rule message template used to render `msg`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Values interpolated into the message template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl LintError {
    pub fn new(name: impl Into<String>, msg: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            msg: msg.into(),
            location,
            message_id: None,
            data: None,
        }
    }

    /// A configuration or input failure with an empty location
    pub fn core(msg: impl Into<String>) -> Self {
        Self::new(CORE_NAME, msg, Location::root())
    }

    /// A structural failure while walking the document
    pub fn walker(msg: impl Into<String>) -> Self {
        Self::new(WALKER_NAME, msg, Location::root())
    }

    #[must_use]
    pub fn with_message_id(
        mut self,
        message_id: impl Into<String>,
        data: Map<String, Value>,
    ) -> Self {
        self.message_id = Some(message_id.into());
        self.data = Some(data);
        self
    }

    /// Whether this error signals a configuration or input failure
    #[must_use]
    pub fn is_core(&self) -> bool {
        self.name == CORE_NAME
    }
}

/// Render a `{{key}}` message template.
///
/// String values are inserted without quotes; other values use their JSON form.
#[must_use]
pub fn render_template(template: &str, data: &Map<String, Value>) -> String {
    let mut rendered = template.to_string();
    for (key, value) in data {
        let text = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), &text);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_template() {
        let data = json!({"name": "petId", "count": 2});
        let rendered = render_template(
            "Property \"{{name}}\" seen {{count}} times, {{missing}}",
            data.as_object().unwrap(),
        );
        assert_eq!(rendered, "Property \"petId\" seen 2 times, {{missing}}");
    }

    #[test]
    fn test_serialized_shape() {
        let error = LintError::new(
            "no-external-refs",
            "External references are banned.",
            ["components", "schemas"].into_iter().collect(),
        );
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "no-external-refs",
                "msg": "External references are banned.",
                "location": ["components", "schemas"]
            })
        );
    }

    #[test]
    fn test_core_errors_have_empty_location() {
        let error = LintError::core("boom");
        assert!(error.is_core());
        assert!(error.location.is_empty());
        assert!(!LintError::walker("boom").is_core());
    }
}
