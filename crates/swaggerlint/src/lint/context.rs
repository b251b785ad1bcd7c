use crate::diagnostics::render_template;
use crate::{LintError, Location};
use serde_json::{Map, Value};
use swaggerlint_config::RuleSetting;

/// What a rule sees when one of its visitors runs.
///
/// Each visit gets a fresh context bound to the visited node; everything
/// reported through it is attributed to the running rule.
pub struct VisitContext<'v> {
    rule: &'static str,
    messages: &'static [(&'static str, &'static str)],
    node: &'v Value,
    location: &'v Location,
    setting: &'v RuleSetting,
    errors: &'v mut Vec<LintError>,
}

impl<'v> VisitContext<'v> {
    pub(crate) fn new(
        rule: &'static str,
        messages: &'static [(&'static str, &'static str)],
        node: &'v Value,
        location: &'v Location,
        setting: &'v RuleSetting,
        errors: &'v mut Vec<LintError>,
    ) -> Self {
        Self {
            rule,
            messages,
            node,
            location,
            setting,
            errors,
        }
    }

    /// The visited node
    #[must_use]
    pub const fn node(&self) -> &'v Value {
        self.node
    }

    /// Where the visited node was found
    #[must_use]
    pub const fn location(&self) -> &'v Location {
        self.location
    }

    /// The rule's resolved setting for this run
    #[must_use]
    pub const fn setting(&self) -> &'v RuleSetting {
        self.setting
    }

    /// Report at the visited node
    pub fn report(&mut self, msg: impl Into<String>) {
        let location = self.location.clone();
        self.report_at(msg, location);
    }

    /// Report at another location, usually a child of the visited node
    pub fn report_at(&mut self, msg: impl Into<String>, location: Location) {
        self.errors.push(LintError::new(self.rule, msg, location));
    }

    /// Report a templated message at the visited node
    pub fn report_id(&mut self, message_id: &str, data: Map<String, Value>) {
        let location = self.location.clone();
        self.report_id_at(message_id, data, location);
    }

    /// Report a templated message at another location.
    ///
    /// An id the rule never declared is used as the message text.
    pub fn report_id_at(
        &mut self,
        message_id: &str,
        data: Map<String, Value>,
        location: Location,
    ) {
        let msg = match self.messages.iter().find(|(id, _)| *id == message_id) {
            Some((_, template)) => render_template(template, &data),
            None => {
                tracing::warn!(rule = self.rule, message_id, "Undeclared message id");
                message_id.to_string()
            }
        };
        self.errors
            .push(LintError::new(self.rule, msg, location).with_message_id(message_id, data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_locations() {
        let node = json!({"summary": "x"});
        let location: Location = ["paths", "/a", "get"].into_iter().collect();
        let setting = RuleSetting::UseDefault;
        let mut errors = Vec::new();

        let mut cx = VisitContext::new("demo", &[], &node, &location, &setting, &mut errors);
        cx.report("at node");
        cx.report_at("at child", cx.location().child("summary"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].location, ["paths", "/a", "get"]);
        assert_eq!(errors[1].location, ["paths", "/a", "get", "summary"]);
        assert!(errors.iter().all(|error| error.name == "demo"));
    }

    #[test]
    fn test_report_id_renders_template() {
        let node = json!({});
        let location = Location::root();
        let setting = RuleSetting::UseDefault;
        let mut errors = Vec::new();
        let data = json!({"key": "pet_id"}).as_object().cloned().unwrap();

        let mut cx = VisitContext::new(
            "demo",
            &[("bad", "Key \"{{key}}\" is bad.")],
            &node,
            &location,
            &setting,
            &mut errors,
        );
        cx.report_id("bad", data.clone());

        assert_eq!(errors[0].msg, "Key \"pet_id\" is bad.");
        assert_eq!(errors[0].message_id.as_deref(), Some("bad"));
        assert_eq!(errors[0].data, Some(data));
    }
}
