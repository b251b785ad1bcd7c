use super::Rule;
use crate::lint::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use serde_json::Value;

/// Lint rule that requires every tag to have a description
pub struct RequiredTagDescriptionRule;

impl RequiredTagDescriptionRule {
    fn check(cx: &mut VisitContext<'_>) {
        let tag = cx.node();
        let described = tag
            .get("description")
            .and_then(Value::as_str)
            .is_some_and(|description| !description.trim().is_empty());
        if !described {
            let name = tag.get("name").and_then(Value::as_str).unwrap_or_default();
            cx.report(format!("Tag \"{name}\" is missing a description."));
        }
    }
}

impl Rule for RequiredTagDescriptionRule {
    fn name(&self) -> &'static str {
        "required-tag-description"
    }

    fn description(&self) -> &'static str {
        "All tags should have a description"
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[SwaggerVisitorName::Tag]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[OpenApiVisitorName::Tag]
    }

    fn visit_swagger(&self, _kind: SwaggerVisitorName, cx: &mut VisitContext<'_>) {
        Self::check(cx);
    }

    fn visit_openapi(&self, _kind: OpenApiVisitorName, cx: &mut VisitContext<'_>) {
        Self::check(cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::{locations, run_rule};
    use serde_json::json;
    use swaggerlint_config::RuleSetting;

    #[test]
    fn test_missing_descriptions() {
        let document = json!({
            "swagger": "2.0",
            "info": {},
            "paths": {},
            "tags": [
                {"name": "pet", "description": "Everything about your Pets"},
                {"name": "store"},
                {"name": "user", "description": ""}
            ]
        });

        let errors = run_rule(&RequiredTagDescriptionRule, &document, &RuleSetting::UseDefault);

        assert_eq!(locations(&errors), vec!["tags.1", "tags.2"]);
        assert_eq!(errors[0].msg, "Tag \"store\" is missing a description.");
    }
}
