use super::Rule;
use crate::lint::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use serde_json::Value;

/// Lint rule that requires every operation to have a summary of at least two words
pub struct ExpressivePathSummaryRule;

impl ExpressivePathSummaryRule {
    fn check(cx: &mut VisitContext<'_>) {
        match cx.node().get("summary").and_then(Value::as_str) {
            None => cx.report("Every path has to have a summary."),
            Some(summary) if summary.split_whitespace().count() < 2 => {
                let location = cx.location().child("summary");
                cx.report_at(
                    format!(
                        "Every path summary should contain at least 2 words. This has \"{summary}\""
                    ),
                    location,
                );
            }
            Some(_) => {}
        }
    }
}

impl Rule for ExpressivePathSummaryRule {
    fn name(&self) -> &'static str {
        "expressive-path-summary"
    }

    fn description(&self) -> &'static str {
        "Enforces an intentional path summary"
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[SwaggerVisitorName::Operation]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[OpenApiVisitorName::Operation]
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
    fn test_short_and_missing_summaries() {
        let document = json!({
            "swagger": "2.0",
            "info": {},
            "paths": {
                "/pet/{petId}/uploadImage": {
                    "get": {"summary": "upload-image", "responses": {}},
                    "post": {"responses": {}},
                    "put": {"summary": "uploads an image", "responses": {}}
                }
            }
        });

        let errors = run_rule(&ExpressivePathSummaryRule, &document, &RuleSetting::UseDefault);

        assert_eq!(
            locations(&errors),
            vec![
                "paths./pet/{petId}/uploadImage.get.summary",
                "paths./pet/{petId}/uploadImage.post",
            ]
        );
        assert_eq!(
            errors[0].msg,
            "Every path summary should contain at least 2 words. This has \"upload-image\""
        );
        assert_eq!(errors[1].msg, "Every path has to have a summary.");
    }

    #[test]
    fn test_openapi_operations() {
        let document = json!({
            "openapi": "3.0.0",
            "info": {},
            "paths": {"/a": {"trace": {"summary": "  "}, "get": {"summary": "list all things"}}}
        });

        let errors = run_rule(&ExpressivePathSummaryRule, &document, &RuleSetting::UseDefault);

        assert_eq!(locations(&errors), vec!["paths./a.trace.summary"]);
    }
}
