use super::Rule;
use crate::lint::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use serde_json::Value;

/// Lint rule that requires at least one tag on every operation
pub struct RequiredOperationTagsRule;

impl RequiredOperationTagsRule {
    fn check(cx: &mut VisitContext<'_>) {
        let tagged = cx
            .node()
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| !tags.is_empty());
        if !tagged {
            cx.report("Operation should have at least one tag.");
        }
    }
}

impl Rule for RequiredOperationTagsRule {
    fn name(&self) -> &'static str {
        "required-operation-tags"
    }

    fn description(&self) -> &'static str {
        "All operations should be tagged"
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
