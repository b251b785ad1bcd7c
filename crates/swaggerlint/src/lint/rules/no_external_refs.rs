use super::Rule;
use crate::lint::VisitContext;
use crate::refs;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};

/// Lint rule that bans `$ref`s pointing outside the document
pub struct NoExternalRefsRule;

impl NoExternalRefsRule {
    fn check(cx: &mut VisitContext<'_>) {
        if refs::reference_of(cx.node()).is_some_and(|reference| !refs::is_internal(reference)) {
            cx.report("External references are banned.");
        }
    }
}

impl Rule for NoExternalRefsRule {
    fn name(&self) -> &'static str {
        "no-external-refs"
    }

    fn description(&self) -> &'static str {
        "Bans external references"
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[SwaggerVisitorName::Reference]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[OpenApiVisitorName::Reference]
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
    fn test_external_schema_property() {
        let document = json!({
            "openapi": "3.0.0",
            "info": {},
            "paths": {},
            "components": {
                "schemas": {
                    "Example": {
                        "type": "object",
                        "properties": {
                            "bar": {"$ref": "schemas.yaml#/Bar"},
                            "foo": {"$ref": "#/components/schemas/Foo"}
                        }
                    },
                    "Foo": {"type": "string"}
                }
            }
        });

        let errors = run_rule(&NoExternalRefsRule, &document, &RuleSetting::UseDefault);

        assert_eq!(locations(&errors), vec!["components.schemas.Example.properties.bar"]);
        assert_eq!(errors[0].msg, "External references are banned.");
    }

    #[test]
    fn test_swagger_parameter_reference() {
        let document = json!({
            "swagger": "2.0",
            "info": {},
            "paths": {
                "/pets": {"get": {"parameters": [{"$ref": "https://example.com/params.json#/limit"}]}}
            }
        });

        let errors = run_rule(&NoExternalRefsRule, &document, &RuleSetting::UseDefault);

        assert_eq!(locations(&errors), vec!["paths./pets.get.parameters.0"]);
    }
}
