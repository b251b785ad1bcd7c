use super::Rule;
use crate::lint::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use serde_json::Value;

/// Lint rule that bans trailing slashes in hosts, base paths, path keys and server urls
pub struct NoTrailingSlashRule;

fn has_trailing_slash(url: &str) -> bool {
    url.len() > 1 && url.ends_with('/')
}

fn message(url: &str) -> String {
    format!("Url cannot end with a slash \"{url}\".")
}

impl NoTrailingSlashRule {
    /// Check one string field of the visited node
    fn check_field(cx: &mut VisitContext<'_>, key: &str) {
        if let Some(url) = cx.node().get(key).and_then(Value::as_str) {
            if has_trailing_slash(url) {
                let location = cx.location().child(key);
                cx.report_at(message(url), location);
            }
        }
    }

    /// Check every key of the visited `paths` object
    fn check_paths(cx: &mut VisitContext<'_>) {
        let Some(paths) = cx.node().as_object() else {
            return;
        };
        for path in paths.keys() {
            if has_trailing_slash(path) {
                let location = cx.location().child(path);
                cx.report_at(message(path), location);
            }
        }
    }
}

impl Rule for NoTrailingSlashRule {
    fn name(&self) -> &'static str {
        "no-trailing-slash"
    }

    fn description(&self) -> &'static str {
        "Url should not end with a slash"
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[SwaggerVisitorName::Swagger, SwaggerVisitorName::Paths]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[OpenApiVisitorName::Paths, OpenApiVisitorName::Server]
    }

    fn visit_swagger(&self, kind: SwaggerVisitorName, cx: &mut VisitContext<'_>) {
        match kind {
            SwaggerVisitorName::Swagger => {
                Self::check_field(cx, "host");
                Self::check_field(cx, "basePath");
            }
            SwaggerVisitorName::Paths => Self::check_paths(cx),
            _ => {}
        }
    }

    fn visit_openapi(&self, kind: OpenApiVisitorName, cx: &mut VisitContext<'_>) {
        match kind {
            OpenApiVisitorName::Paths => Self::check_paths(cx),
            OpenApiVisitorName::Server => Self::check_field(cx, "url"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::{locations, run_rule};
    use serde_json::json;
    use swaggerlint_config::RuleSetting;

    #[test]
    fn test_swagger_host_base_path_and_paths() {
        let document = json!({
            "swagger": "2.0",
            "host": "petstore.swagger.io/",
            "basePath": "/",
            "info": {},
            "paths": {"/pets/": {}, "/pets": {}}
        });

        let errors = run_rule(&NoTrailingSlashRule, &document, &RuleSetting::UseDefault);

        assert_eq!(locations(&errors), vec!["host", "paths./pets/"]);
        assert_eq!(errors[0].msg, "Url cannot end with a slash \"petstore.swagger.io/\".");
    }

    #[test]
    fn test_openapi_servers() {
        let document = json!({
            "openapi": "3.0.0",
            "info": {},
            "servers": [{"url": "https://api.example.com/v1/"}, {"url": "https://api.example.com"}],
            "paths": {"/": {}}
        });

        let errors = run_rule(&NoTrailingSlashRule, &document, &RuleSetting::UseDefault);

        assert_eq!(locations(&errors), vec!["servers.0.url"]);
    }
}
