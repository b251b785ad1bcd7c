use crate::walker::{self, VisitorBucket, VisitorKind, Walked};
use crate::{Dialect, LintError, Location};
use serde_json::Value;
use swaggerlint_config::{RuleSetting, RulesConfig, SwaggerlintConfig};

use super::rules::{Rule, RuleRegistry};
use super::VisitContext;

/// Returned alone when the document is not a supported dialect
pub const UNSUPPORTED_DOCUMENT: &str = "You have provided a schema that is neither Swagger 2.0 \
    nor OpenAPI 3.x. Make sure it has a valid `swagger: \"2.0\"` or `openapi: \"3.x.x\"` field \
    and the required `info` and `paths` objects.";

/// Reported once when no configured rule ended up running
pub const NO_ENABLED_RULES: &str =
    "Found 0 enabled rules. Swaggerlint requires at least one rule enabled.";

/// Message for a rule whose resolved setting it rejects
pub const INVALID_SETTING: &str = "Invalid rule setting.";

/// Linter that runs configured rules over a document
pub struct Linter {
    config: SwaggerlintConfig,
    defaults: RulesConfig,
    registry: RuleRegistry,
}

impl Linter {
    /// Create a linter with the built-in rules and no project defaults
    #[must_use]
    pub fn new(config: SwaggerlintConfig) -> Self {
        Self {
            config,
            defaults: RulesConfig::new(),
            registry: RuleRegistry::builtin(),
        }
    }

    /// Project defaults consulted for rules configured as `true`
    #[must_use]
    pub fn with_defaults(mut self, defaults: RulesConfig) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SwaggerlintConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint a parsed document.
    ///
    /// Errors come out in rule configuration order, then node visit order.
    /// An unsupported document or a walk failure yields a single error and
    /// no rule runs.
    #[must_use]
    pub fn lint(&self, document: &Value) -> Vec<LintError> {
        let Some(dialect) = Dialect::detect(document) else {
            return vec![LintError::core(UNSUPPORTED_DOCUMENT)];
        };

        let document = walker::filter_ignored(document, dialect, &self.config.ignore);
        let walked = match walker::walk(&document, dialect) {
            Ok(walked) => walked,
            Err(err) => {
                tracing::debug!(%dialect, error = %err, "Walk failed");
                return vec![LintError::walker(err.to_string())];
            }
        };
        tracing::debug!(%dialect, nodes = walked.len(), "Walked document");

        let mut errors = Vec::new();
        let mut enabled = 0usize;

        for (name, configured) in self.config.rules.iter() {
            let Some(rule) = self.registry.get(name) else {
                tracing::warn!(rule = name, "Unknown rule");
                errors.push(LintError::core(format!("Rule \"{name}\" does not exist.")));
                continue;
            };
            let Some(setting) = self.resolve_setting(rule, configured) else {
                continue;
            };
            enabled += 1;

            if !rule.is_valid_setting(&setting) {
                errors.push(LintError::new(name, INVALID_SETTING, Location::root()));
                continue;
            }

            let before = errors.len();
            dispatch(rule, &setting, &walked, &mut errors);
            tracing::debug!(rule = name, count = errors.len() - before, "Rule finished");
        }

        if enabled == 0 {
            errors.push(LintError::core(NO_ENABLED_RULES));
        }
        errors
    }

    /// The setting a rule runs with, or `None` when it is disabled.
    ///
    /// `true` takes the project default for the rule when that is an explicit
    /// setting, then the rule's own default.
    fn resolve_setting(&self, rule: &dyn Rule, configured: &RuleSetting) -> Option<RuleSetting> {
        match configured {
            RuleSetting::Disabled => None,
            RuleSetting::UseDefault => Some(
                self.defaults
                    .get(rule.name())
                    .filter(|setting| matches!(setting, RuleSetting::Custom { .. }))
                    .cloned()
                    .or_else(|| rule.default_setting())
                    .unwrap_or(RuleSetting::UseDefault),
            ),
            custom @ RuleSetting::Custom { .. } => Some(custom.clone()),
        }
    }
}

fn dispatch(
    rule: &dyn Rule,
    setting: &RuleSetting,
    walked: &Walked<'_>,
    errors: &mut Vec<LintError>,
) {
    match walked {
        Walked::Swagger(bucket) => {
            visit_all(rule, setting, bucket, rule.swagger_visitors(), errors, |kind, cx| {
                rule.visit_swagger(kind, cx);
            });
        }
        Walked::OpenApi(bucket) => {
            visit_all(rule, setting, bucket, rule.openapi_visitors(), errors, |kind, cx| {
                rule.visit_openapi(kind, cx);
            });
        }
    }
}

fn visit_all<K, F>(
    rule: &dyn Rule,
    setting: &RuleSetting,
    bucket: &VisitorBucket<'_, K>,
    kinds: &[K],
    errors: &mut Vec<LintError>,
    mut visit: F,
) where
    K: VisitorKind,
    F: FnMut(K, &mut VisitContext<'_>),
{
    for kind in kinds {
        for visited in bucket.get(*kind) {
            let mut cx = VisitContext::new(
                rule.name(),
                rule.messages(),
                visited.node,
                &visited.location,
                setting,
                errors,
            );
            visit(*kind, &mut cx);
        }
    }
}

/// Lint `document` with the built-in rules, using `defaults` to resolve
/// rules configured as `true`
#[must_use]
pub fn lint(
    document: &Value,
    config: &SwaggerlintConfig,
    defaults: &SwaggerlintConfig,
) -> Vec<LintError> {
    Linter::new(config.clone())
        .with_defaults(defaults.rules.clone())
        .lint(document)
}
