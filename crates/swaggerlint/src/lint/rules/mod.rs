mod expressive_path_summary;
mod latin_definitions_only;
mod no_external_refs;
mod no_trailing_slash;
mod object_prop_casing;
mod required_operation_tags;
mod required_tag_description;

pub use expressive_path_summary::ExpressivePathSummaryRule;
pub use latin_definitions_only::LatinDefinitionsOnlyRule;
pub use no_external_refs::NoExternalRefsRule;
pub use no_trailing_slash::NoTrailingSlashRule;
pub use object_prop_casing::{Casing, ObjectPropCasingRule};
pub use required_operation_tags::RequiredOperationTagsRule;
pub use required_tag_description::RequiredTagDescriptionRule;

use super::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use std::sync::{Arc, LazyLock};
use swaggerlint_config::{RuleSetting, RulesConfig, SwaggerlintConfig};

/// A lint rule.
///
/// Rules are stateless. They declare which node kinds they care about per
/// dialect and get called once per visited node of those kinds.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule (e.g., "no-external-refs")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Setting used when the rule is configured as `true`
    fn default_setting(&self) -> Option<RuleSetting> {
        None
    }

    /// Whether a resolved setting is usable by this rule
    fn is_valid_setting(&self, _setting: &RuleSetting) -> bool {
        true
    }

    /// Message templates, as `(message id, template)` pairs
    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[]
    }

    fn visit_swagger(&self, _kind: SwaggerVisitorName, _cx: &mut VisitContext<'_>) {}

    fn visit_openapi(&self, _kind: OpenApiVisitorName, _cx: &mut VisitContext<'_>) {}
}

static BUILTIN_RULES: LazyLock<Vec<Arc<dyn Rule>>> = LazyLock::new(|| {
    vec![
        Arc::new(ExpressivePathSummaryRule),
        Arc::new(LatinDefinitionsOnlyRule),
        Arc::new(NoExternalRefsRule),
        Arc::new(NoTrailingSlashRule),
        Arc::new(ObjectPropCasingRule),
        Arc::new(RequiredOperationTagsRule),
        Arc::new(RequiredTagDescriptionRule),
    ]
});

/// Rules available to a linter, looked up by name
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in rule
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }

    /// Add a rule, replacing any rule with the same name
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.rules.retain(|existing| existing.name() != rule.name());
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with(mut self, rule: Arc<dyn Rule>) -> Self {
        self.register(rule);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.name() == name)
            .map(|rule| &**rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

/// The project default configuration: every built-in rule, with its own
/// default setting where it has one
#[must_use]
pub fn default_config() -> SwaggerlintConfig {
    let rules: RulesConfig = RuleRegistry::builtin()
        .iter()
        .map(|rule| {
            (
                rule.name().to_string(),
                rule.default_setting().unwrap_or(RuleSetting::UseDefault),
            )
        })
        .collect();
    SwaggerlintConfig::with_rules(rules)
}
