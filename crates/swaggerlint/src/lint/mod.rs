mod context;
mod linter;
mod rules;

pub use context::VisitContext;
pub use linter::{lint, Linter, INVALID_SETTING, NO_ENABLED_RULES, UNSUPPORTED_DOCUMENT};
pub use rules::{
    default_config, Casing, ExpressivePathSummaryRule, LatinDefinitionsOnlyRule,
    NoExternalRefsRule, NoTrailingSlashRule, ObjectPropCasingRule, RequiredOperationTagsRule,
    RequiredTagDescriptionRule, Rule, RuleRegistry,
};
