mod diagnostics;
mod document;
mod error;
mod lint;
mod location;
pub mod refs;
pub mod walker;

pub use diagnostics::{render_template, LintError, CORE_NAME, WALKER_NAME};
pub use document::{parse_document, Dialect, SchemaLoader, SchemaSource};
pub use error::{Result, SwaggerlintError, WalkError};
pub use lint::{
    default_config, lint, Casing, ExpressivePathSummaryRule, LatinDefinitionsOnlyRule, Linter,
    NoExternalRefsRule, NoTrailingSlashRule, ObjectPropCasingRule, RequiredOperationTagsRule,
    RequiredTagDescriptionRule, Rule, RuleRegistry, VisitContext, INVALID_SETTING,
    NO_ENABLED_RULES, UNSUPPORTED_DOCUMENT,
};
pub use location::Location;
pub use walker::{
    OpenApiVisitorName, SwaggerVisitorName, VisitedNode, VisitorBucket, VisitorKind, Walked,
};

// Re-export common types from dependencies
pub use swaggerlint_config::{IgnoreConfig, RuleSetting, RulesConfig, SwaggerlintConfig};
