use super::Rule;
use crate::lint::VisitContext;
use crate::walker::{OpenApiVisitorName, SwaggerVisitorName};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use std::sync::LazyLock;
use swaggerlint_config::RuleSetting;

const CAMEL_PATTERN: &str = r"^[a-z][a-zA-Z0-9]*$";
const SNAKE_PATTERN: &str = r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$";
const PASCAL_PATTERN: &str = r"^[A-Z][a-zA-Z0-9]*$";
const CONSTANT_PATTERN: &str = r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$";
const KEBAB_PATTERN: &str = r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$";

static CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CAMEL_PATTERN).expect("invalid regex pattern"));
static SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SNAKE_PATTERN).expect("invalid regex pattern"));
static PASCAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PASCAL_PATTERN).expect("invalid regex pattern"));
static CONSTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONSTANT_PATTERN).expect("invalid regex pattern"));
static KEBAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(KEBAB_PATTERN).expect("invalid regex pattern"));

/// Naming convention for schema property names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// camelCase
    Camel,
    /// `snake_case`
    Snake,
    /// `PascalCase`
    Pascal,
    /// `CONSTANT_CASE`
    Constant,
    /// kebab-case
    Kebab,
}

impl Casing {
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        let regex: &Regex = match self {
            Self::Camel => &*CAMEL,
            Self::Snake => &*SNAKE,
            Self::Pascal => &*PASCAL,
            Self::Constant => &*CONSTANT,
            Self::Kebab => &*KEBAB,
        };
        regex.is_match(name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::Pascal => "pascal",
            Self::Constant => "constant",
            Self::Kebab => "kebab",
        }
    }
}

impl FromStr for Casing {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(s.to_string()))
    }
}

/// Lint rule that enforces one casing for every schema property name
pub struct ObjectPropCasingRule;

impl ObjectPropCasingRule {
    fn check(cx: &mut VisitContext<'_>) {
        let Some(properties) = cx.node().get("properties").and_then(Value::as_object) else {
            return;
        };
        let casing = cx
            .setting()
            .primary()
            .and_then(|primary| primary.parse::<Casing>().ok())
            .unwrap_or(Casing::Camel);
        let ignored = cx.setting().string_list_option("ignore");
        let location = cx.location().child("properties");

        for key in properties.keys() {
            if casing.matches(key) || ignored.contains(&key.as_str()) {
                continue;
            }
            let mut data = Map::new();
            data.insert("key".to_string(), Value::String(key.clone()));
            data.insert("casing".to_string(), Value::String(casing.as_str().to_string()));
            cx.report_id_at("casing", data, location.child(key));
        }
    }
}

impl Rule for ObjectPropCasingRule {
    fn name(&self) -> &'static str {
        "object-prop-casing"
    }

    fn description(&self) -> &'static str {
        "Casing for your object property names"
    }

    fn default_setting(&self) -> Option<RuleSetting> {
        Some(RuleSetting::custom(Casing::Camel.as_str()))
    }

    fn is_valid_setting(&self, setting: &RuleSetting) -> bool {
        let known_casing = setting
            .primary()
            .is_some_and(|primary| primary.parse::<Casing>().is_ok());
        let valid_ignore = match setting.option("ignore") {
            None => true,
            Some(Value::Array(items)) => items.iter().all(Value::is_string),
            Some(_) => false,
        };
        known_casing && valid_ignore
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[("casing", "Property \"{{key}}\" has wrong casing. Expected {{casing}}.")]
    }

    fn swagger_visitors(&self) -> &'static [SwaggerVisitorName] {
        &[SwaggerVisitorName::Schema]
    }

    fn openapi_visitors(&self) -> &'static [OpenApiVisitorName] {
        &[OpenApiVisitorName::Schema]
    }

    fn visit_swagger(&self, _kind: SwaggerVisitorName, cx: &mut VisitContext<'_>) {
        Self::check(cx);
    }

    fn visit_openapi(&self, _kind: OpenApiVisitorName, cx: &mut VisitContext<'_>) {
        Self::check(cx);
    }
}
