use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level swaggerlint configuration.
///
/// `extends` lists other config files (relative to this one) whose settings
/// are applied first. A config returned by the loader has already been
/// resolved, so its `extends` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaggerlintConfig {
    /// Base configurations to inherit from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Rule settings, in execution order
    #[serde(default)]
    pub rules: RulesConfig,

    /// Nodes excluded from linting
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

impl SwaggerlintConfig {
    /// Create a config with the given rules and nothing ignored
    #[must_use]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Apply `other` on top of `self`.
    ///
    /// Rule settings in `other` win; ignore lists are unioned.
    pub fn merge(&mut self, other: Self) {
        self.rules.merge(other.rules);
        self.ignore.merge(other.ignore);
    }
}

/// The configured value for a single rule.
///
/// In config files this is `true`, `false`, `["primary"]` or
/// `["primary", { ...options }]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum RuleSetting {
    /// `false`: the rule does not run
    Disabled,
    /// `true`: the rule runs with its default setting
    UseDefault,
    /// Explicit primary value with optional options object
    Custom {
        primary: String,
        options: Option<Map<String, Value>>,
    },
}

impl RuleSetting {
    /// Build a custom setting without options
    #[must_use]
    pub fn custom(primary: impl Into<String>) -> Self {
        Self::Custom {
            primary: primary.into(),
            options: None,
        }
    }

    /// Attach an options object to a custom setting.
    ///
    /// Has no effect on `Disabled` or `UseDefault`.
    #[must_use]
    pub fn with_options(self, options: Map<String, Value>) -> Self {
        match self {
            Self::Custom { primary, .. } => Self::Custom {
                primary,
                options: Some(options),
            },
            other => other,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// The primary value of a custom setting
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Custom { primary, .. } => Some(primary.as_str()),
            _ => None,
        }
    }

    /// The options object of a custom setting
    #[must_use]
    pub fn options(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Custom { options, .. } => options.as_ref(),
            _ => None,
        }
    }

    /// A single option value
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options().and_then(|options| options.get(key))
    }

    /// An option holding a list of strings, e.g. `ignore`.
    ///
    /// Non-string members are skipped.
    #[must_use]
    pub fn string_list_option(&self, key: &str) -> Vec<&str> {
        self.option(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl TryFrom<Value> for RuleSetting {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(true) => Ok(Self::UseDefault),
            Value::Bool(false) => Ok(Self::Disabled),
            Value::Array(items) => {
                let mut items = items.into_iter();
                let primary = match items.next() {
                    Some(Value::String(primary)) => primary,
                    Some(other) => {
                        return Err(format!(
                            "the first element of a rule setting must be a string, got {other}"
                        ))
                    }
                    None => return Err("a rule setting array cannot be empty".to_string()),
                };
                let options = match items.next() {
                    Some(Value::Object(options)) => Some(options),
                    Some(other) => {
                        return Err(format!(
                            "the second element of a rule setting must be an object, got {other}"
                        ))
                    }
                    None => None,
                };
                if items.next().is_some() {
                    return Err("a rule setting array has at most two elements".to_string());
                }
                Ok(Self::Custom { primary, options })
            }
            other => Err(format!(
                "a rule setting must be a boolean or an array, got {other}"
            )),
        }
    }
}

impl From<RuleSetting> for Value {
    fn from(setting: RuleSetting) -> Self {
        match setting {
            RuleSetting::Disabled => Self::Bool(false),
            RuleSetting::UseDefault => Self::Bool(true),
            RuleSetting::Custom { primary, options } => {
                let mut items = vec![Self::String(primary)];
                if let Some(options) = options {
                    items.push(Self::Object(options));
                }
                Self::Array(items)
            }
        }
    }
}

/// Rule settings keyed by rule name, in the order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct RulesConfig {
    entries: Vec<(String, RuleSetting)>,
}

impl RulesConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a rule. An existing entry keeps its position.
    pub fn set(&mut self, name: impl Into<String>, setting: RuleSetting) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = setting;
        } else {
            self.entries.push((name, setting));
        }
    }

    /// Builder form of [`RulesConfig::set`]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, setting: RuleSetting) -> Self {
        self.set(name, setting);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleSetting> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, setting)| setting)
    }

    /// Iterate rules in configuration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.entries
            .iter()
            .map(|(name, setting)| (name.as_str(), setting))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry of `other` on top of `self`
    pub fn merge(&mut self, other: Self) {
        for (name, setting) in other.entries {
            self.set(name, setting);
        }
    }
}

impl FromIterator<(String, RuleSetting)> for RulesConfig {
    fn from_iter<I: IntoIterator<Item = (String, RuleSetting)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (name, setting) in iter {
            rules.set(name, setting);
        }
        rules
    }
}

impl TryFrom<Map<String, Value>> for RulesConfig {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            let setting = RuleSetting::try_from(value)
                .map_err(|message| format!("rule '{name}': {message}"))?;
            entries.push((name, setting));
        }
        Ok(Self { entries })
    }
}

impl From<RulesConfig> for Map<String, Value> {
    fn from(rules: RulesConfig) -> Self {
        rules
            .entries
            .into_iter()
            .map(|(name, setting)| (name, Value::from(setting)))
            .collect()
    }
}

/// Nodes removed from the document before it is walked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgnoreConfig {
    /// Swagger `definitions` member names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<String>,

    /// Keys of the `paths` object
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    /// OpenAPI `components` member names per section
    #[serde(default, skip_serializing_if = "ComponentsIgnore::is_empty")]
    pub components: ComponentsIgnore,
}

impl IgnoreConfig {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.paths.is_empty() && self.components.is_empty()
    }

    pub fn merge(&mut self, other: Self) {
        union_into(&mut self.definitions, other.definitions);
        union_into(&mut self.paths, other.paths);
        self.components.merge(other.components);
    }
}

/// Ignored member names for each `components` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComponentsIgnore {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_bodies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_schemes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub callbacks: Vec<String>,
}

impl ComponentsIgnore {
    /// Ignored names for a section, by its key in the `components` object
    #[must_use]
    pub fn section(&self, section: &str) -> &[String] {
        match section {
            "schemas" => &self.schemas,
            "responses" => &self.responses,
            "parameters" => &self.parameters,
            "examples" => &self.examples,
            "requestBodies" => &self.request_bodies,
            "headers" => &self.headers,
            "securitySchemes" => &self.security_schemes,
            "links" => &self.links,
            "callbacks" => &self.callbacks,
            _ => &[],
        }
    }

    fn sections_mut(&mut self) -> [&mut Vec<String>; 9] {
        [
            &mut self.schemas,
            &mut self.responses,
            &mut self.parameters,
            &mut self.examples,
            &mut self.request_bodies,
            &mut self.headers,
            &mut self.security_schemes,
            &mut self.links,
            &mut self.callbacks,
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.responses.is_empty()
            && self.parameters.is_empty()
            && self.examples.is_empty()
            && self.request_bodies.is_empty()
            && self.headers.is_empty()
            && self.security_schemes.is_empty()
            && self.links.is_empty()
            && self.callbacks.is_empty()
    }

    pub fn merge(&mut self, mut other: Self) {
        for (mine, theirs) in self.sections_mut().into_iter().zip(other.sections_mut()) {
            union_into(mine, std::mem::take(theirs));
        }
    }
}

fn union_into(target: &mut Vec<String>, extra: Vec<String>) {
    for item in extra {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rule_settings() {
        let yaml = r#"
rules:
  expressive-path-summary: true
  no-external-refs: false
  object-prop-casing: ["snake", { ignore: ["ID"] }]
"#;
        let config: SwaggerlintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.rules.get("expressive-path-summary"),
            Some(&RuleSetting::UseDefault)
        );
        assert_eq!(
            config.rules.get("no-external-refs"),
            Some(&RuleSetting::Disabled)
        );
        let casing = config.rules.get("object-prop-casing").unwrap();
        assert_eq!(casing.primary(), Some("snake"));
        assert_eq!(casing.string_list_option("ignore"), vec!["ID"]);
    }

    #[test]
    fn test_rules_preserve_configuration_order() {
        let json = r#"{"rules": {"zeta": true, "alpha": false, "mid": ["x"]}}"#;
        let config: SwaggerlintConfig = serde_json::from_str(json).unwrap();

        let names: Vec<_> = config.rules.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_invalid_rule_setting_shapes() {
        for value in [json!(1), json!([]), json!([1]), json!(["a", "b"]), json!(["a", {}, 3])] {
            assert!(
                RuleSetting::try_from(value.clone()).is_err(),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_rule_setting_roundtrips_to_json() {
        let mut options = Map::new();
        options.insert("ignore".to_string(), json!(["-"]));
        let setting = RuleSetting::custom("").with_options(options);

        assert_eq!(Value::from(setting), json!(["", {"ignore": ["-"]}]));
        assert_eq!(Value::from(RuleSetting::UseDefault), json!(true));
    }

    #[test]
    fn test_merge_overrides_in_place() {
        let mut base = RulesConfig::new()
            .with("first", RuleSetting::UseDefault)
            .with("second", RuleSetting::UseDefault);
        base.merge(
            RulesConfig::new()
                .with("third", RuleSetting::UseDefault)
                .with("first", RuleSetting::Disabled),
        );

        let entries: Vec<_> = base.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("first", &RuleSetting::Disabled),
                ("second", &RuleSetting::UseDefault),
                ("third", &RuleSetting::UseDefault),
            ]
        );
    }

    #[test]
    fn test_ignore_config_sections() {
        let yaml = r"
ignore:
  paths: ['/health']
  components:
    schemas: [Internal]
    requestBodies: [Legacy]
";
        let config: SwaggerlintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.ignore.paths, vec!["/health"]);
        assert_eq!(config.ignore.components.section("schemas"), ["Internal"]);
        assert_eq!(config.ignore.components.section("requestBodies"), ["Legacy"]);
        assert!(config.ignore.components.section("links").is_empty());
    }

    #[test]
    fn test_unknown_components_section_is_rejected() {
        let yaml = "ignore:\n  components:\n    widgets: [A]\n";
        let result: std::result::Result<SwaggerlintConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_ignore_merge_deduplicates() {
        let mut ignore = IgnoreConfig {
            definitions: vec!["A".to_string()],
            ..IgnoreConfig::default()
        };
        ignore.merge(IgnoreConfig {
            definitions: vec!["A".to_string(), "B".to_string()],
            ..IgnoreConfig::default()
        });
        assert_eq!(ignore.definitions, vec!["A", "B"]);
    }
}
