use insta::assert_snapshot;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use swaggerlint::{
    default_config, LintError, Linter, RuleSetting, RulesConfig, SwaggerlintConfig, CORE_NAME,
    NO_ENABLED_RULES, UNSUPPORTED_DOCUMENT,
};

/// Load a JSON fixture
fn load_fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let contents = fs::read_to_string(path).expect("Failed to read fixture");
    serde_json::from_str(&contents).expect("Failed to parse fixture")
}

/// Config enabling the given rules with their defaults
fn enabled(rules: &[&str]) -> SwaggerlintConfig {
    SwaggerlintConfig::with_rules(
        rules
            .iter()
            .map(|name| ((*name).to_string(), RuleSetting::UseDefault))
            .collect::<RulesConfig>(),
    )
}

fn lint(document: &Value, config: SwaggerlintConfig) -> Vec<LintError> {
    Linter::new(config)
        .with_defaults(default_config().rules)
        .lint(document)
}

/// Format errors for snapshot testing
fn format_errors(errors: &[LintError]) -> String {
    errors
        .iter()
        .map(|error| format!("{} @ {}: {}", error.name, error.location, error.msg))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_short_and_missing_summaries() {
    let document = load_fixture("petstore_swagger.json");

    let errors = lint(&document, enabled(&["expressive-path-summary"]));

    assert_snapshot!(format_errors(&errors), @r#"
    expressive-path-summary @ paths./pet/{petId}/uploadImage.get.summary: Every path summary should contain at least 2 words. This has "upload-image"
    expressive-path-summary @ paths./pet/{petId}/uploadImage.post: Every path has to have a summary.
    "#);
}

#[test]
fn test_non_latin_definition_and_ignore() {
    let document = load_fixture("petstore_swagger.json");

    let errors = lint(&document, enabled(&["latin-definitions-only"]));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location, ["definitions", "invalid-obj"]);

    let mut config = enabled(&["latin-definitions-only"]);
    config.ignore.definitions.push("invalid-obj".to_string());
    assert!(lint(&document, config).is_empty());
}

#[test]
fn test_external_reference_in_components() {
    let document = load_fixture("components_openapi.json");

    let errors = lint(&document, enabled(&["no-external-refs"]));

    assert_snapshot!(
        format_errors(&errors),
        @"no-external-refs @ components.schemas.Example.properties.bar: External references are banned."
    );
}

#[test]
fn test_unsupported_document() {
    let document = load_fixture("not_a_schema.json");

    let errors = lint(&document, default_config());

    assert_eq!(errors, vec![LintError::core(UNSUPPORTED_DOCUMENT)]);
    assert!(errors[0].location.is_empty());
}

#[test]
fn test_default_rules_on_swagger() {
    let document = load_fixture("petstore_swagger.json");

    let errors = lint(&document, default_config());

    assert_snapshot!(format_errors(&errors), @r#"
    expressive-path-summary @ paths./pet/{petId}/uploadImage.get.summary: Every path summary should contain at least 2 words. This has "upload-image"
    expressive-path-summary @ paths./pet/{petId}/uploadImage.post: Every path has to have a summary.
    latin-definitions-only @ definitions.invalid-obj: Definition name "invalid-obj" contains non latin characters.
    "#);
}

#[test]
fn test_default_rules_on_openapi() {
    let document = load_fixture("components_openapi.json");

    let errors = lint(&document, default_config());

    assert_snapshot!(format_errors(&errors), @r#"
    expressive-path-summary @ paths./legacy.get.summary: Every path summary should contain at least 2 words. This has "legacy"
    latin-definitions-only @ components.schemas.Unused_Thing: Definition name "Unused_Thing" contains non latin characters.
    no-external-refs @ components.schemas.Example.properties.bar: External references are banned.
    object-prop-casing @ components.schemas.Unused_Thing.properties.some_prop: Property "some_prop" has wrong casing. Expected camel.
    required-operation-tags @ paths./legacy.get: Operation should have at least one tag.
    required-tag-description @ tags.0: Tag "example" is missing a description.
    "#);
}

#[test]
fn test_ignored_openapi_nodes_produce_no_errors() {
    let document = load_fixture("components_openapi.json");
    let mut config = enabled(&[
        "expressive-path-summary",
        "latin-definitions-only",
        "object-prop-casing",
    ]);
    config.ignore.paths.push("/legacy".to_string());
    config
        .ignore
        .components
        .schemas
        .push("Unused_Thing".to_string());

    assert!(lint(&document, config).is_empty());
}

#[test]
fn test_lint_is_deterministic() {
    let document = load_fixture("components_openapi.json");

    let first = lint(&document, default_config());
    let second = lint(&document, default_config());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_disabled_rule_is_isolated() {
    let document = load_fixture("components_openapi.json");
    let mut config = default_config();
    config.rules.set("no-external-refs", RuleSetting::Disabled);

    let all = lint(&document, default_config());
    let errors = lint(&document, config);

    assert!(errors.iter().all(|error| error.name != "no-external-refs"));
    assert_eq!(errors.len(), all.len() - 1);
}

#[test]
fn test_unknown_rule_is_reported_and_skipped() {
    let document = load_fixture("components_openapi.json");

    let errors = lint(&document, enabled(&["not-a-rule", "no-external-refs"]));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].name, CORE_NAME);
    assert!(errors[0].msg.contains("not-a-rule"));
    assert_eq!(errors[1].name, "no-external-refs");
}

#[test]
fn test_zero_enabled_rules() {
    let document = load_fixture("petstore_swagger.json");
    let config = SwaggerlintConfig::with_rules(
        RulesConfig::new()
            .with("expressive-path-summary", RuleSetting::Disabled)
            .with("no-external-refs", RuleSetting::Disabled),
    );

    let errors = lint(&document, config);

    assert_eq!(errors, vec![LintError::core(NO_ENABLED_RULES)]);
}

#[test]
fn test_json_output_shape() {
    let document = load_fixture("petstore_swagger.json");
    let mut config = SwaggerlintConfig::with_rules(
        RulesConfig::new().with("object-prop-casing", RuleSetting::custom("pascal")),
    );
    config.ignore.definitions.push("invalid-obj".to_string());

    let errors = lint(&document, config);
    let first = serde_json::to_value(&errors[0]).unwrap();

    assert_eq!(
        first,
        json!({
            "name": "object-prop-casing",
            "msg": "Property \"code\" has wrong casing. Expected pascal.",
            "location": ["definitions", "ApiResponse", "properties", "code"],
            "messageId": "casing",
            "data": {"key": "code", "casing": "pascal"}
        })
    );
}
