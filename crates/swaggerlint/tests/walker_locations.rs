use insta::assert_snapshot;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use swaggerlint::walker::{filter_ignored, walk_openapi, walk_swagger};
use swaggerlint::{
    Dialect, IgnoreConfig, OpenApiVisitorName, SwaggerVisitorName, VisitorBucket, VisitorKind,
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

/// One location per line, in visit order
fn format_locations<K: VisitorKind>(bucket: &VisitorBucket<'_, K>, kind: K) -> String {
    bucket
        .locations(kind)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_swagger_schema_locations() {
    let document = load_fixture("petstore_swagger.json");
    let bucket = walk_swagger(&document).unwrap();

    assert_snapshot!(format_locations(&bucket, SwaggerVisitorName::Schema), @r"
    paths./pets.get.responses.200.schema
    definitions.ApiResponse
    definitions.ApiResponse.properties.code
    definitions.ApiResponse.properties.message
    definitions.Pet
    definitions.Pet.properties.id
    definitions.Pet.properties.tags
    definitions.Category
    definitions.Category.properties.id
    definitions.Tag
    definitions.Tag.properties.name
    definitions.invalid-obj
    ");
}

#[test]
fn test_swagger_reference_locations() {
    let document = load_fixture("petstore_swagger.json");
    let bucket = walk_swagger(&document).unwrap();

    assert_snapshot!(format_locations(&bucket, SwaggerVisitorName::Reference), @r"
    paths./pet/{petId}/uploadImage.get.responses.200.schema
    paths./pet/{petId}/uploadImage.post.parameters.0.schema
    paths./pets.get.responses.200.schema.items
    definitions.Pet.properties.category
    definitions.Pet.properties.tags.items
    definitions.Category.properties.parent
    ");
}

#[test]
fn test_swagger_shared_target_visited_once() {
    let document = load_fixture("petstore_swagger.json");
    let bucket = walk_swagger(&document).unwrap();

    // Pet is referenced from two operations; Category references itself
    for name in ["Pet", "Category"] {
        let visits = bucket
            .get(SwaggerVisitorName::Schema)
            .iter()
            .filter(|visited| visited.location == ["definitions", name])
            .count();
        assert_eq!(visits, 1, "{name} should be expanded once");
    }
}

#[test]
fn test_openapi_cyclic_components() {
    let document = load_fixture("components_openapi.json");
    let bucket = walk_openapi(&document).unwrap();

    assert_snapshot!(format_locations(&bucket, OpenApiVisitorName::Schema), @r"
    components.schemas.Example
    components.schemas.Foo
    components.schemas.Foo.properties.fooId
    components.schemas.Unused_Thing
    components.schemas.Unused_Thing.properties.some_prop
    ");
    assert_snapshot!(format_locations(&bucket, OpenApiVisitorName::Reference), @r"
    paths./examples.get.responses.200.content.application/json.schema
    components.schemas.Example.properties.bar
    components.schemas.Example.properties.foo
    components.schemas.Foo.properties.example
    ");
}

#[test]
fn test_openapi_ignored_nodes_are_never_visited() {
    let document = load_fixture("components_openapi.json");
    let ignore: IgnoreConfig = serde_json::from_value(serde_json::json!({
        "paths": ["/legacy"],
        "components": {"schemas": ["Unused_Thing"]}
    }))
    .unwrap();

    let filtered = filter_ignored(&document, Dialect::OpenApi, &ignore);
    let bucket = walk_openapi(&filtered).unwrap();

    let ignored = |kind: OpenApiVisitorName| {
        bucket.get(kind).iter().any(|visited| {
            let location = visited.location.to_string();
            location.starts_with("paths./legacy")
                || location.starts_with("components.schemas.Unused_Thing")
        })
    };
    assert!(OpenApiVisitorName::ALL.iter().all(|kind| !ignored(*kind)));
    assert_snapshot!(
        format_locations(&bucket, OpenApiVisitorName::Operation),
        @"paths./examples.get"
    );
}

#[test]
fn test_swagger_response_header_locations() {
    let document = json!({
        "swagger": "2.0",
        "info": {"title": "Pets", "version": "1"},
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {
                            "description": "ok",
                            "headers": {
                                "x-request-id": {"type": "string"},
                                "X-Page-Ids": {
                                    "type": "array",
                                    "items": {"type": "array", "items": {"type": "integer"}}
                                }
                            }
                        }
                    }
                }
            }
        }
    });
    let bucket = walk_swagger(&document).unwrap();

    assert_snapshot!(format_locations(&bucket, SwaggerVisitorName::Header), @r"
    paths./pets.get.responses.200.headers.x-request-id
    paths./pets.get.responses.200.headers.X-Page-Ids
    ");
    assert_snapshot!(format_locations(&bucket, SwaggerVisitorName::Items), @r"
    paths./pets.get.responses.200.headers.X-Page-Ids.items
    paths./pets.get.responses.200.headers.X-Page-Ids.items.items
    ");
}
