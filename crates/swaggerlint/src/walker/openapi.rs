use super::engine::{
    array, each_entry, each_item, is_boolean_schema, is_extension, object, WalkDialect, Walker,
};
use super::{OpenApiVisitorName as Kind, VisitorBucket};
use crate::refs::OpenApiSection as Section;
use crate::{Location, WalkError};
use serde_json::{Map, Value};

/// Operation keys of an OpenAPI path item
pub const OPENAPI_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Flow kinds of an OAuth2 security scheme
const OAUTH_FLOWS: &[&str] = &["implicit", "password", "clientCredentials", "authorizationCode"];

pub(crate) struct OpenApi;

type OpenApiWalker<'a> = Walker<'a, OpenApi>;

impl WalkDialect for OpenApi {
    type Kind = Kind;
    type Section = Section;

    const REFERENCE: Kind = Kind::Reference;

    fn expand<'a>(
        walker: &mut OpenApiWalker<'a>,
        section: Section,
        node: &'a Value,
        location: &Location,
    ) -> Result<(), WalkError> {
        match section {
            Section::Schemas => walker.schema(node, location),
            Section::Responses => walker.response(node, location),
            Section::Parameters => walker.parameter(node, location),
            Section::Examples => walker.example(node, location),
            Section::RequestBodies => walker.request_body(node, location),
            Section::Headers => walker.header(node, location),
            Section::SecuritySchemes => walker.security_scheme(node, location),
            Section::Links => walker.link(node, location),
            Section::Callbacks => walker.callback(node, location),
        }
    }
}

/// Walk an OpenAPI 3.x document.
///
/// Top-level objects are recorded first, then every path item with its
/// operations, then the targets of references met along the way, then every
/// `components` member no reference reached.
pub fn walk_openapi(document: &Value) -> Result<VisitorBucket<'_, Kind>, WalkError> {
    let mut walker = OpenApiWalker::new(document);
    walker.document()?;
    Ok(walker.finish())
}

impl<'a> OpenApiWalker<'a> {
    fn document(&mut self) -> Result<(), WalkError> {
        let document = self.root();
        let location = Location::root();
        let root = object(document, &location)?;
        self.visit(Kind::OpenApi, document, &location);

        if let Some(info) = root.get("info") {
            let info_location = location.child("info");
            let fields = object(info, &info_location)?;
            self.visit(Kind::Info, info, &info_location);
            if let Some(contact) = fields.get("contact") {
                self.visit(Kind::Contact, contact, &info_location.child("contact"));
            }
            if let Some(license) = fields.get("license") {
                self.visit(Kind::License, license, &info_location.child("license"));
            }
        }
        each_item(root, "servers", &location, |server, location| {
            self.server(server, &location)
        })?;
        if let Some(paths) = root.get("paths") {
            self.visit(Kind::Paths, paths, &location.child("paths"));
        }
        if let Some(components) = root.get("components") {
            self.visit(Kind::Components, components, &location.child("components"));
        }
        each_item(root, "security", &location, |requirement, location| {
            self.visit(Kind::SecurityRequirement, requirement, &location);
            Ok(())
        })?;
        each_item(root, "tags", &location, |tag, location| {
            let fields = object(tag, &location)?;
            self.visit(Kind::Tag, tag, &location);
            self.external_docs(fields, &location);
            Ok(())
        })?;
        self.external_docs(root, &location);

        if let Some(paths) = root.get("paths") {
            let location = location.child("paths");
            for (path, item) in object(paths, &location)? {
                if is_extension(path) {
                    continue;
                }
                self.path_item(item, &location.child(path))?;
            }
        }
        self.drain()?;

        if let Some(components) = root.get("components") {
            let location = location.child("components");
            let fields = object(components, &location)?;
            for section in Section::ALL {
                if let Some(members) = fields.get(section.key()) {
                    self.expand_section(section, members, &location.child(section.key()))?;
                }
            }
        }
        self.drain()
    }

    fn external_docs(&mut self, fields: &'a Map<String, Value>, location: &Location) {
        if let Some(docs) = fields.get("externalDocs") {
            self.visit(Kind::ExternalDocumentation, docs, &location.child("externalDocs"));
        }
    }

    fn path_item(&mut self, item: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(None, item, location) {
            return Ok(());
        }
        let fields = object(item, location)?;
        self.visit(Kind::PathItem, item, location);

        for method in OPENAPI_METHODS {
            if let Some(operation) = fields.get(*method) {
                self.operation(operation, &location.child(*method))?;
            }
        }
        each_item(fields, "servers", location, |server, location| {
            self.server(server, &location)
        })?;
        each_item(fields, "parameters", location, |parameter, location| {
            self.parameter(parameter, &location)
        })
    }

    fn operation(&mut self, operation: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(operation, location)?;
        self.visit(Kind::Operation, operation, location);

        self.external_docs(fields, location);
        each_item(fields, "parameters", location, |parameter, location| {
            self.parameter(parameter, &location)
        })?;
        if let Some(body) = fields.get("requestBody") {
            self.request_body(body, &location.child("requestBody"))?;
        }
        if let Some(responses) = fields.get("responses") {
            let location = location.child("responses");
            self.visit(Kind::Responses, responses, &location);
            for (status, response) in object(responses, &location)? {
                if is_extension(status) {
                    continue;
                }
                self.response(response, &location.child(status))?;
            }
        }
        each_entry(fields, "callbacks", location, |_, callback, location| {
            self.callback(callback, &location)
        })?;
        each_item(fields, "security", location, |requirement, location| {
            self.visit(Kind::SecurityRequirement, requirement, &location);
            Ok(())
        })?;
        each_item(fields, "servers", location, |server, location| {
            self.server(server, &location)
        })
    }

    fn server(&mut self, server: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(server, location)?;
        self.visit(Kind::Server, server, location);
        each_entry(fields, "variables", location, |_, variable, location| {
            self.visit(Kind::ServerVariable, variable, &location);
            Ok(())
        })
    }

    fn schema(&mut self, schema: &'a Value, location: &Location) -> Result<(), WalkError> {
        if is_boolean_schema(schema) || self.reference(Some(Section::Schemas), schema, location) {
            return Ok(());
        }
        let fields = object(schema, location)?;
        self.visit(Kind::Schema, schema, location);

        if let Some(discriminator) = fields.get("discriminator") {
            self.visit(Kind::Discriminator, discriminator, &location.child("discriminator"));
        }
        if let Some(xml) = fields.get("xml") {
            self.visit(Kind::Xml, xml, &location.child("xml"));
        }
        self.external_docs(fields, location);
        for combinator in ["allOf", "oneOf", "anyOf"] {
            each_item(fields, combinator, location, |member, location| {
                self.schema(member, &location)
            })?;
        }
        if let Some(not) = fields.get("not") {
            self.schema(not, &location.child("not"))?;
        }
        if let Some(items) = fields.get("items") {
            let location = location.child("items");
            match items {
                Value::Array(_) => {
                    for (index, item) in array(items, &location)?.iter().enumerate() {
                        self.schema(item, &location.index(index))?;
                    }
                }
                _ => self.schema(items, &location)?,
            }
        }
        if let Some(properties) = fields.get("properties") {
            let location = location.child("properties");
            for (name, property) in object(properties, &location)? {
                self.schema(property, &location.child(name))?;
            }
        }
        if let Some(additional) = fields.get("additionalProperties") {
            self.schema(additional, &location.child("additionalProperties"))?;
        }
        Ok(())
    }

    fn examples(
        &mut self,
        fields: &'a Map<String, Value>,
        location: &Location,
    ) -> Result<(), WalkError> {
        each_entry(fields, "examples", location, |_, example, location| {
            self.example(example, &location)
        })
    }

    fn example(&mut self, example: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Examples), example, location) {
            return Ok(());
        }
        object(example, location)?;
        self.visit(Kind::Example, example, location);
        Ok(())
    }

    fn content(
        &mut self,
        fields: &'a Map<String, Value>,
        location: &Location,
    ) -> Result<(), WalkError> {
        each_entry(fields, "content", location, |_, media_type, location| {
            self.media_type(media_type, &location)
        })
    }

    fn header(&mut self, header: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Headers), header, location) {
            return Ok(());
        }
        let fields = object(header, location)?;
        self.visit(Kind::Header, header, location);

        if let Some(schema) = fields.get("schema") {
            self.schema(schema, &location.child("schema"))?;
        }
        self.examples(fields, location)?;
        self.content(fields, location)
    }

    fn headers(
        &mut self,
        fields: &'a Map<String, Value>,
        location: &Location,
    ) -> Result<(), WalkError> {
        each_entry(fields, "headers", location, |_, header, location| {
            self.header(header, &location)
        })
    }

    fn media_type(&mut self, media_type: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(media_type, location)?;
        self.visit(Kind::MediaType, media_type, location);

        if let Some(schema) = fields.get("schema") {
            self.schema(schema, &location.child("schema"))?;
        }
        self.examples(fields, location)?;
        each_entry(fields, "encoding", location, |_, encoding, location| {
            let encoding_fields = object(encoding, &location)?;
            self.visit(Kind::Encoding, encoding, &location);
            self.headers(encoding_fields, &location)
        })
    }

    fn response(&mut self, response: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Responses), response, location) {
            return Ok(());
        }
        let fields = object(response, location)?;
        self.visit(Kind::Response, response, location);

        self.headers(fields, location)?;
        self.content(fields, location)?;
        each_entry(fields, "links", location, |_, link, location| {
            self.link(link, &location)
        })
    }

    fn link(&mut self, link: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Links), link, location) {
            return Ok(());
        }
        let fields = object(link, location)?;
        self.visit(Kind::Link, link, location);
        if let Some(server) = fields.get("server") {
            self.server(server, &location.child("server"))?;
        }
        Ok(())
    }

    fn request_body(&mut self, body: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::RequestBodies), body, location) {
            return Ok(());
        }
        let fields = object(body, location)?;
        self.visit(Kind::RequestBody, body, location);
        self.content(fields, location)
    }

    fn parameter(&mut self, parameter: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Parameters), parameter, location) {
            return Ok(());
        }
        let fields = object(parameter, location)?;
        self.visit(Kind::Parameter, parameter, location);

        if fields.contains_key("content") {
            self.content(fields, location)
        } else {
            if let Some(schema) = fields.get("schema") {
                self.schema(schema, &location.child("schema"))?;
            }
            self.examples(fields, location)
        }
    }

    /// Callbacks are recorded but their path items are not walked
    fn callback(&mut self, callback: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Callbacks), callback, location) {
            return Ok(());
        }
        object(callback, location)?;
        self.visit(Kind::Callback, callback, location);
        Ok(())
    }

    fn security_scheme(&mut self, scheme: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::SecuritySchemes), scheme, location) {
            return Ok(());
        }
        let fields = object(scheme, location)?;
        self.visit(Kind::SecurityScheme, scheme, location);

        if fields.get("type").and_then(Value::as_str) != Some("oauth2") {
            return Ok(());
        }
        if let Some(flows) = fields.get("flows") {
            let location = location.child("flows");
            let flow_fields = object(flows, &location)?;
            self.visit(Kind::OAuthFlows, flows, &location);
            for kind in OAUTH_FLOWS {
                if let Some(flow) = flow_fields.get(*kind) {
                    self.visit(Kind::OAuthFlow, flow, &location.child(*kind));
                }
            }
        }
        Ok(())
    }
}
