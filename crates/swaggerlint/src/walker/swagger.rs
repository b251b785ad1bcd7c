use super::engine::{
    array, each_entry, each_item, is_boolean_schema, is_extension, object, WalkDialect, Walker,
};
use super::{SwaggerVisitorName as Kind, VisitorBucket};
use crate::refs::SwaggerSection as Section;
use crate::{Location, WalkError};
use serde_json::Value;

/// Operation keys of a Swagger path item
pub const SWAGGER_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

pub(crate) struct Swagger;

type SwaggerWalker<'a> = Walker<'a, Swagger>;

impl WalkDialect for Swagger {
    type Kind = Kind;
    type Section = Section;

    const REFERENCE: Kind = Kind::Reference;

    fn expand<'a>(
        walker: &mut SwaggerWalker<'a>,
        section: Section,
        node: &'a Value,
        location: &Location,
    ) -> Result<(), WalkError> {
        match section {
            Section::Definitions => walker.schema(node, location),
            Section::Parameters => walker.parameter(node, location),
            Section::Responses => walker.response(node, location),
        }
    }
}

/// Walk a Swagger 2.0 document.
///
/// Top-level objects are recorded first, then every path, then the targets
/// of references met along the way, then any `definitions`, `parameters`
/// and `responses` members no reference reached.
pub fn walk_swagger(document: &Value) -> Result<VisitorBucket<'_, Kind>, WalkError> {
    let mut walker = SwaggerWalker::new(document);
    walker.document()?;
    Ok(walker.finish())
}

impl<'a> SwaggerWalker<'a> {
    fn document(&mut self) -> Result<(), WalkError> {
        let document = self.root();
        let location = Location::root();
        let root = object(document, &location)?;
        self.visit(Kind::Swagger, document, &location);

        if let Some(info) = root.get("info") {
            self.info(info, &location.child("info"))?;
        }
        if let Some(paths) = root.get("paths") {
            self.visit(Kind::Paths, paths, &location.child("paths"));
        }
        for (key, kind) in [
            ("definitions", Kind::Definitions),
            ("parameters", Kind::ParametersDefinitions),
            ("responses", Kind::ResponsesDefinitions),
        ] {
            if let Some(section) = root.get(key) {
                self.visit(kind, section, &location.child(key));
            }
        }
        if let Some(schemes) = root.get("securityDefinitions") {
            self.security_definitions(schemes, &location.child("securityDefinitions"))?;
        }
        each_item(root, "security", &location, |requirement, location| {
            self.visit(Kind::SecurityRequirement, requirement, &location);
            Ok(())
        })?;
        each_item(root, "tags", &location, |tag, location| self.tag(tag, &location))?;
        if let Some(docs) = root.get("externalDocs") {
            self.visit(Kind::ExternalDocumentation, docs, &location.child("externalDocs"));
        }

        if let Some(paths) = root.get("paths") {
            self.paths(paths, &location.child("paths"))?;
        }
        self.drain()?;

        for section in Section::ALL {
            if let Some(members) = root.get(section.key()) {
                self.expand_section(section, members, &location.child(section.key()))?;
            }
        }
        self.drain()
    }

    fn info(&mut self, info: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(info, location)?;
        self.visit(Kind::Info, info, location);
        if let Some(contact) = fields.get("contact") {
            self.visit(Kind::Contact, contact, &location.child("contact"));
        }
        if let Some(license) = fields.get("license") {
            self.visit(Kind::License, license, &location.child("license"));
        }
        Ok(())
    }

    fn security_definitions(
        &mut self,
        schemes: &'a Value,
        location: &Location,
    ) -> Result<(), WalkError> {
        self.visit(Kind::SecurityDefinitions, schemes, location);
        for (name, scheme) in object(schemes, location)? {
            let location = location.child(name);
            let fields = object(scheme, &location)?;
            self.visit(Kind::SecurityScheme, scheme, &location);
            if let Some(scopes) = fields.get("scopes") {
                self.visit(Kind::Scopes, scopes, &location.child("scopes"));
            }
        }
        Ok(())
    }

    fn tag(&mut self, tag: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(tag, location)?;
        self.visit(Kind::Tag, tag, location);
        if let Some(docs) = fields.get("externalDocs") {
            self.visit(Kind::ExternalDocumentation, docs, &location.child("externalDocs"));
        }
        Ok(())
    }

    fn paths(&mut self, paths: &'a Value, location: &Location) -> Result<(), WalkError> {
        for (path, item) in object(paths, location)? {
            if is_extension(path) {
                continue;
            }
            let location = location.child(path);
            if self.reference(None, item, &location) {
                continue;
            }
            let fields = object(item, &location)?;
            self.visit(Kind::PathItem, item, &location);

            for method in SWAGGER_METHODS {
                if let Some(operation) = fields.get(*method) {
                    self.operation(operation, &location.child(*method))?;
                }
            }
            each_item(fields, "parameters", &location, |parameter, location| {
                self.parameter(parameter, &location)
            })?;
        }
        Ok(())
    }

    fn operation(&mut self, operation: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(operation, location)?;
        self.visit(Kind::Operation, operation, location);

        if let Some(docs) = fields.get("externalDocs") {
            self.visit(Kind::ExternalDocumentation, docs, &location.child("externalDocs"));
        }
        each_item(fields, "parameters", location, |parameter, location| {
            self.parameter(parameter, &location)
        })?;
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
        each_item(fields, "security", location, |requirement, location| {
            self.visit(Kind::SecurityRequirement, requirement, &location);
            Ok(())
        })
    }

    fn parameter(&mut self, parameter: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Parameters), parameter, location) {
            return Ok(());
        }
        let fields = object(parameter, location)?;
        self.visit(Kind::Parameter, parameter, location);

        if fields.get("in").and_then(Value::as_str) == Some("body") {
            if let Some(schema) = fields.get("schema") {
                self.schema(schema, &location.child("schema"))?;
            }
        } else if let Some(items) = fields.get("items") {
            self.items(items, &location.child("items"))?;
        }
        Ok(())
    }

    fn response(&mut self, response: &'a Value, location: &Location) -> Result<(), WalkError> {
        if self.reference(Some(Section::Responses), response, location) {
            return Ok(());
        }
        let fields = object(response, location)?;
        self.visit(Kind::Response, response, location);

        if let Some(schema) = fields.get("schema") {
            self.schema(schema, &location.child("schema"))?;
        }
        if let Some(headers) = fields.get("headers") {
            self.visit(Kind::Headers, headers, &location.child("headers"));
            each_entry(fields, "headers", location, |_, header, location| {
                let header_fields = object(header, &location)?;
                self.visit(Kind::Header, header, &location);
                if let Some(items) = header_fields.get("items") {
                    self.items(items, &location.child("items"))?;
                }
                Ok(())
            })?;
        }
        if let Some(examples) = fields.get("examples") {
            self.visit(Kind::Example, examples, &location.child("examples"));
        }
        Ok(())
    }

    fn items(&mut self, items: &'a Value, location: &Location) -> Result<(), WalkError> {
        let fields = object(items, location)?;
        self.visit(Kind::Items, items, location);
        if let Some(nested) = fields.get("items") {
            self.items(nested, &location.child("items"))?;
        }
        Ok(())
    }

    fn schema(&mut self, schema: &'a Value, location: &Location) -> Result<(), WalkError> {
        if is_boolean_schema(schema) || self.reference(Some(Section::Definitions), schema, location)
        {
            return Ok(());
        }
        let fields = object(schema, location)?;
        self.visit(Kind::Schema, schema, location);

        if let Some(xml) = fields.get("xml") {
            self.visit(Kind::Xml, xml, &location.child("xml"));
        }
        if let Some(docs) = fields.get("externalDocs") {
            self.visit(Kind::ExternalDocumentation, docs, &location.child("externalDocs"));
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
        each_item(fields, "allOf", location, |member, location| {
            self.schema(member, &location)
        })?;
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
        Ok(())
    }
}
