use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// A closed set of node roles a rule can subscribe to.
pub trait VisitorKind: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every kind, in declaration order
    const ALL: &'static [Self];

    /// The visitor-type name, e.g. `SchemaObject`
    fn as_str(self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visitor type '{0}'")]
pub struct UnknownVisitorKind(pub String);

macro_rules! visitor_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant,)+
        }

        impl VisitorKind for $name {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVisitorKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.as_str() == s)
                    .ok_or_else(|| UnknownVisitorKind(s.to_string()))
            }
        }
    };
}

visitor_kinds! {
    /// Node roles in a Swagger 2.0 document
    pub enum SwaggerVisitorName {
        Swagger => "SwaggerObject",
        Info => "InfoObject",
        Contact => "ContactObject",
        License => "LicenseObject",
        Paths => "PathsObject",
        PathItem => "PathItemObject",
        Operation => "OperationObject",
        ExternalDocumentation => "ExternalDocumentationObject",
        Parameter => "ParameterObject",
        Items => "ItemsObject",
        Responses => "ResponsesObject",
        Response => "ResponseObject",
        Headers => "HeadersObject",
        Header => "HeaderObject",
        Example => "ExampleObject",
        Schema => "SchemaObject",
        Xml => "XMLObject",
        Definitions => "DefinitionsObject",
        ParametersDefinitions => "ParametersDefinitionsObject",
        ResponsesDefinitions => "ResponsesDefinitionsObject",
        SecurityDefinitions => "SecurityDefinitionsObject",
        SecurityScheme => "SecuritySchemeObject",
        Scopes => "ScopesObject",
        SecurityRequirement => "SecurityRequirementObject",
        Tag => "TagObject",
        Reference => "ReferenceObject",
    }
}

visitor_kinds! {
    /// Node roles in an OpenAPI 3.x document
    pub enum OpenApiVisitorName {
        OpenApi => "OpenAPIObject",
        Info => "InfoObject",
        Contact => "ContactObject",
        License => "LicenseObject",
        Server => "ServerObject",
        ServerVariable => "ServerVariableObject",
        Components => "ComponentsObject",
        Paths => "PathsObject",
        PathItem => "PathItemObject",
        Operation => "OperationObject",
        ExternalDocumentation => "ExternalDocumentationObject",
        Parameter => "ParameterObject",
        RequestBody => "RequestBodyObject",
        MediaType => "MediaTypeObject",
        Encoding => "EncodingObject",
        Responses => "ResponsesObject",
        Response => "ResponseObject",
        Callback => "CallbackObject",
        Example => "ExampleObject",
        Link => "LinkObject",
        Header => "HeaderObject",
        Tag => "TagObject",
        Reference => "ReferenceObject",
        Schema => "SchemaObject",
        Discriminator => "DiscriminatorObject",
        Xml => "XMLObject",
        SecurityScheme => "SecuritySchemeObject",
        OAuthFlows => "OAuthFlowsObject",
        OAuthFlow => "OAuthFlowObject",
        SecurityRequirement => "SecurityRequirementObject",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for kind in SwaggerVisitorName::ALL {
            assert_eq!(kind.as_str().parse::<SwaggerVisitorName>(), Ok(*kind));
        }
        for kind in OpenApiVisitorName::ALL {
            assert_eq!(kind.as_str().parse::<OpenApiVisitorName>(), Ok(*kind));
        }
    }

    #[test]
    fn test_dialect_specific_names() {
        assert!("OpenAPIObject".parse::<SwaggerVisitorName>().is_err());
        assert!("DefinitionsObject".parse::<OpenApiVisitorName>().is_err());
        assert_eq!(SwaggerVisitorName::Xml.to_string(), "XMLObject");
    }
}
