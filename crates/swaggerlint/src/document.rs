use crate::{Result, SwaggerlintError};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// The document families the linter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Swagger 2.0
    Swagger,
    /// OpenAPI 3.x
    OpenApi,
}

impl Dialect {
    /// Classify a parsed document.
    ///
    /// Requires `swagger: "2.0"` or an `openapi` version starting with `3.`,
    /// plus `info` and `paths` objects. Returns `None` for anything else.
    #[must_use]
    pub fn detect(document: &Value) -> Option<Self> {
        let root = document.as_object()?;
        if !root.get("info").is_some_and(Value::is_object)
            || !root.get("paths").is_some_and(Value::is_object)
        {
            return None;
        }

        if root.get("swagger").and_then(Value::as_str) == Some("2.0") {
            return Some(Self::Swagger);
        }
        if root
            .get("openapi")
            .and_then(Value::as_str)
            .is_some_and(|version| version.starts_with("3."))
        {
            return Some(Self::OpenApi);
        }
        None
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swagger => f.write_str("Swagger 2.0"),
            Self::OpenApi => f.write_str("OpenAPI 3.x"),
        }
    }
}

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Local file
    Path(PathBuf),
    /// Remote document fetched over HTTP(S)
    Url(String),
}

impl SchemaSource {
    fn name(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }

    fn looks_like_json(&self) -> bool {
        match self {
            Self::Path(path) => has_extension(path, "json"),
            Self::Url(url) => url
                .split(['?', '#'])
                .next()
                .is_some_and(|base| base.ends_with(".json")),
        }
    }
}

/// Loads API documents from disk or over HTTP into a JSON value
pub struct SchemaLoader {
    source: SchemaSource,
}

impl SchemaLoader {
    #[must_use]
    pub const fn new(source: SchemaSource) -> Self {
        Self { source }
    }

    /// Load and parse the document
    pub async fn load(&self) -> Result<Value> {
        let contents = match &self.source {
            SchemaSource::Path(path) => std::fs::read_to_string(path)?,
            SchemaSource::Url(url) => self.load_remote(url).await?,
        };
        parse_document(&contents, &self.source)
    }

    async fn load_remote(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "Fetching remote document");
        let response = reqwest::get(url).await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Parse document text as JSON or YAML.
///
/// JSON is used when the source has a `.json` extension or the text starts
/// with `{`; everything else goes through the YAML parser.
pub fn parse_document(contents: &str, source: &SchemaSource) -> Result<Value> {
    if source.looks_like_json() || contents.trim_start().starts_with('{') {
        serde_json::from_str(contents).map_err(|e| SwaggerlintError::DocumentParse {
            source_name: source.name(),
            message: e.to_string(),
        })
    } else {
        serde_yaml::from_str(contents).map_err(|e| SwaggerlintError::DocumentParse {
            source_name: source.name(),
            message: e.to_string(),
        })
    }
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}
