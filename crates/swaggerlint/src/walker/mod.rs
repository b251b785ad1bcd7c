//! Document traversal.
//!
//! Both dialects share one depth-first engine ([`engine::Walker`]) and plug
//! in their own node handlers. A walk produces a [`VisitorBucket`] holding
//! every visited node with its location, grouped by visitor kind.

mod bucket;
mod engine;
mod ignore;
mod kinds;
mod openapi;
mod swagger;

pub use bucket::{VisitedNode, VisitorBucket};
pub use ignore::filter_ignored;
pub use kinds::{OpenApiVisitorName, SwaggerVisitorName, UnknownVisitorKind, VisitorKind};
pub use openapi::{walk_openapi, OPENAPI_METHODS};
pub use swagger::{walk_swagger, SWAGGER_METHODS};

use crate::{Dialect, WalkError};
use serde_json::Value;

/// The result of walking a document of either dialect
#[derive(Debug, Clone)]
pub enum Walked<'a> {
    Swagger(VisitorBucket<'a, SwaggerVisitorName>),
    OpenApi(VisitorBucket<'a, OpenApiVisitorName>),
}

impl Walked<'_> {
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::Swagger(_) => Dialect::Swagger,
            Self::OpenApi(_) => Dialect::OpenApi,
        }
    }

    /// Total number of visited nodes
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Swagger(bucket) => bucket.len(),
            Self::OpenApi(bucket) => bucket.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk `document` with the walker for `dialect`
pub fn walk(document: &Value, dialect: Dialect) -> Result<Walked<'_>, WalkError> {
    match dialect {
        Dialect::Swagger => walk_swagger(document).map(Walked::Swagger),
        Dialect::OpenApi => walk_openapi(document).map(Walked::OpenApi),
    }
}
