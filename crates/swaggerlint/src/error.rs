use crate::Location;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwaggerlintError>;

#[derive(Debug, Error)]
pub enum SwaggerlintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not parse {source_name}: {message}")]
    DocumentParse {
        source_name: String,
        message: String,
    },

    #[error("Neither url nor path were provided for your swagger scheme")]
    NoInput,
}

/// A document shape the walker cannot descend into
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("expected {expected} at \"{location}\"")]
    UnexpectedShape {
        location: Location,
        expected: &'static str,
    },
}
