use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration at {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Cannot extend '{entry}' from {path}: {message}")]
    Extends {
        path: PathBuf,
        entry: String,
        message: String,
    },

    #[error("Configuration extends itself through {0}")]
    ExtendsCycle(PathBuf),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
