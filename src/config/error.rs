//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config JSON parsing error")]
    Json(#[from] serde_json::Error),

    /// A required setting is absent or empty.
    #[error("The \"{0}\" setting must be specified")]
    Missing(&'static str),

    #[error("The \"elementsPerPage\" setting must be specified as a number")]
    NotANumber,

    #[error("Config validation error: {0}")]
    Validation(String),
}
