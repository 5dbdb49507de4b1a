//! Errors surfaced by a paginator run.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures that abort a run before the file map is touched.
#[derive(Debug, Error)]
pub enum PagerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read pagination template `{path}`")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
