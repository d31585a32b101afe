//! Error types for catalog loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a catalog or its configuration.
///
/// None of these are fatal to a running service: a failed reload keeps the
/// previous snapshot in place.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source parsed but is not a list of records.
    #[error("malformed catalog source: {0}")]
    MalformedSource(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog source is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
