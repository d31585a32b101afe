//! Raw record sources.

use parking_lot::RwLock;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CatalogError, Result};

/// Supplies the raw catalog document.
///
/// Implementations only read and parse; shape validation happens in the
/// builder.
pub trait RecordSource: Send + Sync {
    /// Load the current raw document.
    fn load(&self) -> Result<Value>;

    /// Short human-readable description (file path, "in-memory", ...).
    fn describe(&self) -> String;
}

impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    fn load(&self) -> Result<Value> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Value> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Holds the catalog document in memory. The document can be replaced to
/// simulate the source changing between reloads.
#[derive(Debug, Default)]
pub struct StaticSource {
    value: RwLock<Value>,
}

impl StaticSource {
    /// Create a source serving `value` until it is replaced.
    pub fn new(value: Value) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Replace the document returned by later loads.
    pub fn replace(&self, value: Value) {
        *self.value.write() = value;
    }
}

impl RecordSource for StaticSource {
    fn load(&self) -> Result<Value> {
        Ok(self.value.read().clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
