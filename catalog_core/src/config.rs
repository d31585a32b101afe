//! Configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use creature_rules::{ElementType, TypeResolver};

use crate::error::{CatalogError, Result};

/// Default location of the catalog data file.
pub const DEFAULT_SOURCE_PATH: &str = "pokemons.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: SourceConfig,
    pub taxonomy: TaxonomyConfig,
    pub logging: LoggingConfig,
}

/// Where the raw records come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOURCE_PATH),
        }
    }
}

/// Extra type synonyms on top of the built-in table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Label -> element type code, e.g. `"aco" = "STEEL"`.
    pub synonyms: BTreeMap<String, String>,
}

impl TaxonomyConfig {
    /// Build a resolver with the built-in table plus the configured synonyms.
    pub fn resolver(&self) -> Result<TypeResolver> {
        let mut resolver = TypeResolver::new();
        for (label, code) in &self.synonyms {
            let element: ElementType = code.parse().map_err(|e| {
                CatalogError::Config(format!("synonym '{}': {}", label, e))
            })?;
            resolver = resolver.with_synonym(label, element);
        }
        Ok(resolver)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl CatalogConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
