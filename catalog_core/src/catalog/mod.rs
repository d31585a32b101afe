//! Catalog module - ingestion and serving of the creature catalog.
//!
//! The catalog lifecycle:
//! 1. **Load**: a [`RecordSource`] produces the raw JSON document
//! 2. **Build**: [`CatalogBuilder`] validates it and canonicalizes each record
//! 3. **Swap**: [`CatalogService`] replaces its snapshot in one step
//! 4. **Lookup**: queries read the current snapshot without blocking reloads

mod builder;
mod service;
mod source;

pub use builder::*;
pub use service::*;
pub use source::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use creature_rules::{lookup_key, CanonicalRecord};

/// Unique identifier for a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub Uuid);

impl SnapshotId {
    /// Create a new random snapshot ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Counters collected while building a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Raw records seen.
    pub seen: usize,
    /// Records skipped for lacking a name or ultra ball value.
    pub dropped: usize,
    /// Records that replaced an earlier entry with the same key.
    pub overwritten: usize,
}

/// An immutable, keyed set of canonical records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    id: SnapshotId,
    records: HashMap<String, Arc<CanonicalRecord>>,
    stats: BuildStats,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its lookup key, replacing any earlier one.
    ///
    /// Returns the replaced record.
    pub fn insert(&mut self, record: CanonicalRecord) -> Option<Arc<CanonicalRecord>> {
        self.records
            .insert(record.lookup_key.clone(), Arc::new(record))
    }

    /// Get a record by its exact lookup key.
    pub fn get(&self, key: &str) -> Option<&Arc<CanonicalRecord>> {
        self.records.get(key)
    }

    /// Look up a user-supplied name (trimmed and lowercased first).
    pub fn lookup(&self, name: &str) -> Option<&Arc<CanonicalRecord>> {
        self.records.get(&lookup_key(name))
    }

    /// Identifier of this snapshot, unique per build.
    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// Counters collected while building this snapshot.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut BuildStats {
        &mut self.stats
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All lookup keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over all records.
    pub fn records(&self) -> impl Iterator<Item = &Arc<CanonicalRecord>> {
        self.records.values()
    }
}
