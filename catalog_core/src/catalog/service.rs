//! Catalog service - owns the active snapshot and serves lookups.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use creature_rules::CanonicalRecord;

use super::{Catalog, CatalogBuilder, JsonFileSource, RecordSource};
use crate::config::CatalogConfig;
use crate::error::Result;

/// Result of a user query against the service.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Arc<CanonicalRecord>),
    /// The catalog is loaded but has no entry for the name.
    NotFound,
    /// No usable catalog is loaded.
    Unavailable,
}

/// Owns the active catalog snapshot.
///
/// Readers clone the snapshot `Arc` and never see a half-built catalog.
/// Reloads are serialized; a failed reload leaves the current snapshot in
/// place.
pub struct CatalogService {
    source: Box<dyn RecordSource>,
    builder: CatalogBuilder,
    snapshot: RwLock<Arc<Catalog>>,
    reload_lock: Mutex<()>,
}

impl CatalogService {
    /// Create a service with an empty (not ready) snapshot.
    pub fn new(source: Box<dyn RecordSource>, builder: CatalogBuilder) -> Self {
        Self {
            source,
            builder,
            snapshot: RwLock::new(Arc::new(Catalog::new())),
            reload_lock: Mutex::new(()),
        }
    }

    /// Create a service reading the configured JSON file.
    ///
    /// Does not load anything yet; call [`reload`](Self::reload).
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let resolver = config.taxonomy.resolver()?;
        Ok(Self::new(
            Box::new(JsonFileSource::new(config.source.path.clone())),
            CatalogBuilder::new(resolver),
        ))
    }

    /// Rebuild the catalog from the source and swap it in.
    ///
    /// Returns the number of records in the new snapshot. An empty but
    /// well-formed source still replaces the snapshot and leaves the service
    /// not ready. On error, the current snapshot is kept.
    pub fn reload(&self) -> Result<usize> {
        let _guard = self.reload_lock.lock();

        let catalog = match self
            .source
            .load()
            .and_then(|value| self.builder.build_value(&value))
        {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "catalog reload failed, keeping previous snapshot"
                );
                return Err(e);
            }
        };

        let count = catalog.len();
        let stats = catalog.stats();
        let id = catalog.id();

        *self.snapshot.write() = Arc::new(catalog);

        if count == 0 {
            tracing::warn!(
                source = %self.source.describe(),
                seen = stats.seen,
                "catalog source contains no usable records"
            );
        } else {
            tracing::info!(
                snapshot = %id,
                records = count,
                dropped = stats.dropped,
                overwritten = stats.overwritten,
                "catalog loaded"
            );
        }

        Ok(count)
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.snapshot.read())
    }

    /// Ready means the current snapshot has at least one record.
    pub fn is_ready(&self) -> bool {
        !self.snapshot.read().is_empty()
    }

    /// Exact lookup by name, after trimming and lowercasing.
    pub fn lookup(&self, name: &str) -> Option<Arc<CanonicalRecord>> {
        self.snapshot().lookup(name).cloned()
    }

    /// Answer a user query, reloading once first if the service is not ready.
    ///
    /// Readiness and the lookup are decided against the same snapshot.
    pub fn query(&self, name: &str) -> LookupOutcome {
        let mut snapshot = self.snapshot();
        if snapshot.is_empty() {
            // Errors are already logged by reload.
            let _ = self.reload();
            snapshot = self.snapshot();
            if snapshot.is_empty() {
                return LookupOutcome::Unavailable;
            }
        }

        match snapshot.lookup(name).cloned() {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::NotFound,
        }
    }

    /// Description of the underlying source, for messages.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("source", &self.source.describe())
            .field("records", &self.snapshot.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticSource;
    use crate::error::CatalogError;
    use crate::recommendation::{RecommendationEngine, TagKind};
    use creature_rules::{CanonicalTypeCode, ElementType};
    use serde_json::{json, Value};

    fn sample_document() -> Value {
        json!([
            {"nome": "Pikachu", "tipo1": "Elétrico", "tableub": "5", "fast": "yes"},
            {"nome": "Bronzor", "tipo1": "Metal", "tipo2": "Psiquico", "tableub": "10",
             "fast": "no", "heavy": "no"},
            {"nome": "Gengar", "tipo1": "Fantasma", "tipo2": "Venenoso", "tableub": "30"}
        ])
    }

    fn service_with(value: Value) -> (CatalogService, Arc<StaticSource>) {
        let source = Arc::new(StaticSource::new(value));
        let service = CatalogService::new(
            Box::new(Arc::clone(&source)),
            CatalogBuilder::with_defaults(),
        );
        (service, source)
    }

    #[test]
    fn test_not_ready_before_reload() {
        let (service, _) = service_with(sample_document());
        assert!(!service.is_ready());
        assert!(service.lookup("pikachu").is_none());
    }

    #[test]
    fn test_reload_and_lookup() {
        let (service, _) = service_with(sample_document());

        assert_eq!(service.reload().unwrap(), 3);
        assert!(service.is_ready());

        let padded = service.lookup("  Pikachu ").unwrap();
        let plain = service.lookup("pikachu").unwrap();
        assert_eq!(padded, plain);
        assert_eq!(plain.display_name, "Pikachu");
    }

    #[test]
    fn test_lookup_is_exact() {
        let (service, _) = service_with(sample_document());
        service.reload().unwrap();

        assert!(service.lookup("pika").is_none());
        assert!(service.lookup("pikachuu").is_none());
    }

    #[test]
    fn test_failed_reload_keeps_snapshot() {
        let (service, source) = service_with(sample_document());
        service.reload().unwrap();
        let before = service.snapshot().id();

        source.replace(json!({"not": "a list"}));
        let result = service.reload();

        assert!(matches!(result, Err(CatalogError::MalformedSource(_))));
        assert!(service.is_ready());
        assert_eq!(service.snapshot().id(), before);
        assert!(service.lookup("bronzor").is_some());
    }

    #[test]
    fn test_failed_first_reload_stays_not_ready() {
        let (service, _) = service_with(json!("garbage"));

        assert!(service.reload().is_err());
        assert!(!service.is_ready());
        assert_eq!(service.query("pikachu"), LookupOutcome::Unavailable);
    }

    #[test]
    fn test_reload_is_full_replace() {
        let (service, source) = service_with(sample_document());
        service.reload().unwrap();

        source.replace(json!([{"nome": "Onix", "tipo1": "Pedra", "tableub": "12"}]));
        assert_eq!(service.reload().unwrap(), 1);

        assert!(service.lookup("onix").is_some());
        assert!(service.lookup("pikachu").is_none());
    }

    #[test]
    fn test_empty_source_is_not_ready() {
        let (service, source) = service_with(sample_document());
        service.reload().unwrap();

        source.replace(json!([{"tipo1": "Fogo"}]));
        assert_eq!(service.reload().unwrap(), 0);
        assert!(!service.is_ready());
        assert_eq!(service.query("pikachu"), LookupOutcome::Unavailable);
    }

    #[test]
    fn test_old_snapshot_survives_reload() {
        let (service, source) = service_with(sample_document());
        service.reload().unwrap();
        let held = service.snapshot();

        source.replace(json!([{"nome": "Onix", "tableub": "12"}]));
        service.reload().unwrap();

        assert_eq!(held.len(), 3);
        assert!(held.lookup("pikachu").is_some());
        assert_eq!(service.snapshot().len(), 1);
    }

    #[test]
    fn test_query_reloads_on_demand() {
        let (service, _) = service_with(sample_document());
        assert!(!service.is_ready());

        assert!(matches!(service.query("Gengar"), LookupOutcome::Found(_)));
        assert!(service.is_ready());
    }

    #[test]
    fn test_query_not_found_is_distinct_from_unavailable() {
        let (service, _) = service_with(sample_document());
        service.reload().unwrap();

        assert_eq!(service.query("missingno"), LookupOutcome::NotFound);
    }

    #[test]
    fn test_concurrent_lookups_during_reload() {
        let (service, source) = service_with(sample_document());
        service.reload().unwrap();
        let service = Arc::new(service);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let snapshot = service.snapshot();
                        assert!(snapshot.len() == 3 || snapshot.len() == 4);
                    }
                })
            })
            .collect();

        let mut bigger = sample_document();
        if let Value::Array(items) = &mut bigger {
            items.push(json!({"nome": "Onix", "tableub": "12"}));
        }
        source.replace(bigger);
        for _ in 0..20 {
            service.reload().unwrap();
        }

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(service.snapshot().len(), 4);
    }

    #[test]
    fn test_query_never_reports_not_found_for_loaded_name() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let (service, source) = service_with(json!([{"nome": "Pikachu", "tableub": "5"}]));
        service.reload().unwrap();
        let service = Arc::new(service);
        let done = Arc::new(AtomicBool::new(false));

        let writer = {
            let service = Arc::clone(&service);
            let done = Arc::clone(&done);
            std::thread::spawn(move || {
                let mut full = false;
                while !done.load(Ordering::Relaxed) {
                    if full {
                        source.replace(json!([{"nome": "Pikachu", "tableub": "5"}]));
                    } else {
                        source.replace(json!([]));
                    }
                    full = !full;
                    let _ = service.reload();
                }
            })
        };

        let not_found = (0..20_000)
            .filter(|_| service.query("pikachu") == LookupOutcome::NotFound)
            .count();

        done.store(true, Ordering::Relaxed);
        writer.join().unwrap();
        assert_eq!(not_found, 0);
    }

    #[test]
    fn test_bronzor_end_to_end() {
        let (service, _) = service_with(sample_document());
        service.reload().unwrap();

        let record = match service.query("Bronzor") {
            LookupOutcome::Found(record) => record,
            other => panic!("expected Bronzor, got {:?}", other),
        };
        assert_eq!(record.primary_type, CanonicalTypeCode::Known(ElementType::Steel));
        assert_eq!(record.secondary_type, CanonicalTypeCode::Known(ElementType::Psychic));
        assert_eq!(record.type_label, "Metal / Psiquico");

        let kinds: Vec<_> = RecommendationEngine::with_defaults()
            .evaluate(&record)
            .iter()
            .map(|tag| tag.kind)
            .collect();
        assert_eq!(kinds, vec![TagKind::TinkerBall, TagKind::YumeBall]);
    }

    #[test]
    fn test_sample_data_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../data/pokemons.sample.json");
        let service = CatalogService::new(
            Box::new(JsonFileSource::new(path)),
            CatalogBuilder::with_defaults(),
        );

        assert_eq!(service.reload().unwrap(), 5);

        let vaporeon = service.lookup("VAPOREON").unwrap();
        assert_eq!(vaporeon.primary_type, CanonicalTypeCode::Known(ElementType::Water));
        assert_eq!(vaporeon.type_label, "Água");

        let snorlax = service.lookup("snorlax").unwrap();
        assert_eq!(snorlax.capture_level_label, "60");
        assert!(snorlax.is_heavy);
    }

    #[test]
    fn test_from_config_missing_file_is_io_error() {
        let mut config = CatalogConfig::default();
        config.source.path = "/nonexistent/pokemons.json".into();

        let service = CatalogService::from_config(&config).unwrap();
        assert!(matches!(service.reload(), Err(CatalogError::Io { .. })));
        assert!(!service.is_ready());
    }
}
