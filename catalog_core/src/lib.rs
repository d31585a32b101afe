//! # Catalog Core
//!
//! Loads the creature catalog, serves lookups against an immutable snapshot,
//! and derives capture ball recommendations for each entry.
//!
//! ## Core Components
//!
//! - **catalog**: Raw sources, the catalog builder and the snapshot service
//! - **recommendation**: Ordered type-category rules and their tags
//! - **report**: Plain-text rendering of a lookup result
//!
//! ## Data Flow
//!
//! source -> `CatalogBuilder` -> `CatalogService` snapshot -> `lookup` ->
//! `RecommendationEngine::evaluate` -> `CaptureReport`

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod recommendation;
pub mod report;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use recommendation::*;
pub use report::*;
