//! # Creature Rules
//!
//! The vocabulary crate for the capture catalog - element types, type label
//! taxonomy, and the raw and canonical record shapes.
//! This crate performs no I/O and holds no state.

pub mod entities;
pub mod mechanics;
pub mod taxonomy;

pub use entities::*;
pub use mechanics::*;
pub use taxonomy::*;
