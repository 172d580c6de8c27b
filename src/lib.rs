//! Limeforge - structured game projects compiled to LimeJS client source
//!
//! This crate re-exports all layers of the Limeforge system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: limeforge_compiler   — IR builder, rename/render passes, orchestrator
//! Layer 1: limeforge_graph      — Schema registry, entity records, children index
//! Layer 0: limeforge_foundation — Core types (Value, EntityKey, Error)
//! ```

pub use limeforge_compiler as compiler;
pub use limeforge_foundation as foundation;
pub use limeforge_graph as graph;
