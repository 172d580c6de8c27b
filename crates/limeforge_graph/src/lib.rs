//! Schema registry and entity graph storage for Limeforge.
//!
//! This crate provides:
//! - [`ClassSchema`] / [`SchemaRegistry`] - Class descriptors with ordered
//!   fields and parent-relationship declarations
//! - [`Entity`] - Plain data records typed by registered classes
//! - [`EntityGraph`] - Append-only storage with insertion-ordered
//!   parent→children indexing
//! - [`game_registry`] - The canonical game project schema set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod game;
pub mod graph;
pub mod schema;

pub use entity::{Entity, FieldValue};
pub use game::game_registry;
pub use graph::EntityGraph;
pub use schema::{ClassSchema, FieldSchema, FieldType, ParentSchema, SchemaRegistry};
