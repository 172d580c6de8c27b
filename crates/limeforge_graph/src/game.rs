//! The canonical game project schema set.
//!
//! One registry describes everything the compiler can see: a project owns
//! worlds, game object templates, and declared events; worlds and game
//! objects own methods; methods own event subscriptions. Parent fields are
//! back-references used solely for children indexing.

use crate::schema::{ClassSchema, FieldSchema, FieldType, ParentSchema, SchemaRegistry};

/// Builds the registry of game project classes.
///
/// Registration order is load-bearing: child collections materialize in the
/// IR in this order, and generated output follows it.
///
/// # Panics
/// Never panics in practice; class names here are unique by construction.
#[must_use]
pub fn game_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    let classes = vec![
        ClassSchema::new("Project")
            .with_field(FieldSchema::scalar("name", FieldType::String))
            .with_field(FieldSchema::reference("starting_world", "World")),
        ClassSchema::new("World")
            .with_field(FieldSchema::scalar("name", FieldType::String))
            .with_field(FieldSchema::reference("constructor", "WorldMethod"))
            .with_parent(ParentSchema::new("project", ["Project"])),
        ClassSchema::new("GameObject")
            .with_field(FieldSchema::scalar("name", FieldType::String))
            .with_field(FieldSchema::scalar("parent_class", FieldType::String))
            .with_field(FieldSchema::reference("init", "GameObjectMethod"))
            .with_parent(ParentSchema::new("project", ["Project"])),
        ClassSchema::new("WorldMethod")
            .with_field(FieldSchema::scalar("name", FieldType::String))
            .with_field(FieldSchema::scalar("signature", FieldType::List))
            .with_field(FieldSchema::scalar("body_type", FieldType::String))
            .with_field(FieldSchema::scalar("body", FieldType::String))
            .with_parent(ParentSchema::new("world", ["World"])),
        ClassSchema::new("GameObjectMethod")
            .with_field(FieldSchema::scalar("name", FieldType::String))
            .with_field(FieldSchema::scalar("signature", FieldType::List))
            .with_field(FieldSchema::scalar("body_type", FieldType::String))
            .with_field(FieldSchema::scalar("body", FieldType::String))
            .with_parent(ParentSchema::new("game_object", ["GameObject"])),
        ClassSchema::new("Event")
            .with_field(FieldSchema::scalar("name", FieldType::String))
            .with_parent(ParentSchema::new("project", ["Project"])),
        ClassSchema::new("Subscription")
            .with_field(FieldSchema::reference("event", "Event"))
            .with_parent(ParentSchema::new("method", ["WorldMethod", "GameObjectMethod"])),
    ];

    for class in classes {
        registry
            .register(class)
            .expect("game class names are unique");
    }

    registry
}
