//! Integration tests for the schema registry.

use limeforge_graph::{game_registry, ClassSchema, FieldType, SchemaRegistry};

#[test]
fn game_registry_declares_fields_in_order() {
    let registry = game_registry();
    let method = registry.class("WorldMethod").unwrap();
    let names: Vec<_> = method.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["name", "signature", "body_type", "body"]);
}

#[test]
fn game_registry_reference_targets() {
    let registry = game_registry();

    let project = registry.class("Project").unwrap();
    assert_eq!(
        project.field("starting_world").unwrap().ty,
        FieldType::Reference("World".to_string())
    );

    let subscription = registry.class("Subscription").unwrap();
    assert_eq!(
        subscription.field("event").unwrap().ty,
        FieldType::Reference("Event".to_string())
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = SchemaRegistry::new();
    registry.register(ClassSchema::new("World")).unwrap();
    assert!(registry.register(ClassSchema::new("World")).is_err());
}

#[test]
fn unknown_class_lookup_fails() {
    let registry = game_registry();
    assert!(registry.class("Widget").is_err());
    assert!(!registry.contains("Widget"));
}
