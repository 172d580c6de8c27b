//! Shared fixtures for compile pipeline tests.

use limeforge_foundation::{EntityKey, Value};
use limeforge_graph::{game_registry, Entity, EntityGraph};

/// A method entity with an empty body unless one is given.
pub fn method_entity(class: &str, name: &str, params: &[&str], body: &str) -> Entity {
    Entity::new(class)
        .with_value("name", name)
        .with_value("signature", Value::string_list(params.iter().copied()))
        .with_value("body_type", "raw")
        .with_value("body", body)
}

/// One project, one world named `World 1` whose only method is its
/// constructor, no game objects, no events.
pub fn single_world_project() -> (EntityGraph, EntityKey) {
    let mut graph = EntityGraph::new(game_registry());
    let project = graph
        .insert(Entity::new("Project").with_value("name", "demo"))
        .unwrap();
    let world = graph
        .insert(
            Entity::new("World")
                .with_value("name", "World 1")
                .with_reference("project", Some(project)),
        )
        .unwrap();
    let ctor = graph
        .insert(method_entity("WorldMethod", "construct", &[], "").with_reference("world", Some(world)))
        .unwrap();
    graph
        .set_reference(project, "starting_world", Some(world))
        .unwrap();
    graph.set_reference(world, "constructor", Some(ctor)).unwrap();
    (graph, project)
}

/// The single-world project extended with an `onStep` event and a game
/// object whose `step` method subscribes to it.
pub fn subscribed_object_project() -> (EntityGraph, EntityKey) {
    let (mut graph, project) = single_world_project();
    let event = graph
        .insert(
            Entity::new("Event")
                .with_value("name", "onStep")
                .with_reference("project", Some(project)),
        )
        .unwrap();
    let object = graph
        .insert(
            Entity::new("GameObject")
                .with_value("name", "Orb")
                .with_reference("project", Some(project)),
        )
        .unwrap();
    let init = graph
        .insert(
            method_entity("GameObjectMethod", "init", &[], "this.setSize(16, 16);")
                .with_reference("game_object", Some(object)),
        )
        .unwrap();
    let step = graph
        .insert(
            method_entity("GameObjectMethod", "step", &[], "this.move();")
                .with_reference("game_object", Some(object)),
        )
        .unwrap();
    graph
        .insert(
            Entity::new("Subscription")
                .with_reference("event", Some(event))
                .with_reference("method", Some(step)),
        )
        .unwrap();
    graph.set_reference(object, "init", Some(init)).unwrap();
    (graph, project)
}
