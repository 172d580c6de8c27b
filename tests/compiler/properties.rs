//! Property tests over the compile pipeline.

use proptest::prelude::*;

use limeforge_compiler::Compiler;
use limeforge_foundation::{EntityKey, Value};
use limeforge_graph::{game_registry, Entity, EntityGraph};

fn project_with_named_world(world_name: &str, method_name: &str) -> (EntityGraph, EntityKey) {
    let mut graph = EntityGraph::new(game_registry());
    let project = graph.insert(Entity::new("Project")).unwrap();
    let world = graph
        .insert(
            Entity::new("World")
                .with_value("name", world_name)
                .with_reference("project", Some(project)),
        )
        .unwrap();
    let ctor = graph
        .insert(
            Entity::new("WorldMethod")
                .with_value("name", "construct")
                .with_value("signature", Value::string_list::<[&str; 0], _>([]))
                .with_value("body_type", "raw")
                .with_value("body", "")
                .with_reference("world", Some(world)),
        )
        .unwrap();
    graph
        .insert(
            Entity::new("WorldMethod")
                .with_value("name", method_name)
                .with_value("signature", Value::string_list::<[&str; 0], _>([]))
                .with_value("body_type", "raw")
                .with_value("body", "this.noop();")
                .with_reference("world", Some(world)),
        )
        .unwrap();
    graph
        .set_reference(project, "starting_world", Some(world))
        .unwrap();
    graph.set_reference(world, "constructor", Some(ctor)).unwrap();
    (graph, project)
}

proptest! {
    /// Two compiles of the same entity graph are byte-identical.
    #[test]
    fn compile_is_deterministic(
        world_name in "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
        method_name in "[a-z][a-z0-9 ]{0,15}",
    ) {
        let (graph, project) = project_with_named_world(&world_name, &method_name);
        let mut compiler = Compiler::new(&graph);
        let first = compiler.compile(project).unwrap();
        let second = compiler.compile(project).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Generated scene bindings never contain spaces, whatever the display
    /// name contained.
    #[test]
    fn scene_binding_is_sanitized(world_name in "[a-zA-Z][a-zA-Z0-9 ]{0,20}") {
        let (graph, project) = project_with_named_world(&world_name, "step");
        let mut compiler = Compiler::new(&graph);
        let text = compiler.compile(project).unwrap();

        let binding_line = text
            .lines()
            .find(|line| line.contains("var scene = new "))
            .expect("scene binding missing");
        let class = binding_line
            .trim()
            .strip_prefix("var scene = new ")
            .and_then(|s| s.strip_suffix("();"))
            .expect("malformed binding");
        prop_assert!(!class.contains(' '));
        prop_assert!(class.starts_with("World_"));
    }

    /// The compiler's memo cache is empty after every compile, success or
    /// failure.
    #[test]
    fn cache_never_leaks(world_name in "[a-zA-Z][a-zA-Z0-9 ]{0,12}") {
        let (graph, project) = project_with_named_world(&world_name, "step");
        let mut compiler = Compiler::new(&graph);
        compiler.compile(project).unwrap();
        prop_assert_eq!(compiler.cached_nodes(), 0);
    }
}
