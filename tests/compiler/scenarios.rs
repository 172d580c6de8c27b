//! End-to-end compile scenarios.

use limeforge_compiler::{Compiler, NodeArena, RenamePass, RenderPass, TreeBuilder};
use limeforge_foundation::ErrorKind;
use limeforge_graph::{game_registry, Entity, EntityGraph};

use crate::common::{method_entity, single_world_project, subscribed_object_project};

#[test]
fn single_world_document_golden() {
    let (graph, project) = single_world_project();
    let mut compiler = Compiler::new(&graph);
    let text = compiler.compile(project).unwrap();

    let expected = "\
goog.provide('project');

goog.require('goog.events');
goog.require('goog.events.EventTarget');
goog.require('lime.Director');
goog.require('lime.Scene');
goog.require('lime.Sprite');
goog.require('lime.scheduleManager');

var World_World_1 = function () {
    lime.Scene.call(this);
};
goog.inherits(World_World_1, lime.Scene);

project.start = function () {
    var director = new lime.Director(document.body, 1024, 768);
    var scene = new World_World_1();
    director.replaceScene(scene);
};

goog.exportSymbol('project.start', project.start);
";
    assert_eq!(text, expected);
}

#[test]
fn scenario_a_binds_renamed_world_with_no_listeners() {
    let (graph, project) = single_world_project();
    let mut compiler = Compiler::new(&graph);
    let text = compiler.compile(project).unwrap();

    assert!(text.contains("var scene = new World_World_1();"));
    assert!(!text.contains("goog.events.listen"));
}

#[test]
fn scenario_b_wires_subscription_and_scheduler() {
    let (graph, project) = subscribed_object_project();
    let mut compiler = Compiler::new(&graph);
    let text = compiler.compile(project).unwrap();

    // The init body carries the registration pairing the event constant
    // with the subscribed method's canonical identifier.
    let registration =
        "goog.events.listen(project.events, project.EVENT_ONSTEP, goog.bind(this.method_step, this));";
    let registration_at = text.find(registration).expect("registration missing");
    let method_at = text
        .find("GameObject_Orb.prototype.method_step")
        .expect("method missing");
    assert!(registration_at < method_at);

    // Project-level synthesis: bus, constant, periodic bootstrap.
    assert!(text.contains("project.events = new goog.events.EventTarget();"));
    assert!(text.contains("project.EVENT_ONSTEP = 'onStep';"));
    assert!(text.contains("lime.scheduleManager.scheduleWithDelay(function () {"));
    assert!(text.contains("project.events.dispatchEvent(project.EVENT_ONSTEP);"));
    assert!(text.contains("}, project.events, 33);"));
}

#[test]
fn scenario_c_recompile_is_byte_identical() {
    let (graph, project) = subscribed_object_project();
    let mut compiler = Compiler::new(&graph);

    let first = compiler.compile(project).unwrap();
    let second = compiler.compile(project).unwrap();
    assert_eq!(first, second);
}

#[test]
fn render_twice_on_one_renamed_tree_is_identical() {
    let (graph, project) = subscribed_object_project();
    let mut arena = NodeArena::new();
    let mut builder = TreeBuilder::new(&graph);
    let root = builder.build(&mut arena, project).unwrap();
    let root = RenamePass::rename(&mut arena, root).unwrap();

    let first = RenderPass::render(&mut arena, root).unwrap();
    let second = RenderPass::render(&mut arena, root).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scenario_d_missing_starting_world_fails() {
    let mut graph = EntityGraph::new(game_registry());
    let project = graph.insert(Entity::new("Project")).unwrap();
    let world = graph
        .insert(
            Entity::new("World")
                .with_value("name", "W")
                .with_reference("project", Some(project)),
        )
        .unwrap();
    let ctor = graph
        .insert(method_entity("WorldMethod", "construct", &[], "").with_reference("world", Some(world)))
        .unwrap();
    graph.set_reference(world, "constructor", Some(ctor)).unwrap();
    // starting_world deliberately left unset.

    let mut compiler = Compiler::new(&graph);
    let err = compiler.compile(project).unwrap_err();
    match err.kind {
        ErrorKind::MissingReference { class, field } => {
            assert_eq!(class, "Project");
            assert_eq!(field, "starting_world");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn every_subscription_registers_exactly_once() {
    let (mut graph, project) = single_world_project();
    let shown = graph
        .insert(
            Entity::new("Event")
                .with_value("name", "onShown")
                .with_reference("project", Some(project)),
        )
        .unwrap();
    let hidden = graph
        .insert(
            Entity::new("Event")
                .with_value("name", "onHidden")
                .with_reference("project", Some(project)),
        )
        .unwrap();

    let world = graph.immediate_children(project, "World")[0];
    let toggle = graph
        .insert(
            method_entity("WorldMethod", "toggle", &[], "this.flip();")
                .with_reference("world", Some(world)),
        )
        .unwrap();
    for event in [shown, hidden] {
        graph
            .insert(
                Entity::new("Subscription")
                    .with_reference("event", Some(event))
                    .with_reference("method", Some(toggle)),
            )
            .unwrap();
    }

    let mut compiler = Compiler::new(&graph);
    let text = compiler.compile(project).unwrap();

    for constant in ["project.EVENT_ONSHOWN", "project.EVENT_ONHIDDEN"] {
        let statement = format!(
            "goog.events.listen(project.events, {constant}, goog.bind(this.method_toggle, this));"
        );
        assert_eq!(text.matches(statement.as_str()).count(), 1, "{constant}");
    }

    // No step event declared, so no scheduler bootstrap.
    assert!(!text.contains("lime.scheduleManager.scheduleWithDelay"));
}

#[test]
fn method_bodies_and_signatures_render_in_place() {
    let (mut graph, project) = single_world_project();
    let world = graph.immediate_children(project, "World")[0];
    graph
        .insert(
            method_entity(
                "WorldMethod",
                "resize",
                &["width", "height"],
                "this.width = width;\nthis.height = height;",
            )
            .with_reference("world", Some(world)),
        )
        .unwrap();

    let mut compiler = Compiler::new(&graph);
    let text = compiler.compile(project).unwrap();

    assert!(text.contains(
        "World_World_1.prototype.method_resize = function (width, height) {\n    this.width = width;\n    this.height = height;\n};"
    ));
}
