//! LimeJS source emission.

use limeforge_foundation::{Error, Result, Value};

use crate::ast::{NodeArena, NodeId, NodeKind, Slot};
use crate::naming::event_constant;
use crate::templates::{self, ProjectContext};
use crate::visitor::Dispatcher;

/// Event name that triggers the periodic scheduling bootstrap.
pub const STEP_EVENT: &str = "onStep";

/// Dispatch interval of the step event, in milliseconds (~30 fps).
pub const STEP_INTERVAL_MS: i64 = 33;

/// Base class for game objects that declare no parent class.
pub const DEFAULT_VISUAL_BASE: &str = "lime.Sprite";

/// Base class for worlds.
pub const WORLD_BASE: &str = "lime.Scene";

/// Everything the class-level renderer needs back from one method.
struct RenderedMethod {
    name: String,
    function: String,
    events: Vec<String>,
}

/// Walks a renamed IR and emits the project document.
///
/// Rendering never mutates the tree; two renders of the same renamed IR
/// produce identical text because every traversal follows schema-declared
/// field order and stored collection order.
pub struct RenderPass;

impl RenderPass {
    /// Renders the project node into final source text.
    ///
    /// # Errors
    /// Fails when a required reference (starting world, constructor, a
    /// subscription's event) is unset, a method's body kind is unsupported,
    /// or a signature is malformed.
    pub fn render(arena: &mut NodeArena, project: NodeId) -> Result<String> {
        let dispatcher = Self::dispatcher();
        let mut pass = Self;
        dispatcher.dispatch(&mut pass, arena, project)
    }

    /// Builds the kind → handler table, once per pass construction.
    fn dispatcher() -> Dispatcher<Self, String> {
        Dispatcher::new("RenderPass")
            .with_handler(NodeKind::Project, Self::render_project)
            .with_handler(NodeKind::World, Self::render_world)
            .with_handler(NodeKind::GameObject, Self::render_game_object)
            .with_handler(NodeKind::WorldMethod, Self::render_method)
            .with_handler(NodeKind::GameObjectMethod, Self::render_method)
    }

    fn render_project(
        pass: &mut Self,
        dispatcher: &Dispatcher<Self, String>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<String> {
        let mut worlds = Vec::new();
        for world in arena.node(id).seq_field("worlds")?.to_vec() {
            worlds.push(dispatcher.dispatch(pass, arena, world)?);
        }

        let mut game_objects = Vec::new();
        for game_object in arena.node(id).seq_field("game_objects")?.to_vec() {
            game_objects.push(dispatcher.dispatch(pass, arena, game_object)?);
        }

        let mut constants = Vec::new();
        let mut has_step = false;
        for event in arena.node(id).seq_field("events")?.to_vec() {
            let name = arena.node(event).str_field("name")?.to_string();
            constants.push(templates::event_constant_statement(
                &event_constant(&name),
                &name,
            ));
            has_step |= name == STEP_EVENT;
        }
        let events_block = if constants.is_empty() {
            None
        } else {
            let mut block = vec![templates::event_bus_statement()];
            block.extend(constants);
            Some(block.join("\n"))
        };
        let schedule = has_step
            .then(|| templates::schedule_statement(&event_constant(STEP_EVENT), STEP_INTERVAL_MS));

        let starting = arena
            .node(id)
            .node_field("starting_world")?
            .ok_or_else(|| Error::missing_reference("Project", "starting_world"))?;
        let starting_world = arena.node(starting).str_field("name")?;

        Ok(templates::project_document(&ProjectContext {
            events_block,
            worlds,
            game_objects,
            starting_world,
            schedule,
        }))
    }

    fn render_world(
        _pass: &mut Self,
        _dispatcher: &Dispatcher<Self, String>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<String> {
        Self::render_js_class(arena, id, "world_methods", "constructor", WORLD_BASE)
    }

    fn render_game_object(
        _pass: &mut Self,
        _dispatcher: &Dispatcher<Self, String>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<String> {
        let parent = arena
            .node(id)
            .opt_str_field("parent_class")
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_VISUAL_BASE)
            .to_string();
        Self::render_js_class(arena, id, "game_object_methods", "init", &parent)
    }

    fn render_method(
        _pass: &mut Self,
        _dispatcher: &Dispatcher<Self, String>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<String> {
        Ok(Self::render_method_parts(arena, id)?.function)
    }

    /// Renders one class: non-constructor methods first (collecting their
    /// subscription pairs), then the constructor with every listener
    /// registration appended to its body, emitted ahead of the methods.
    fn render_js_class(
        arena: &NodeArena,
        id: NodeId,
        methods_field: &str,
        ctor_field: &str,
        parent: &str,
    ) -> Result<String> {
        let node = arena.node(id);
        let kind = node.kind();
        let class_name = node.str_field("name")?.to_string();
        let ctor = node
            .node_field(ctor_field)?
            .ok_or_else(|| Error::missing_reference(kind.as_str(), ctor_field))?;

        let mut registrations = Vec::new();
        let mut method_stmts = Vec::new();
        for &method in node.seq_field(methods_field)? {
            if method == ctor {
                continue;
            }
            let rendered = Self::render_method_parts(arena, method)?;
            for event in &rendered.events {
                registrations.push(templates::listener_statement(
                    &event_constant(event),
                    &rendered.name,
                ));
            }
            method_stmts.push(templates::method_statement(
                &class_name,
                &rendered.name,
                &rendered.function,
            ));
        }

        let ctor_function = Self::render_constructor(arena, ctor, parent, &registrations)?;
        let mut sections = vec![templates::constructor_statement(
            &class_name,
            parent,
            &ctor_function,
        )];
        sections.extend(method_stmts);
        Ok(sections.join("\n\n"))
    }

    /// Renders one non-constructor method and reports the events it
    /// subscribes to, so the class renderer can synthesize the wiring.
    fn render_method_parts(arena: &NodeArena, id: NodeId) -> Result<RenderedMethod> {
        let node = arena.node(id);
        let name = node.str_field("name")?.to_string();
        let args = Self::decode_signature(arena, id)?;
        let body = Self::method_body(arena, id)?;
        let function = templates::function_expr(&args, &body);

        let mut events = Vec::new();
        for &subscription in node.seq_field("subscriptions")? {
            let event = arena
                .node(subscription)
                .node_field("event")?
                .ok_or_else(|| Error::missing_reference("Subscription", "event"))?;
            events.push(arena.node(event).str_field("name")?.to_string());
        }

        Ok(RenderedMethod {
            name,
            function,
            events,
        })
    }

    /// Renders the constructor: superclass call, raw body, then the
    /// listener registrations collected from the sibling methods.
    fn render_constructor(
        arena: &NodeArena,
        id: NodeId,
        parent: &str,
        registrations: &[String],
    ) -> Result<String> {
        let args = Self::decode_signature(arena, id)?;
        let body = Self::method_body(arena, id)?;

        let mut statements = vec![templates::super_call(parent)];
        if !body.is_empty() {
            statements.push(body);
        }
        statements.extend(registrations.iter().cloned());
        Ok(templates::function_expr(&args, &statements.join("\n")))
    }

    /// Decodes the ordered parameter list into an argument string.
    fn decode_signature(arena: &NodeArena, id: NodeId) -> Result<String> {
        let node = arena.node(id);
        match node.field("signature") {
            Some(Slot::Value(Value::Nil)) => Ok(String::new()),
            Some(Slot::Value(Value::List(items))) => {
                let mut params = Vec::with_capacity(items.len());
                for item in items {
                    params.push(
                        item.as_str()
                            .ok_or_else(|| {
                                Error::invalid_signature("parameter names must be strings")
                            })?
                            .to_string(),
                    );
                }
                Ok(params.join(", "))
            }
            Some(_) => Err(Error::invalid_signature(
                "signature must be an ordered list of parameter names",
            )),
            None => Err(Error::missing_field(node.kind().as_str(), "signature")),
        }
    }

    /// Returns the raw body text; only the `raw` body kind is supported.
    fn method_body(arena: &NodeArena, id: NodeId) -> Result<String> {
        let node = arena.node(id);
        let body_type = node.str_field("body_type")?;
        if body_type != "raw" {
            return Err(Error::unsupported_body_kind(body_type));
        }
        Ok(node
            .opt_str_field("body")
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}
