//! Canonical identifier assignment.

use limeforge_foundation::{Error, Result, Value};

use crate::ast::{NodeArena, NodeId, NodeKind};
use crate::naming::canonical;
use crate::visitor::Dispatcher;

/// Canonical prefix for world class names.
pub const WORLD_PREFIX: &str = "World_";
/// Canonical prefix for game object class names.
pub const GAME_OBJECT_PREFIX: &str = "GameObject_";
/// Canonical prefix for method names.
pub const METHOD_PREFIX: &str = "method_";

/// Rewrites display names into canonical, collision-free identifiers.
///
/// Traversal is Project → each World (and its methods) → each GameObject
/// (and its methods); methods are leaves. A world's or game object's
/// designated constructor additionally has its identifier forced to the
/// owner's canonical name, so the constructor function and its class share
/// one name. Because shared entities resolve to one node, renaming a world
/// through the project's collection also renames it behind the project's
/// `starting_world` reference.
pub struct RenamePass;

impl RenamePass {
    /// Applies the rename rules in place and returns the project node for
    /// pipeline chaining.
    ///
    /// # Errors
    /// Fails when a constructor/init reference is unset, or when traversal
    /// reaches a node kind with no rename rule.
    pub fn rename(arena: &mut NodeArena, project: NodeId) -> Result<NodeId> {
        let dispatcher = Self::dispatcher();
        let mut pass = Self;
        dispatcher.dispatch(&mut pass, arena, project)
    }

    /// Builds the kind → handler table, once per pass construction.
    fn dispatcher() -> Dispatcher<Self, NodeId> {
        Dispatcher::new("RenamePass")
            .with_handler(NodeKind::Project, Self::rename_project)
            .with_handler(NodeKind::World, Self::rename_world)
            .with_handler(NodeKind::GameObject, Self::rename_game_object)
            .with_handler(NodeKind::WorldMethod, Self::rename_method)
            .with_handler(NodeKind::GameObjectMethod, Self::rename_method)
    }

    fn rename_project(
        pass: &mut Self,
        dispatcher: &Dispatcher<Self, NodeId>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<NodeId> {
        for world in arena.node(id).seq_field("worlds")?.to_vec() {
            dispatcher.dispatch(pass, arena, world)?;
        }
        for game_object in arena.node(id).seq_field("game_objects")?.to_vec() {
            dispatcher.dispatch(pass, arena, game_object)?;
        }
        Ok(id)
    }

    fn rename_world(
        pass: &mut Self,
        dispatcher: &Dispatcher<Self, NodeId>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<NodeId> {
        Self::rename_owner(pass, dispatcher, arena, id, WORLD_PREFIX, "world_methods", "constructor")
    }

    fn rename_game_object(
        pass: &mut Self,
        dispatcher: &Dispatcher<Self, NodeId>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<NodeId> {
        Self::rename_owner(
            pass,
            dispatcher,
            arena,
            id,
            GAME_OBJECT_PREFIX,
            "game_object_methods",
            "init",
        )
    }

    /// Shared world/game-object rule: canonicalize the owner's name, rename
    /// its methods, then force the constructor's identifier to the owner's.
    fn rename_owner(
        pass: &mut Self,
        dispatcher: &Dispatcher<Self, NodeId>,
        arena: &mut NodeArena,
        id: NodeId,
        prefix: &str,
        methods_field: &str,
        ctor_field: &str,
    ) -> Result<NodeId> {
        let class_name = canonical(prefix, arena.node(id).str_field("name")?);
        arena
            .node_mut(id)
            .set_value("name", Value::string(&class_name));

        for method in arena.node(id).seq_field(methods_field)?.to_vec() {
            dispatcher.dispatch(pass, arena, method)?;
        }

        let kind = arena.node(id).kind();
        let ctor = arena
            .node(id)
            .node_field(ctor_field)?
            .ok_or_else(|| Error::missing_reference(kind.as_str(), ctor_field))?;
        arena
            .node_mut(ctor)
            .set_value("name", Value::string(&class_name));
        Ok(id)
    }

    /// Methods are leaves: canonicalize the name, recurse no further.
    fn rename_method(
        _pass: &mut Self,
        _dispatcher: &Dispatcher<Self, NodeId>,
        arena: &mut NodeArena,
        id: NodeId,
    ) -> Result<NodeId> {
        let name = canonical(METHOD_PREFIX, arena.node(id).str_field("name")?);
        arena.node_mut(id).set_value("name", Value::string(name));
        Ok(id)
    }
}
