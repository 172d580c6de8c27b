//! Entity graph to IR tree conversion.

use std::collections::HashMap;

use limeforge_foundation::{EntityKey, Error, Result};
use limeforge_graph::{EntityGraph, FieldType};

use crate::ast::{Node, NodeArena, NodeId, NodeKind, Slot};
use crate::naming;

/// Converts a rooted entity graph into an IR tree.
///
/// For each entity the builder copies scalar fields verbatim, recursively
/// resolves reference fields into nested nodes (an unset reference becomes
/// the explicit [`Slot::Missing`] marker), and appends one ordered sequence
/// per child class under the derived collection field name. Parent
/// back-references are never embedded; they exist only as the graph's
/// child-indexing mechanism, which keeps the IR acyclic.
///
/// The memo cache is keyed by `(class name, entity identity)`. It is what
/// makes repeated references to one entity resolve to the identical node
/// handle within a compile, and it must be cleared between compiles — the
/// orchestrator does so unconditionally, including on the failure path.
pub struct TreeBuilder<'g> {
    graph: &'g EntityGraph,
    cache: HashMap<(String, EntityKey), NodeId>,
}

impl<'g> TreeBuilder<'g> {
    /// Creates a builder over the given graph.
    #[must_use]
    pub fn new(graph: &'g EntityGraph) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
        }
    }

    /// Builds the IR tree rooted at the given entity.
    ///
    /// # Errors
    /// Fails when an entity's class is unregistered or maps to no node kind,
    /// or when a referenced entity is absent from the graph.
    pub fn build(&mut self, arena: &mut NodeArena, root: EntityKey) -> Result<NodeId> {
        self.build_entity(arena, root)
    }

    fn build_entity(&mut self, arena: &mut NodeArena, key: EntityKey) -> Result<NodeId> {
        let graph = self.graph;
        let class = graph.class_of(key)?.to_string();

        if let Some(&id) = self.cache.get(&(class.clone(), key)) {
            return Ok(id);
        }

        let kind = NodeKind::parse(&class).ok_or_else(|| Error::unknown_kind(&class))?;
        let schema = graph.schema(&class)?;
        let entity = graph.entity(key)?;

        let mut node = Node::new(kind);
        for field in &schema.fields {
            let slot = match &field.ty {
                FieldType::Reference(_) => match entity.reference(&field.name) {
                    Some(target) => Slot::Node(self.build_entity(arena, target)?),
                    None => Slot::Missing,
                },
                _ => Slot::Value(entity.value(&field.name)),
            };
            node.push_field(&field.name, slot);
        }

        for child_class in graph.children_classes(&class) {
            let mut children = Vec::new();
            for &child in graph.immediate_children(key, &child_class.name) {
                children.push(self.build_entity(arena, child)?);
            }
            node.push_field(
                naming::collection_field_name(&child_class.name),
                Slot::Seq(children),
            );
        }

        let id = arena.alloc(node);
        self.cache.insert((class, key), id);
        Ok(id)
    }

    /// Number of entity-to-node bindings currently cached.
    #[must_use]
    pub fn cached_nodes(&self) -> usize {
        self.cache.len()
    }

    /// Drops every entity-to-node binding.
    ///
    /// Stale bindings could otherwise surface nodes from an unrelated
    /// earlier compile when entity identities are reused upstream.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
