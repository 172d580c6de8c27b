//! Kind-keyed double dispatch for IR passes.
//!
//! The IR is one generic node type, so per-kind behavior cannot hang off a
//! native vtable. Each pass instead builds a [`Dispatcher`] once at
//! construction: a table from [`NodeKind`] to handler function, plus a
//! default handler for kinds with no entry. The built-in default surfaces
//! the unrecognized kind as an error — an unhandled kind is a configuration
//! defect, never a silent pass-through.

use std::collections::HashMap;

use limeforge_foundation::{Error, Result};

use crate::ast::{NodeArena, NodeId, NodeKind};

/// Handler invoked for one node kind.
///
/// Handlers receive the dispatcher so they can re-dispatch child nodes.
pub type Handler<V, T> = fn(&mut V, &Dispatcher<V, T>, &mut NodeArena, NodeId) -> Result<T>;

/// Table routing nodes to handlers by declared kind.
pub struct Dispatcher<V, T> {
    visitor: &'static str,
    table: HashMap<NodeKind, Handler<V, T>>,
    default: Handler<V, T>,
}

impl<V, T> Dispatcher<V, T> {
    /// Creates a dispatcher with no handlers registered.
    ///
    /// `visitor` names the owning pass in diagnostics.
    #[must_use]
    pub fn new(visitor: &'static str) -> Self {
        Self {
            visitor,
            table: HashMap::new(),
            default: Self::unhandled,
        }
    }

    /// Registers the handler for one node kind.
    #[must_use]
    pub fn with_handler(mut self, kind: NodeKind, handler: Handler<V, T>) -> Self {
        self.table.insert(kind, handler);
        self
    }

    /// Replaces the default handler.
    #[must_use]
    pub fn with_default(mut self, handler: Handler<V, T>) -> Self {
        self.default = handler;
        self
    }

    /// Returns the visitor name used in diagnostics.
    #[must_use]
    pub fn visitor(&self) -> &'static str {
        self.visitor
    }

    /// Routes a node to the handler registered for its kind, falling back
    /// to the default handler.
    ///
    /// # Errors
    /// Propagates handler errors; the built-in default reports the
    /// unrecognized kind.
    pub fn dispatch(&self, visitor: &mut V, arena: &mut NodeArena, id: NodeId) -> Result<T> {
        let kind = arena.node(id).kind();
        let handler = self.table.get(&kind).copied().unwrap_or(self.default);
        handler(visitor, self, arena, id)
    }

    fn unhandled(_: &mut V, dispatcher: &Self, arena: &mut NodeArena, id: NodeId) -> Result<T> {
        Err(Error::unhandled_kind(
            arena.node(id).kind().as_str(),
            dispatcher.visitor,
        ))
    }
}
