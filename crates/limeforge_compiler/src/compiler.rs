//! The compile pipeline orchestrator.

use limeforge_foundation::{EntityKey, Result};
use limeforge_graph::EntityGraph;

use crate::ast::NodeArena;
use crate::builder::TreeBuilder;
use crate::rename::RenamePass;
use crate::render::RenderPass;

/// Orchestrates one compile: build IR → rename → render → cache reset.
///
/// The pipeline is synchronous and single-threaded per invocation, and the
/// builder's memo cache is scoped to one compile: it is cleared
/// unconditionally after every `compile`, including on the failure path,
/// so stale entity-to-node bindings can never leak into a later compile
/// that reuses entity identities. Concurrent compiles must each use their
/// own `Compiler` instance.
pub struct Compiler<'g> {
    builder: TreeBuilder<'g>,
}

impl<'g> Compiler<'g> {
    /// Creates a compiler over the given entity graph.
    #[must_use]
    pub fn new(graph: &'g EntityGraph) -> Self {
        Self {
            builder: TreeBuilder::new(graph),
        }
    }

    /// Compiles the project rooted at the given entity into source text.
    ///
    /// # Errors
    /// Propagates build, rename, and render failures; partial output is
    /// never returned, since generated code must be syntactically complete.
    pub fn compile(&mut self, project: EntityKey) -> Result<String> {
        let mut arena = NodeArena::new();
        let result = self.compile_inner(&mut arena, project);
        self.builder.clear_cache();
        result
    }

    fn compile_inner(&mut self, arena: &mut NodeArena, project: EntityKey) -> Result<String> {
        let root = self.builder.build(arena, project)?;
        let root = RenamePass::rename(arena, root)?;
        RenderPass::render(arena, root)
    }

    /// Number of entity-to-node bindings currently cached; zero between
    /// compiles.
    #[must_use]
    pub fn cached_nodes(&self) -> usize {
        self.builder.cached_nodes()
    }
}
