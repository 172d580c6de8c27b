//! The compiler's intermediate representation.
//!
//! Nodes are generic named-field records allocated in a [`NodeArena`] and
//! linked by [`NodeId`] handles. Sharing is expressed by handle equality:
//! when the tree builder resolves two references to the same entity, both
//! slots hold the same `NodeId`, so a rename applied through one path is
//! visible through the other.

use std::fmt;

use limeforge_foundation::{Error, Result, Value};

/// Handle to a node in a [`NodeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Kind of an IR node, derived from the originating entity class.
///
/// A closed tagged union: visitor dispatch tables are keyed by these
/// variants, and a class name outside this set fails tree building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// Project root.
    Project,
    /// A world (scene).
    World,
    /// A game object template.
    GameObject,
    /// A method owned by a world.
    WorldMethod,
    /// A method owned by a game object.
    GameObjectMethod,
    /// A project-scoped event declaration.
    Event,
    /// A method-to-event subscription.
    Subscription,
}

impl NodeKind {
    /// Maps an entity class name to its node kind.
    #[must_use]
    pub fn parse(class: &str) -> Option<Self> {
        match class {
            "Project" => Some(Self::Project),
            "World" => Some(Self::World),
            "GameObject" => Some(Self::GameObject),
            "WorldMethod" => Some(Self::WorldMethod),
            "GameObjectMethod" => Some(Self::GameObjectMethod),
            "Event" => Some(Self::Event),
            "Subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    /// Returns the class name this kind was derived from.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::World => "World",
            Self::GameObject => "GameObject",
            Self::WorldMethod => "WorldMethod",
            Self::GameObjectMethod => "GameObjectMethod",
            Self::Event => "Event",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value held by one node field.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// Primitive value copied verbatim from the entity.
    Value(Value),
    /// Resolved reference to another node.
    Node(NodeId),
    /// Explicit marker for an unset reference. Downstream passes depend on
    /// field presence, so an absent target never omits the field.
    Missing,
    /// Ordered sequence of child nodes.
    Seq(Vec<NodeId>),
}

/// Generic named-field record; the compiler's sole data structure.
///
/// Fields keep their insertion order: schema-declared fields first, then
/// one collection per child class, which is what makes rendering
/// deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    kind: NodeKind,
    fields: Vec<(String, Slot)>,
}

impl Node {
    /// Creates a node of the given kind with no fields.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Returns the node kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Appends a field.
    pub fn push_field(&mut self, name: impl Into<String>, slot: Slot) {
        self.fields.push((name.into(), slot));
    }

    /// Returns a field slot by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Slot> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, slot)| slot)
    }

    /// Iterates fields in stored order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Replaces (or appends) a primitive field value.
    pub fn set_value(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.fields.iter_mut().find(|(n, _)| n == name) {
            entry.1 = Slot::Value(value);
        } else {
            self.fields.push((name.to_string(), Slot::Value(value)));
        }
    }

    /// Returns a string field.
    ///
    /// # Errors
    /// Returns a missing-field error if the field is absent or not a string.
    pub fn str_field(&self, name: &str) -> Result<&str> {
        match self.field(name) {
            Some(Slot::Value(v)) => v
                .as_str()
                .ok_or_else(|| Error::missing_field(self.kind.as_str(), name)),
            _ => Err(Error::missing_field(self.kind.as_str(), name)),
        }
    }

    /// Returns a string field, or `None` when the field is unset or nil.
    #[must_use]
    pub fn opt_str_field(&self, name: &str) -> Option<&str> {
        match self.field(name) {
            Some(Slot::Value(v)) => v.as_str(),
            _ => None,
        }
    }

    /// Returns a reference field: `Some(id)` when resolved, `None` when the
    /// slot is the explicit [`Slot::Missing`] marker.
    ///
    /// # Errors
    /// Returns a missing-field error if the field itself is absent.
    pub fn node_field(&self, name: &str) -> Result<Option<NodeId>> {
        match self.field(name) {
            Some(Slot::Node(id)) => Ok(Some(*id)),
            Some(Slot::Missing) => Ok(None),
            _ => Err(Error::missing_field(self.kind.as_str(), name)),
        }
    }

    /// Returns a collection field.
    ///
    /// # Errors
    /// Returns a missing-field error if the field is absent or not a
    /// sequence.
    pub fn seq_field(&self, name: &str) -> Result<&[NodeId]> {
        match self.field(name) {
            Some(Slot::Seq(ids)) => Ok(ids),
            _ => Err(Error::missing_field(self.kind.as_str(), name)),
        }
    }
}

/// Arena owning every node of one compile's IR.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node, returning its handle.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node arena overflow"));
        self.nodes.push(node);
        id
    }

    /// Borrows a node. Handles are only minted by this arena, so an
    /// out-of-range handle is a caller bug.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrows a node.
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
