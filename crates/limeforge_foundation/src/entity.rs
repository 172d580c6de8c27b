//! Entity identity handles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identity handle for an entity within one graph.
///
/// Keys are assigned by the graph on insertion and are never reused:
/// a graph is append-only for the duration of a compile session, so a key
/// held anywhere remains valid for that session. The tree builder's memo
/// cache uses `(class name, EntityKey)` pairs as its canonical identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityKey {
    /// Index into entity storage.
    pub index: u64,
}

impl EntityKey {
    /// Creates a key with the given index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }
}

impl fmt::Debug for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityKey({})", self.index)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity {}", self.index)
    }
}
