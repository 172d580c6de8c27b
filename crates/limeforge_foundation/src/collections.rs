//! Persistent collection aliases.
//!
//! Limeforge uses `im` persistent collections so entity records and field
//! values are cheap to clone and share structurally.

/// Persistent vector.
pub type LfVec<T> = im::Vector<T>;

/// Persistent hash map.
pub type LfMap<K, V> = im::HashMap<K, V>;

/// Builds an [`LfVec`] from an iterator.
pub fn lfvec<T, I>(items: I) -> LfVec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}
