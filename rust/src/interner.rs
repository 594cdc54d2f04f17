//! Activity id interning.
//!
//! Maps string activity ids to dense arena indices so the passes can use plain
//! `Vec` indexing instead of hashing strings in their inner loops.

use rustc_hash::FxHashMap;

/// Dense index of an activity inside an [`crate::ActivityGraph`] arena.
pub type ActivityId = u32;

/// Bidirectional id <-> index mapping, indices assigned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ActivityInterner {
    to_index: FxHashMap<String, ActivityId>,
    from_index: Vec<String>,
}

impl ActivityInterner {
    /// Create an empty interner with room for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_index: Vec::with_capacity(capacity),
        }
    }

    /// Register a new id. Returns `None` if the id is already registered.
    pub fn insert_unique(&mut self, id: &str) -> Option<ActivityId> {
        if self.to_index.contains_key(id) {
            return None;
        }
        let index = self.from_index.len() as ActivityId;
        self.from_index.push(id.to_string());
        self.to_index.insert(id.to_string(), index);
        Some(index)
    }

    /// Look up the index of an id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<ActivityId> {
        self.to_index.get(id).copied()
    }

    /// Resolve an index back to its id.
    #[inline]
    pub fn resolve(&self, index: ActivityId) -> Option<&str> {
        self.from_index.get(index as usize).map(|s| s.as_str())
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.from_index.len()
    }

    /// Returns `true` if no ids are registered.
    pub fn is_empty(&self) -> bool {
        self.from_index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion_order() {
        let mut interner = ActivityInterner::with_capacity(3);
        assert_eq!(interner.insert_unique("design"), Some(0));
        assert_eq!(interner.insert_unique("build"), Some(1));
        assert_eq!(interner.insert_unique("test"), Some(2));

        assert_eq!(interner.get("build"), Some(1));
        assert_eq!(interner.resolve(2), Some("test"));
        assert_eq!(interner.get("deploy"), None);
        assert_eq!(interner.resolve(3), None);
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut interner = ActivityInterner::default();
        assert!(interner.is_empty());
        assert_eq!(interner.insert_unique("a"), Some(0));
        assert_eq!(interner.insert_unique("a"), None);
        assert_eq!(interner.len(), 1);
    }
}
