use std::collections::BTreeMap;

use crate::graph::VertexId;

/// Ordered name → vertex id index.
///
/// Keys compare by byte order (`str`'s `Ord`), so lookups are exact-match
/// only and in-order iteration is lexicographic. Backed by a B-tree, which
/// gives logarithmic insert and lookup.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    map: BTreeMap<String, VertexId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` to `id`. If `key` was already present the new id replaces
    /// the old one, which is returned.
    pub fn insert(&mut self, key: &str, id: VertexId) -> Option<VertexId> {
        self.map.insert(key.to_owned(), id)
    }

    /// Exact-match lookup.
    pub fn lookup(&self, key: &str) -> Option<VertexId> {
        self.map.get(key).copied()
    }

    /// In-order walk over `(key, id)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, VertexId)> {
        self.map.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Approximate heap bytes held by keys and tree nodes.
    pub(crate) fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let keys: usize = self.map.keys().map(String::capacity).sum();
        keys + self.map.len() * (size_of::<String>() + size_of::<VertexId>() + 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_match_only() {
        let mut idx = NameIndex::new();
        idx.insert("cat", 0);
        idx.insert("catalog", 1);

        assert_eq!(idx.lookup("cat"), Some(0));
        assert_eq!(idx.lookup("catalog"), Some(1));
        assert_eq!(idx.lookup("ca"), None);
        assert_eq!(idx.lookup("Cat"), None);
        assert_eq!(idx.lookup(""), None);
    }

    #[test]
    fn test_iter_is_byte_ordered() {
        let mut idx = NameIndex::new();
        for (i, key) in ["pear", "Zebra", "apple", "banana"].iter().enumerate() {
            idx.insert(key, i);
        }
        let keys: Vec<&str> = idx.iter().map(|(k, _)| k).collect();
        // Uppercase sorts before lowercase in byte order
        assert_eq!(keys, vec!["Zebra", "apple", "banana", "pear"]);
    }

    #[test]
    fn test_reinsert_replaces_and_returns_previous() {
        let mut idx = NameIndex::new();
        assert_eq!(idx.insert("dup", 3), None);
        assert_eq!(idx.insert("dup", 7), Some(3));
        assert_eq!(idx.lookup("dup"), Some(7));
        assert_eq!(idx.iter().collect::<Vec<_>>(), vec![("dup", 7)]);
    }

    #[test]
    fn test_empty() {
        let idx = NameIndex::new();
        assert_eq!(idx.lookup("anything"), None);
        assert_eq!(idx.iter().count(), 0);
    }
}
