/*!
 * Hash Map
 * Unordered key/value table backed by ahash
 */

use super::write_items;
use crate::core::traits::{Container, Map};
use ahash::AHashMap;
use std::fmt;
use std::hash::Hash;

/// Unsynchronized hash map
#[derive(Debug, Clone)]
pub struct HashMap<K, V> {
    entries: AHashMap<K, V>,
}

impl<K, V> HashMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Container for HashMap<K, V> {
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity),
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    fn values(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Map<K, V> for HashMap<K, V> {
    type Iter<'a> = std::collections::hash_map::Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    fn keys(&self) -> Vec<K> {
        self.entries.keys().cloned().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, "HashMap", self.entries.iter(), |f, (key, value)| {
            write!(f, "{:?}:{:?}", key, value)
        })
    }
}
