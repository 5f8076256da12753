/*!
 * Bidirectional Hash Map
 * One-to-one key/value association with reverse lookup
 *
 * Two ahash tables are kept in lockstep: `forward` (key -> value) and
 * `inverse` (value -> key). Every mutation updates both before returning.
 */

use super::write_items;
use crate::core::traits::{BidiMap, Container, Map};
use ahash::AHashMap;
use std::fmt;
use std::hash::Hash;

/// Unsynchronized bidirectional hash map
#[derive(Debug, Clone)]
pub struct HashBidiMap<K, V> {
    forward: AHashMap<K, V>,
    inverse: AHashMap<V, K>,
}

impl<K, V> HashBidiMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            forward: AHashMap::new(),
            inverse: AHashMap::new(),
        }
    }
}

impl<K, V> Default for HashBidiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for HashBidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

impl<K, V> Container for HashBidiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash + Clone,
{
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: AHashMap::with_capacity(capacity),
            inverse: AHashMap::with_capacity(capacity),
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.forward.len()
    }

    fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }

    fn shrink_to_fit(&mut self) {
        self.forward.shrink_to_fit();
        self.inverse.shrink_to_fit();
    }

    fn values(&self) -> Vec<V> {
        self.forward.values().cloned().collect()
    }
}

impl<K, V> Map<K, V> for HashBidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    type Iter<'a> = std::collections::hash_map::Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    /// Link `key` and `value`, detaching the previous partner of each side
    fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.forward.remove(&key);
        if let Some(old_value) = &previous {
            self.inverse.remove(old_value);
        }
        if let Some(old_key) = self.inverse.remove(&value) {
            self.forward.remove(&old_key);
        }

        self.forward.insert(key.clone(), value.clone());
        self.inverse.insert(value, key);
        previous
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.inverse.remove(&value);
        Some(value)
    }

    fn keys(&self) -> Vec<K> {
        self.forward.keys().cloned().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.forward.iter()
    }
}

impl<K, V> BidiMap<K, V> for HashBidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    #[inline]
    fn get_key(&self, value: &V) -> Option<&K> {
        self.inverse.get(value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for HashBidiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, "HashBidiMap", self.forward.iter(), |f, (key, value)| {
            write!(f, "{:?}:{:?}", key, value)
        })
    }
}
