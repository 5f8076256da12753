/*!
 * Synchronized Bidirectional Hash Map
 *
 * Same lock discipline as the hash map. `remove_value` composes a reverse
 * lookup and a removal under one exclusive lock, so no other operation can
 * relink the value between the two steps.
 */

use super::entries::deserialize_entries;
use crate::core::{BidiMap, CollectionError, CollectionResult, ContainerConfig, HashBidiMap};
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::{debug, trace};

const CONTAINER: &str = "HashBidiMap";

/// Thread-safe bidirectional hash map
///
/// Keys and values are both unique. Linking a key or value that is already
/// paired detaches its old partner.
///
/// # Example
///
/// ```
/// use sync_collections::SyncHashBidiMap;
///
/// let map = SyncHashBidiMap::new();
/// map.put("a", 1);
/// map.put("b", 1);
/// assert_eq!(map.get_key(&1), Some("b"));
/// assert_eq!(map.get(&"a"), None);
/// ```
pub struct SyncHashBidiMap<K, V, M = HashBidiMap<K, V>> {
    core: RwLock<M>,
    config: ContainerConfig,
    _entry: PhantomData<fn() -> (K, V)>,
}

impl<K, V, M> SyncHashBidiMap<K, V, M> {
    /// Wrap an existing core map
    pub fn from_core(core: M) -> Self {
        Self::from_core_with_config(core, ContainerConfig::default())
    }

    /// Wrap an existing core map with an explicit configuration
    pub fn from_core_with_config(core: M, config: ContainerConfig) -> Self {
        Self {
            core: RwLock::new(core),
            config,
            _entry: PhantomData,
        }
    }

    /// Active configuration
    pub fn config(&self) -> ContainerConfig {
        self.config
    }

    /// Unwrap the core map
    pub fn into_inner(self) -> M {
        self.core.into_inner()
    }
}

impl<K, V> SyncHashBidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Create an empty map
    pub fn new() -> Self {
        Self::from_config(ContainerConfig::default())
    }

    /// Create an empty map using `config`
    pub fn with_config(config: ContainerConfig) -> Self {
        Self::from_config(config)
    }
}

impl<K: Clone, V: Clone, M: BidiMap<K, V>> SyncHashBidiMap<K, V, M> {
    /// Create an empty map over any core using `config`
    pub fn from_config(config: ContainerConfig) -> Self {
        Self::from_core_with_config(M::with_capacity(config.initial_capacity), config)
    }

    /// Link `key` and `value`, returning the value `key` was previously linked to
    ///
    /// Any previous partner of `key` or of `value` is detached in the same
    /// critical section.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let mut core = self.core.write();
        let previous = core.put(key, value);
        trace!(
            container = CONTAINER,
            replaced = previous.is_some(),
            size = core.size(),
            "pair linked"
        );
        previous
    }

    /// Value linked to `key`
    pub fn get(&self, key: &K) -> Option<V> {
        self.core.read().get(key).cloned()
    }

    /// Key linked to `value`
    pub fn get_key(&self, value: &V) -> Option<K> {
        self.core.read().get_key(value).cloned()
    }

    /// True if `key` is present
    pub fn has(&self, key: &K) -> bool {
        self.core.read().contains_key(key)
    }

    /// Remove `key` and its linked value; absent keys are a no-op
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut core = self.core.write();
        let removed = core.remove(key);
        if removed.is_some() {
            trace!(container = CONTAINER, size = core.size(), "pair removed by key");
        }
        removed
    }

    /// Remove `value` and its linked key, returning the key
    ///
    /// The reverse lookup and the removal share one exclusive critical section.
    /// Absent values leave the map unchanged.
    pub fn remove_value(&self, value: &V) -> Option<K> {
        let mut core = self.core.write();
        let key = core.get_key(value).cloned()?;
        core.remove(&key);
        trace!(container = CONTAINER, size = core.size(), "pair removed by value");
        Some(key)
    }

    /// Snapshot of all keys, order unspecified
    pub fn keys(&self) -> Vec<K> {
        self.core.read().keys()
    }

    /// Snapshot of all values, order unspecified
    pub fn values(&self) -> Vec<V> {
        self.core.read().values()
    }

    /// Number of pairs
    pub fn size(&self) -> usize {
        self.core.read().size()
    }

    /// True if the map holds no pairs
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Remove all pairs, keeping the instance usable
    pub fn clear(&self) {
        let mut core = self.core.write();
        let dropped = core.size();
        core.clear();
        if self.config.shrink_on_clear {
            core.shrink_to_fit();
        }
        debug!(container = CONTAINER, dropped, "bidirectional map cleared");
    }

    /// Serialize a consistent snapshot as a JSON object
    pub fn to_json(&self) -> CollectionResult<String>
    where
        K: Serialize,
        V: Serialize,
    {
        serde_json::to_string(self).map_err(|e| CollectionError::serialization(CONTAINER, e))
    }

    /// Build a new map from a JSON object
    ///
    /// Pairs are linked in document order, so a repeated value ends up paired
    /// with the last key that named it.
    pub fn from_json(json: &str) -> CollectionResult<Self>
    where
        K: for<'de> Deserialize<'de>,
        V: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| CollectionError::deserialization(CONTAINER, e))
    }
}

impl<K: Clone, V: Clone, M: BidiMap<K, V>> Default for SyncHashBidiMap<K, V, M> {
    fn default() -> Self {
        Self::from_config(ContainerConfig::default())
    }
}

impl<K, V, M: Clone> Clone for SyncHashBidiMap<K, V, M> {
    /// Independent copy of the current contents
    fn clone(&self) -> Self {
        Self::from_core_with_config(self.core.read().clone(), self.config)
    }
}

impl<K, V, M> FromIterator<(K, V)> for SyncHashBidiMap<K, V, M>
where
    K: Clone,
    V: Clone,
    M: BidiMap<K, V>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, M: BidiMap<K, V>> Extend<(K, V)> for SyncHashBidiMap<K, V, M> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let core = self.core.get_mut();
        for (key, value) in iter {
            core.put(key, value);
        }
    }
}

impl<K, V, M: fmt::Display> fmt::Display for SyncHashBidiMap<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.core.read(), f)
    }
}

impl<K, V, M: fmt::Debug> fmt::Debug for SyncHashBidiMap<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHashBidiMap")
            .field("core", &*self.core.read())
            .field("config", &self.config)
            .finish()
    }
}

impl<K: Serialize, V: Serialize, M: BidiMap<K, V>> Serialize for SyncHashBidiMap<K, V, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let core = self.core.read();
        serializer.collect_map(core.iter())
    }
}

impl<'de, K, V, M> Deserialize<'de> for SyncHashBidiMap<K, V, M>
where
    K: Deserialize<'de> + Clone,
    V: Deserialize<'de> + Clone,
    M: BidiMap<K, V>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(deserialize_entries(deserializer)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_reassigned_value_detaches_old_key() {
        let map = SyncHashBidiMap::new();
        map.put("a", 1);
        map.put("b", 1);

        assert_eq!(map.get_key(&1), Some("b"));
        assert_eq!(map.get(&"a"), None);
        assert_eq!(map.size(), 1);
    }

    #[test]
    fn test_remove_value_only_touches_its_pair() {
        let map: SyncHashBidiMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        assert_eq!(map.remove_value(&2), Some("b"));
        assert_eq!(map.size(), 2);
        assert_eq!(map.get(&"a"), Some(1));
        assert_eq!(map.get(&"c"), Some(3));
        assert_eq!(map.get(&"b"), None);
        assert_eq!(map.get_key(&2), None);
    }

    #[test]
    fn test_remove_absent_value_is_noop() {
        let map: SyncHashBidiMap<&str, i32> = [("a", 1)].into_iter().collect();

        assert_eq!(map.remove_value(&9), None);
        assert_eq!(map.size(), 1);
        assert_eq!(map.get_key(&1), Some("a"));
    }

    #[test]
    fn test_remove_by_key_drops_reverse_entry() {
        let map = SyncHashBidiMap::new();
        map.put(1u8, 'x');

        assert_eq!(map.remove(&1), Some('x'));
        assert_eq!(map.get_key(&'x'), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_json_last_pair_wins() {
        let map = SyncHashBidiMap::<String, i32>::from_json(r#"{"a":1,"b":1,"c":2}"#).unwrap();

        assert_eq!(map.size(), 2);
        assert_eq!(map.get_key(&1), Some("b".to_string()));
        assert!(!map.has(&"a".to_string()));
    }

    #[test]
    fn test_concurrent_remove_value_is_atomic() {
        // Each value is removed by exactly one of the racing threads
        let map: Arc<SyncHashBidiMap<u32, u32>> = Arc::new((0..1_000).map(|i| (i, i)).collect());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let map = map.clone();
                thread::spawn(move || {
                    (0..1_000)
                        .filter(|value| map.remove_value(value).is_some())
                        .count()
                })
            })
            .collect();

        let removed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(removed, 1_000);
        assert!(map.is_empty());
    }

    #[test]
    fn test_concurrent_relinking_keeps_one_to_one() {
        let map = Arc::new(SyncHashBidiMap::<u32, u32>::new());

        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let map = map.clone();
                thread::spawn(move || {
                    for i in 0..500u32 {
                        map.put((t + i) % 16, i % 16);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        for key in map.keys() {
            if let Some(value) = map.get(&key) {
                assert_eq!(map.get_key(&value), Some(key));
            }
        }
        assert!(map.size() <= 16);
    }
}
