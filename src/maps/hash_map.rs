/*!
 * Synchronized Hash Map
 *
 * Exclusive lock around `put`, `remove` and `clear`; shared lock around
 * every read.
 */

use super::entries::deserialize_entries;
use crate::core::{CollectionError, CollectionResult, ContainerConfig, HashMap, Map};
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::{debug, trace};

const CONTAINER: &str = "HashMap";

/// Thread-safe hash map
///
/// # Example
///
/// ```
/// use sync_collections::SyncHashMap;
///
/// let map = SyncHashMap::new();
/// map.put("a", 1);
/// assert_eq!(map.get(&"a"), Some(1));
/// assert!(!map.has(&"b"));
/// ```
pub struct SyncHashMap<K, V, M = HashMap<K, V>> {
    core: RwLock<M>,
    config: ContainerConfig,
    _entry: PhantomData<fn() -> (K, V)>,
}

impl<K, V, M> SyncHashMap<K, V, M> {
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

impl<K: Eq + Hash + Clone, V: Clone> SyncHashMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::from_config(ContainerConfig::default())
    }

    /// Create an empty map using `config`
    pub fn with_config(config: ContainerConfig) -> Self {
        Self::from_config(config)
    }
}

impl<K: Clone, V: Clone, M: Map<K, V>> SyncHashMap<K, V, M> {
    /// Create an empty map over any core using `config`
    pub fn from_config(config: ContainerConfig) -> Self {
        Self::from_core_with_config(M::with_capacity(config.initial_capacity), config)
    }

    /// Insert or overwrite, returning the previous value
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let mut core = self.core.write();
        let previous = core.put(key, value);
        trace!(
            container = CONTAINER,
            replaced = previous.is_some(),
            size = core.size(),
            "entry stored"
        );
        previous
    }

    /// Value stored under `key`
    pub fn get(&self, key: &K) -> Option<V> {
        self.core.read().get(key).cloned()
    }

    /// True if `key` is present
    ///
    /// Answered in one shared critical section without copying the value.
    pub fn has(&self, key: &K) -> bool {
        self.core.read().contains_key(key)
    }

    /// Remove `key`, returning its value; absent keys are a no-op
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut core = self.core.write();
        let removed = core.remove(key);
        if removed.is_some() {
            trace!(container = CONTAINER, size = core.size(), "entry removed");
        }
        removed
    }

    /// Snapshot of all keys, order unspecified
    pub fn keys(&self) -> Vec<K> {
        self.core.read().keys()
    }

    /// Snapshot of all values, order unspecified
    pub fn values(&self) -> Vec<V> {
        self.core.read().values()
    }

    /// Number of entries
    pub fn size(&self) -> usize {
        self.core.read().size()
    }

    /// True if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Remove all entries, keeping the instance usable
    pub fn clear(&self) {
        let mut core = self.core.write();
        let dropped = core.size();
        core.clear();
        if self.config.shrink_on_clear {
            core.shrink_to_fit();
        }
        debug!(container = CONTAINER, dropped, "map cleared");
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
    pub fn from_json(json: &str) -> CollectionResult<Self>
    where
        K: for<'de> Deserialize<'de>,
        V: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| CollectionError::deserialization(CONTAINER, e))
    }
}

impl<K: Clone, V: Clone, M: Map<K, V>> Default for SyncHashMap<K, V, M> {
    fn default() -> Self {
        Self::from_config(ContainerConfig::default())
    }
}

impl<K, V, M: Clone> Clone for SyncHashMap<K, V, M> {
    /// Independent copy of the current contents
    fn clone(&self) -> Self {
        Self::from_core_with_config(self.core.read().clone(), self.config)
    }
}

impl<K, V, M> FromIterator<(K, V)> for SyncHashMap<K, V, M>
where
    K: Clone,
    V: Clone,
    M: Map<K, V>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, M: Map<K, V>> Extend<(K, V)> for SyncHashMap<K, V, M> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let core = self.core.get_mut();
        for (key, value) in iter {
            core.put(key, value);
        }
    }
}

impl<K, V, M: fmt::Display> fmt::Display for SyncHashMap<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.core.read(), f)
    }
}

impl<K, V, M: fmt::Debug> fmt::Debug for SyncHashMap<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHashMap")
            .field("core", &*self.core.read())
            .field("config", &self.config)
            .finish()
    }
}

impl<K: Serialize, V: Serialize, M: Map<K, V>> Serialize for SyncHashMap<K, V, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let core = self.core.read();
        serializer.collect_map(core.iter())
    }
}

impl<'de, K, V, M> Deserialize<'de> for SyncHashMap<K, V, M>
where
    K: Deserialize<'de> + Clone,
    V: Deserialize<'de> + Clone,
    M: Map<K, V>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(deserialize_entries(deserializer)?.into_iter().collect())
    }
}
