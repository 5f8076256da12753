/*!
 * Synchronized Hash Set
 *
 * Exclusive lock for `add`, `remove` and `clear`; shared lock for queries.
 */

use crate::core::{CollectionError, CollectionResult, ContainerConfig, HashSet, Set};
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::{debug, trace};

const CONTAINER: &str = "HashSet";

/// Thread-safe hash set
///
/// # Example
///
/// ```
/// use sync_collections::SyncHashSet;
///
/// let set = SyncHashSet::new();
/// set.add(["a", "b"]);
/// assert!(set.contains(&["a", "b"]));
/// assert!(set.contains(&[]));
/// ```
pub struct SyncHashSet<T, S = HashSet<T>> {
    core: RwLock<S>,
    config: ContainerConfig,
    _item: PhantomData<fn() -> T>,
}

impl<T, S> SyncHashSet<T, S> {
    /// Wrap an existing core set
    pub fn from_core(core: S) -> Self {
        Self::from_core_with_config(core, ContainerConfig::default())
    }

    /// Wrap an existing core set with an explicit configuration
    pub fn from_core_with_config(core: S, config: ContainerConfig) -> Self {
        Self {
            core: RwLock::new(core),
            config,
            _item: PhantomData,
        }
    }

    /// Active configuration
    pub fn config(&self) -> ContainerConfig {
        self.config
    }

    /// Unwrap the core set
    pub fn into_inner(self) -> S {
        self.core.into_inner()
    }
}

impl<T: Eq + Hash + Clone> SyncHashSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::from_config(ContainerConfig::default())
    }

    /// Create an empty set using `config`
    pub fn with_config(config: ContainerConfig) -> Self {
        Self::from_config(config)
    }
}

impl<T: Clone, S: Set<T>> SyncHashSet<T, S> {
    /// Create an empty set over any core using `config`
    pub fn from_config(config: ContainerConfig) -> Self {
        Self::from_core_with_config(S::with_capacity(config.initial_capacity), config)
    }

    /// Insert items; items already present are ignored
    pub fn add<I: IntoIterator<Item = T>>(&self, items: I) {
        let mut core = self.core.write();
        let before = core.size();
        core.add(items);
        trace!(
            container = CONTAINER,
            added = core.size() - before,
            size = core.size(),
            "items added"
        );
    }

    /// Remove items; absent items are ignored
    pub fn remove(&self, items: &[T]) {
        let mut core = self.core.write();
        let before = core.size();
        core.remove(items);
        trace!(
            container = CONTAINER,
            removed = before - core.size(),
            size = core.size(),
            "items removed"
        );
    }

    /// True if every item is present, vacuously true for an empty query
    pub fn contains(&self, items: &[T]) -> bool {
        self.core.read().contains(items)
    }

    /// Number of members
    pub fn size(&self) -> usize {
        self.core.read().size()
    }

    /// True if the set has no members
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Snapshot of all members, order unspecified
    pub fn values(&self) -> Vec<T> {
        self.core.read().values()
    }

    /// Remove all members, keeping the instance usable
    pub fn clear(&self) {
        let mut core = self.core.write();
        let dropped = core.size();
        core.clear();
        if self.config.shrink_on_clear {
            core.shrink_to_fit();
        }
        debug!(container = CONTAINER, dropped, "set cleared");
    }

    /// Serialize a consistent snapshot as a JSON array
    pub fn to_json(&self) -> CollectionResult<String>
    where
        T: Serialize,
    {
        serde_json::to_string(self).map_err(|e| CollectionError::serialization(CONTAINER, e))
    }

    /// Build a new set from a JSON array; duplicates collapse
    pub fn from_json(json: &str) -> CollectionResult<Self>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| CollectionError::deserialization(CONTAINER, e))
    }
}

impl<T: Clone, S: Set<T>> Default for SyncHashSet<T, S> {
    fn default() -> Self {
        Self::from_config(ContainerConfig::default())
    }
}

impl<T, S: Clone> Clone for SyncHashSet<T, S> {
    /// Independent copy of the current contents
    fn clone(&self) -> Self {
        Self::from_core_with_config(self.core.read().clone(), self.config)
    }
}

impl<T: Clone, S: Set<T>> FromIterator<T> for SyncHashSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, S: Set<T>> Extend<T> for SyncHashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.core.get_mut().add(iter);
    }
}

impl<T, S: fmt::Display> fmt::Display for SyncHashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.core.read(), f)
    }
}

impl<T, S: fmt::Debug> fmt::Debug for SyncHashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHashSet")
            .field("core", &*self.core.read())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Serialize, S: Set<T>> Serialize for SyncHashSet<T, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let core = self.core.read();
        serializer.collect_seq(core.iter())
    }
}

impl<'de, T, S> Deserialize<'de> for SyncHashSet<T, S>
where
    T: Deserialize<'de> + Clone,
    S: Set<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_add_remove_contains() {
        let set = SyncHashSet::new();
        set.add([1, 2, 3]);

        assert!(set.contains(&[1, 3]));
        assert!(!set.contains(&[1, 4]));

        set.remove(&[1, 4]);
        assert!(!set.contains(&[1]));
        assert_eq!(set.size(), 2);
    }

    #[test]
    fn test_empty_query_is_vacuously_true() {
        let set: SyncHashSet<String> = SyncHashSet::new();
        assert!(set.is_empty());
        assert!(set.contains(&[]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: SyncHashSet<char> = "mississippi".chars().collect();

        let mut members = set.values();
        members.sort();
        assert_eq!(members, vec!['i', 'm', 'p', 's']);
    }

    #[test]
    fn test_json_snapshot() {
        let set = SyncHashSet::<u8>::from_json("[3,3,1]").unwrap();
        assert_eq!(set.size(), 2);

        let json = set.to_json().unwrap();
        let restored = SyncHashSet::<u8>::from_json(&json).unwrap();
        assert!(restored.contains(&[1, 3]));

        assert!(SyncHashSet::<u8>::from_json("[300]").is_err());
    }

    #[test]
    fn test_clear_keeps_instance_usable() {
        let set: SyncHashSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());

        set.add([42]);
        assert!(set.contains(&[42]));
    }

    #[test]
    fn test_concurrent_add() {
        let set = Arc::new(SyncHashSet::new());
        let mut handles = vec![];

        for i in 0..8u64 {
            let set = set.clone();
            handles.push(thread::spawn(move || {
                for j in 0..500u64 {
                    // Every value is added twice across threads
                    set.add([(i * 500 + j) / 2]);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(set.size(), 2_000);
    }
}
