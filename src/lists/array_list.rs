/*!
 * Synchronized Array List
 *
 * One `parking_lot::RwLock` per instance guards the whole core list.
 * Mutations take the lock exclusively, reads take it shared, and every call
 * is a single critical section from start to finish.
 */

use crate::core::{ArrayList, CollectionError, CollectionResult, ContainerConfig, List};
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

pub(super) const CONTAINER: &str = "ArrayList";

/// Thread-safe array list
///
/// Generic over the core list `L` so alternative implementations can be
/// substituted; the default is [`ArrayList`].
///
/// # Re-entrancy
///
/// Callbacks (comparators, visitors) run while the lock is held. They must not
/// call back into the same instance: the lock is not reentrant and the call
/// blocks forever.
///
/// # Example
///
/// ```
/// use sync_collections::SyncArrayList;
///
/// let list = SyncArrayList::new();
/// list.add([1, 2, 3]);
/// list.insert(1, [10]);
/// assert_eq!(list.values(), vec![1, 10, 2, 3]);
/// assert_eq!(list.get(5), None);
/// ```
pub struct SyncArrayList<T, L = ArrayList<T>> {
    pub(super) core: RwLock<L>,
    pub(super) config: ContainerConfig,
    _element: PhantomData<fn() -> T>,
}

impl<T, L> SyncArrayList<T, L> {
    /// Wrap an existing core list
    pub fn from_core(core: L) -> Self {
        Self::from_core_with_config(core, ContainerConfig::default())
    }

    /// Wrap an existing core list with an explicit configuration
    pub fn from_core_with_config(core: L, config: ContainerConfig) -> Self {
        Self {
            core: RwLock::new(core),
            config,
            _element: PhantomData,
        }
    }

    /// Active configuration
    pub fn config(&self) -> ContainerConfig {
        self.config
    }

    /// Unwrap the core list
    pub fn into_inner(self) -> L {
        self.core.into_inner()
    }
}

impl<T: Clone> SyncArrayList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::from_config(ContainerConfig::default())
    }

    /// Create an empty list using `config`
    pub fn with_config(config: ContainerConfig) -> Self {
        Self::from_config(config)
    }
}

impl<T: Clone, L: List<T>> SyncArrayList<T, L> {
    /// Create an empty list over any core using `config`
    pub fn from_config(config: ContainerConfig) -> Self {
        Self::from_core_with_config(L::with_capacity(config.initial_capacity), config)
    }

    /// Append values in argument order
    pub fn add<I: IntoIterator<Item = T>>(&self, values: I) {
        let mut core = self.core.write();
        let before = core.size();
        core.add(values);
        trace!(
            container = CONTAINER,
            added = core.size() - before,
            size = core.size(),
            "values added"
        );
    }

    /// Element at `index`, `None` if out of range
    pub fn get(&self, index: usize) -> Option<T> {
        self.core.read().get(index).cloned()
    }

    /// Remove the element at `index`
    ///
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove(&self, index: usize) -> Option<T> {
        let mut core = self.core.write();
        let removed = core.remove(index);
        if removed.is_some() {
            trace!(container = CONTAINER, index, size = core.size(), "value removed");
        }
        removed
    }

    /// Insert values at `index`, shifting later elements right
    ///
    /// `index == size()` appends. Returns false, changing nothing, when
    /// `index > size()`.
    pub fn insert<I: IntoIterator<Item = T>>(&self, index: usize, values: I) -> bool {
        let mut core = self.core.write();
        let inserted = core.insert(index, values);
        if inserted {
            trace!(container = CONTAINER, index, size = core.size(), "values inserted");
        }
        inserted
    }

    /// Exchange the elements at `i` and `j`
    ///
    /// Returns false, changing nothing, if either index is out of range.
    pub fn swap(&self, i: usize, j: usize) -> bool {
        self.core.write().swap(i, j)
    }

    /// True if every value is present, vacuously true for an empty query
    ///
    /// Linear scan per value.
    pub fn contains(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.core.read().contains(values)
    }

    /// Sort in place with a three-way comparator
    ///
    /// The comparator runs under the exclusive lock and must not touch this list.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&self, compare: F) {
        let mut core = self.core.write();
        let _span = crate::monitoring::span_callback(CONTAINER, "sort_by", core.size());
        core.sort_by(compare);
    }

    /// Sort in place by the natural order of `T`
    pub fn sort(&self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.core.read().size()
    }

    /// True if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Copy of all elements in index order
    pub fn values(&self) -> Vec<T> {
        self.core.read().values()
    }

    /// Remove all elements, keeping the instance usable
    pub fn clear(&self) {
        let mut core = self.core.write();
        let dropped = core.size();
        core.clear();
        if self.config.shrink_on_clear {
            core.shrink_to_fit();
        }
        debug!(container = CONTAINER, dropped, "list cleared");
    }

    /// Serialize a consistent snapshot as a JSON array
    pub fn to_json(&self) -> CollectionResult<String>
    where
        T: Serialize,
    {
        serde_json::to_string(self).map_err(|e| CollectionError::serialization(CONTAINER, e))
    }

    /// Build a new list from a JSON array
    pub fn from_json(json: &str) -> CollectionResult<Self>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| CollectionError::deserialization(CONTAINER, e))
    }
}

impl<T: Clone, L: List<T>> Default for SyncArrayList<T, L> {
    fn default() -> Self {
        Self::from_config(ContainerConfig::default())
    }
}

impl<T, L: Clone> Clone for SyncArrayList<T, L> {
    /// Independent copy of the current contents
    fn clone(&self) -> Self {
        Self::from_core_with_config(self.core.read().clone(), self.config)
    }
}

impl<T, L: List<T>> FromIterator<T> for SyncArrayList<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_core(L::from_iter(iter))
    }
}

impl<T, L: List<T>> Extend<T> for SyncArrayList<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Exclusive borrow, no locking needed
        self.core.get_mut().add(iter);
    }
}

impl<T, L: fmt::Display> fmt::Display for SyncArrayList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.core.read(), f)
    }
}

impl<T, L: fmt::Debug> fmt::Debug for SyncArrayList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncArrayList")
            .field("core", &*self.core.read())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Serialize, L: List<T>> Serialize for SyncArrayList<T, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let core = self.core.read();
        serializer.collect_seq(core.iter())
    }
}

impl<'de, T: Deserialize<'de>, L: List<T>> Deserialize<'de> for SyncArrayList<T, L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
