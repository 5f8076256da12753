/*!
 * Core Traits
 * Container abstractions shared by the unsynchronized cores
 *
 * The synchronized wrappers are generic over these traits, so any core that
 * implements them (tree-backed, sorted, ...) can be swapped in without
 * touching callers.
 */

use std::cmp::Ordering;

/// Behaviour common to every container
pub trait Container {
    /// Element type reported by [`Container::values`]
    type Value;

    /// Create an empty container with room for `capacity` elements
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Number of elements
    fn size(&self) -> usize;

    /// True if the container holds no elements
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove all elements
    fn clear(&mut self);

    /// Release spare capacity
    fn shrink_to_fit(&mut self);

    /// Copy of all elements (maps report their values)
    fn values(&self) -> Vec<Self::Value>;
}

/// Ordered, index-addressable sequence
pub trait List<T>: Container<Value = T> + FromIterator<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Append values in iteration order
    fn add<I: IntoIterator<Item = T>>(&mut self, values: I);

    /// Element at `index`, `None` when out of range
    fn get(&self, index: usize) -> Option<&T>;

    /// Remove the element at `index`, `None` (and no change) when out of range
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Insert values at `index`, shifting later elements right
    ///
    /// `index == size` appends. Returns false (and changes nothing) when
    /// `index > size`.
    fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> bool;

    /// Exchange two elements, false (and no change) if either index is out of range
    fn swap(&mut self, i: usize, j: usize) -> bool;

    /// True if every value is present, vacuously true for an empty query
    fn contains(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        values.iter().all(|value| self.iter().any(|item| item == value))
    }

    /// Stable in-place sort with a three-way comparator
    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F);

    /// Iterate in index order
    fn iter(&self) -> Self::Iter<'_>;

    /// Visit every element with its index
    fn each<F: FnMut(usize, &T)>(&self, mut visit: F) {
        for (index, value) in self.iter().enumerate() {
            visit(index, value);
        }
    }

    /// True if `predicate` holds for at least one element
    fn any<F: FnMut(usize, &T) -> bool>(&self, mut predicate: F) -> bool {
        self.iter()
            .enumerate()
            .any(|(index, value)| predicate(index, value))
    }

    /// True if `predicate` holds for every element
    fn all<F: FnMut(usize, &T) -> bool>(&self, mut predicate: F) -> bool {
        self.iter()
            .enumerate()
            .all(|(index, value)| predicate(index, value))
    }

    /// First element for which `predicate` holds, with its index
    fn find<F: FnMut(usize, &T) -> bool>(&self, mut predicate: F) -> Option<(usize, &T)> {
        self.iter()
            .enumerate()
            .find(|(index, value)| predicate(*index, *value))
    }

    /// New list of the elements for which `predicate` holds
    fn select<F: FnMut(usize, &T) -> bool>(&self, mut predicate: F) -> Self
    where
        Self: Sized,
        T: Clone,
    {
        self.iter()
            .enumerate()
            .filter(|(index, value)| predicate(*index, *value))
            .map(|(_, value)| value.clone())
            .collect()
    }
}

/// Key to value association with unique keys
pub trait Map<K, V>: Container<Value = V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Insert or overwrite, returning the previous value for `key`
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Value stored under `key`
    fn get(&self, key: &K) -> Option<&V>;

    /// True if `key` is present
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value if it was present
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Copy of all keys, order unspecified
    fn keys(&self) -> Vec<K>;

    /// Iterate over entries, order unspecified
    fn iter(&self) -> Self::Iter<'_>;
}

/// Map whose values are unique and can be looked up in reverse
///
/// For every stored pair `(k, v)`: `get(k) == Some(v)` and `get_key(v) == Some(k)`.
/// `put` must detach any existing partner of either side before linking.
pub trait BidiMap<K, V>: Map<K, V> {
    /// Key paired with `value`
    fn get_key(&self, value: &V) -> Option<&K>;
}

/// Unordered collection of unique elements
pub trait Set<T>: Container<Value = T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Insert items, duplicates are ignored
    fn add<I: IntoIterator<Item = T>>(&mut self, items: I);

    /// Remove items, absent ones are ignored
    fn remove(&mut self, items: &[T]);

    /// True if every item is present, vacuously true for an empty query
    fn contains(&self, items: &[T]) -> bool;

    /// Iterate over members, order unspecified
    fn iter(&self) -> Self::Iter<'_>;
}
