/*!
 * Hash Set
 * Unordered membership table backed by ahash
 */

use super::write_items;
use crate::core::traits::{Container, Set};
use ahash::AHashSet;
use std::fmt;
use std::hash::Hash;

/// Unsynchronized hash set
#[derive(Debug, Clone)]
pub struct HashSet<T> {
    items: AHashSet<T>,
}

impl<T> HashSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            items: AHashSet::new(),
        }
    }
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash + Clone> Container for HashSet<T> {
    type Value = T;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: AHashSet::with_capacity(capacity),
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    fn values(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Set<T> for HashSet<T> {
    type Iter<'a> = std::collections::hash_set::Iter<'a, T> where Self: 'a, T: 'a;

    fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    fn remove(&mut self, items: &[T]) {
        for item in items {
            self.items.remove(item);
        }
    }

    fn contains(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.items.contains(item))
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for HashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, "HashSet", self.items.iter(), |f, item| write!(f, "{:?}", item))
    }
}
