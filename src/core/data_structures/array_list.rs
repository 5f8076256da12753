/*!
 * Array List
 * Growable, index-addressable sequence backed by a `Vec`
 */

use super::write_items;
use crate::core::traits::{Container, List};
use std::cmp::Ordering;
use std::fmt;

/// Unsynchronized array list
///
/// Out-of-range access is reported through `Option`/`bool` results, never by panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Borrow the elements in index order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements the list can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: Clone> Container for ArrayList<T> {
    type Value = T;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    fn values(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: Clone> List<T> for ArrayList<T> {
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.elements.extend(values);
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> bool {
        if index > self.elements.len() {
            return false;
        }
        let tail = self.elements.split_off(index);
        self.elements.extend(values);
        self.elements.extend(tail);
        true
    }

    fn swap(&mut self, i: usize, j: usize) -> bool {
        let len = self.elements.len();
        if i >= len || j >= len {
            return false;
        }
        self.elements.swap(i, j);
        true
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.elements.sort_by(compare);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, "ArrayList", &self.elements, |f, value| write!(f, "{:?}", value))
    }
}
