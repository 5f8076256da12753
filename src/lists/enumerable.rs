/*!
 * Enumerable Operations
 * Index-aware traversal over a synchronized list
 *
 * Each traversal holds the lock for its whole duration, not per element.
 * `each` and `map` take it exclusively, the pure queries take it shared.
 */

use super::array_list::{SyncArrayList, CONTAINER};
use crate::core::{ArrayList, List};
use crate::monitoring::span_callback;

impl<T: Clone, L: List<T>> SyncArrayList<T, L> {
    /// Call `visit` once per element with its index
    ///
    /// Holds the exclusive lock for the entire traversal. `visit` must not call
    /// back into this list.
    pub fn each<F: FnMut(usize, &T)>(&self, visit: F) {
        let core = self.core.write();
        let _span = span_callback(CONTAINER, "each", core.size());
        core.each(visit);
    }

    /// New list holding `f(index, value)` for every element
    ///
    /// The result uses the default core and this list's configuration.
    pub fn map<U, F>(&self, mut f: F) -> SyncArrayList<U>
    where
        U: Clone,
        F: FnMut(usize, &T) -> U,
    {
        let core = self.core.write();
        let _span = span_callback(CONTAINER, "map", core.size());
        let mapped: ArrayList<U> = core
            .iter()
            .enumerate()
            .map(|(index, value)| f(index, value))
            .collect();
        SyncArrayList::from_core_with_config(mapped, self.config)
    }

    /// New list holding the elements for which `predicate` holds
    pub fn select<F: FnMut(usize, &T) -> bool>(&self, predicate: F) -> Self {
        let core = self.core.read();
        let _span = span_callback(CONTAINER, "select", core.size());
        Self::from_core_with_config(core.select(predicate), self.config)
    }

    /// True if `predicate` holds for at least one element
    pub fn any<F: FnMut(usize, &T) -> bool>(&self, predicate: F) -> bool {
        let core = self.core.read();
        let _span = span_callback(CONTAINER, "any", core.size());
        core.any(predicate)
    }

    /// True if `predicate` holds for every element, vacuously true when empty
    pub fn all<F: FnMut(usize, &T) -> bool>(&self, predicate: F) -> bool {
        let core = self.core.read();
        let _span = span_callback(CONTAINER, "all", core.size());
        core.all(predicate)
    }

    /// First element for which `predicate` holds, with its index
    pub fn find<F: FnMut(usize, &T) -> bool>(&self, predicate: F) -> Option<(usize, T)> {
        let core = self.core.read();
        let _span = span_callback(CONTAINER, "find", core.size());
        core.find(predicate).map(|(index, value)| (index, value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn sample() -> SyncArrayList<i32> {
        (1..=6).collect()
    }

    #[test]
    fn test_each_visits_in_order() {
        let list = sample();
        let mut seen = Vec::new();

        list.each(|index, value| seen.push((index, *value)));

        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], (0, 1));
        assert_eq!(seen[5], (5, 6));
    }

    #[test]
    fn test_map_changes_element_type() {
        let list = sample();
        let labels = list.map(|index, value| format!("{}:{}", index, value));

        assert_eq!(labels.get(0), Some("0:1".to_string()));
        assert_eq!(labels.size(), 6);
        // Source is untouched
        assert_eq!(list.size(), 6);
    }

    #[test]
    fn test_select_keeps_config() {
        let list = SyncArrayList::with_config(crate::core::ContainerConfig::bulk());
        list.add(1..=6);

        let odd = list.select(|_, v| v % 2 == 1);
        assert_eq!(odd.values(), vec![1, 3, 5]);
        assert_eq!(odd.config(), list.config());
    }

    #[test]
    fn test_any_all_find() {
        let list = sample();

        assert!(list.any(|_, v| *v == 4));
        assert!(!list.any(|_, v| *v == 40));
        assert!(list.all(|_, v| *v > 0));
        assert!(!list.all(|index, _| index < 3));

        assert_eq!(list.find(|_, v| *v > 3), Some((3, 4)));
        assert_eq!(list.find(|_, v| *v > 30), None);
    }

    #[test]
    fn test_traversal_on_empty_list() {
        let list: SyncArrayList<i32> = SyncArrayList::new();

        assert!(!list.any(|_, _| true));
        assert!(list.all(|_, _| false));
        assert_eq!(list.find(|_, _| true), None);
        assert!(list.map(|_, v| *v).is_empty());
    }

    #[test]
    fn test_each_blocks_concurrent_add() {
        let list = Arc::new(sample());
        let started = Arc::new(AtomicBool::new(false));

        let traversal = {
            let list = list.clone();
            let started = started.clone();
            thread::spawn(move || {
                let mut visited = 0;
                list.each(|_, _| {
                    started.store(true, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(10));
                    visited += 1;
                });
                visited
            })
        };

        while !started.load(Ordering::SeqCst) {
            thread::yield_now();
        }

        // Blocks until the traversal releases the lock
        list.add([7]);

        assert_eq!(traversal.join().unwrap(), 6);
        assert_eq!(list.size(), 7);
    }
}
