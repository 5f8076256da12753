/*!
 * Sync Collections Library
 * Thread-safe wrappers around in-memory containers
 *
 * Every wrapper owns one unsynchronized core container and one
 * `parking_lot::RwLock`. Mutations take the lock exclusively, reads take it
 * shared, and each public call is a single critical section.
 */

pub mod core;
pub mod lists;
pub mod maps;
pub mod monitoring;
pub mod sets;

// Re-exports
pub use crate::core::{
    ArrayList, BidiMap, CollectionError, CollectionResult, Container, ContainerConfig,
    HashBidiMap, HashMap, HashSet, List, Map, Set,
};
pub use lists::SyncArrayList;
pub use maps::{SyncHashBidiMap, SyncHashMap};
pub use monitoring::init_tracing;
pub use sets::SyncHashSet;
