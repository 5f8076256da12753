/*!
 * Sets
 * Thread-safe membership collections
 */

mod hash_set;

pub use hash_set::SyncHashSet;
