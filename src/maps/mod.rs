/*!
 * Maps
 * Thread-safe key/value associations
 */

mod entries;
mod hash_bidi_map;
mod hash_map;

pub use hash_bidi_map::SyncHashBidiMap;
pub use hash_map::SyncHashMap;
