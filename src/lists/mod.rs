/*!
 * Lists
 * Thread-safe ordered sequences
 */

mod array_list;
mod enumerable;

pub use array_list::SyncArrayList;
