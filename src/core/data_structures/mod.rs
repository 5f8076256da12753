/*!
 * Data Structures
 *
 * Unsynchronized core containers wrapped by the synchronized layer:
 * - Array list backed by a growable vector
 * - Hash map and hash set backed by ahash tables
 * - Bidirectional hash map backed by a forward and an inverse table
 *
 * None of these types lock. They are the storage and algorithms only;
 * `lists`, `maps` and `sets` add the per-instance reader/writer lock.
 */

mod array_list;
mod hash_bidi_map;
mod hash_map;
mod hash_set;

pub use array_list::ArrayList;
pub use hash_bidi_map::HashBidiMap;
pub use hash_map::HashMap;
pub use hash_set::HashSet;

use std::fmt;

/// Write `Name\n` followed by the rendered items separated by `, `
pub(crate) fn write_items<I, F>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    items: I,
    mut render: F,
) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    writeln!(f, "{}", name)?;
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            f.write_str(", ")?;
        }
        render(f, item)?;
    }
    Ok(())
}
