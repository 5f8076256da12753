/*!
 * Entry Deserialization
 * Reads a serialized map as key/value pairs in document order
 */

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

struct EntriesVisitor<K, V> {
    _entry: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Vec<(K, V)>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

/// Deserialize a map into pairs, preserving the order they appear in
///
/// Replaying the pairs through `put` makes the last occurrence win, which is
/// what keeps a bidirectional map one-to-one after import.
pub(super) fn deserialize_entries<'de, D, K, V>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(EntriesVisitor {
        _entry: PhantomData,
    })
}
