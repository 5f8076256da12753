/*!
 * Map Integration Tests
 */

use pretty_assertions::assert_eq;
use sync_collections::{
    CollectionError, Container, HashBidiMap, Map, SyncHashBidiMap, SyncHashMap,
};

#[test]
fn test_map_get_after_put_and_remove() {
    let map = SyncHashMap::new();
    map.put("alpha", 1);
    map.put("beta", 2);

    assert_eq!(map.get(&"alpha"), Some(1));
    assert_eq!(map.get(&"beta"), Some(2));

    map.remove(&"alpha");
    assert_eq!(map.get(&"alpha"), None);
    assert!(!map.has(&"alpha"));
    assert_eq!(map.size(), 1);
}

#[test]
fn test_map_clear_and_reuse() {
    let map: SyncHashMap<u32, u32> = (0..100).map(|i| (i, i)).collect();
    map.clear();

    assert!(map.is_empty());
    assert!(map.keys().is_empty());

    map.put(1, 1);
    assert_eq!(map.size(), 1);
}

#[test]
fn test_map_string_representation() {
    let map = SyncHashMap::new();
    map.put(1, "one");
    assert_eq!(map.to_string(), "HashMap\n1:\"one\"");
}

#[test]
fn test_bidi_string_representation() {
    let map = SyncHashBidiMap::new();
    map.put(1, "one");
    assert_eq!(map.to_string(), "HashBidiMap\n1:\"one\"");
}

#[test]
fn test_bidi_clear_and_reuse() {
    let map: SyncHashBidiMap<u32, String> = (0..20).map(|i| (i, i.to_string())).collect();
    map.clear();

    assert!(map.is_empty());
    assert!(map.keys().is_empty());
    assert_eq!(map.get_key(&"7".to_string()), None);
    assert_eq!(map.remove_value(&"7".to_string()), None);

    map.put(7, "7".to_string());
    assert_eq!(map.get_key(&"7".to_string()), Some(7));
    assert_eq!(map.size(), 1);
}

#[test]
fn test_bidi_scenario_value_reassignment() {
    let map = SyncHashBidiMap::new();
    map.put("a", 1);
    map.put("b", 1);

    assert_eq!(map.get_key(&1), Some("b"));
    assert_eq!(map.get(&"a"), None);
}

#[test]
fn test_bidi_pairs_are_consistent() {
    let map: SyncHashBidiMap<u32, String> = (0..50).map(|i| (i, format!("v{}", i))).collect();

    for key in map.keys() {
        let value = map.get(&key).unwrap();
        assert_eq!(map.get_key(&value), Some(key));
    }
}

#[test]
fn test_bidi_remove_value_leaves_others() {
    let map: SyncHashBidiMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

    assert_eq!(map.remove_value(&1), Some("a"));
    assert_eq!(map.remove_value(&1), None);

    let mut keys = map.keys();
    keys.sort();
    assert_eq!(keys, vec!["b", "c"]);
    assert_eq!(map.get_key(&3), Some("c"));
}

#[test]
fn test_bidi_custom_core() {
    let mut core = HashBidiMap::new();
    core.put('x', 10);
    core.put('y', 20);

    let map: SyncHashBidiMap<char, i32> = SyncHashBidiMap::from_core(core);
    assert_eq!(map.get_key(&20), Some('y'));
    assert_eq!(map.remove_value(&10), Some('x'));
    assert_eq!(map.into_inner().size(), 1);
}

#[test]
fn test_bidi_json_snapshot() {
    let map = SyncHashBidiMap::new();
    map.put("k".to_string(), "v".to_string());

    let json = map.to_json().unwrap();
    assert_eq!(json, r#"{"k":"v"}"#);

    let restored = SyncHashBidiMap::<String, String>::from_json(&json).unwrap();
    assert_eq!(restored.get_key(&"v".to_string()), Some("k".to_string()));
}

#[test]
fn test_invalid_json_reports_container() {
    let err = SyncHashBidiMap::<String, u8>::from_json(r#"{"a":-1}"#).unwrap_err();
    match err {
        CollectionError::Deserialization { container, .. } => assert_eq!(container, "HashBidiMap"),
        other => panic!("unexpected error: {:?}", other),
    }
}
