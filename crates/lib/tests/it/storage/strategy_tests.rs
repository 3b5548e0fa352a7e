use std::collections::BTreeMap;

use serdict::storage::{JsonText, ListStorage, Required, StorageError, Wrapped, Wrapper};
use serdict::{ArrayMap, Buffers, Error, ListMap, SerialMap};

#[test]
fn test_list_map_round_trip() {
    let mut map: ListMap<String, String> = ListMap::new();
    map.insert(
        "colors".to_string(),
        vec!["red".to_string(), "blue".to_string()],
    );
    map.insert("empty".to_string(), Vec::new());

    let mut buffers = map.begin_export().unwrap();
    assert_eq!(
        buffers.values,
        Some(vec![
            ListStorage {
                items: vec!["red".to_string(), "blue".to_string()]
            },
            ListStorage { items: Vec::new() },
        ])
    );

    let mut restored: ListMap<String, String> = ListMap::new();
    restored.end_import(&mut buffers).unwrap();
    assert_eq!(restored, map);
}

#[test]
fn test_list_carriers_are_not_shared() {
    let mut map: ListMap<u8, u8> = ListMap::new();
    map.insert(1, vec![1]);
    map.insert(2, vec![1]);

    let mut buffers = map.begin_export().unwrap();
    if let Some(values) = buffers.values.as_mut() {
        values[0].items.push(99);
    }

    let mut restored: ListMap<u8, u8> = ListMap::new();
    restored.end_import(&mut buffers).unwrap();
    assert_eq!(restored.get(&1), Some(&vec![1, 99]));
    assert_eq!(restored.get(&2), Some(&vec![1]));
    // The source map is untouched by edits to its export
    assert_eq!(map.get(&1), Some(&vec![1]));
}

#[test]
fn test_array_map_round_trip_through_json() {
    let mut map: ArrayMap<String, f32> = ArrayMap::new();
    map.insert("origin".to_string(), vec![0.0, 0.0, 0.0].into_boxed_slice());
    map.insert("up".to_string(), vec![0.0, 1.0, 0.0].into_boxed_slice());

    let json = serde_json::to_string(&map).unwrap();
    let restored: ArrayMap<String, f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, map);
    assert_eq!(restored.get("up").map(|v| v.len()), Some(3));
}

#[test]
fn test_wrapped_values() {
    let mut map: SerialMap<String, (i32, i32), Wrapped> = SerialMap::new();
    map.insert("pos".to_string(), (3, 4));

    let buffers = map.begin_export().unwrap();
    assert_eq!(buffers.values, Some(vec![Wrapper { value: (3, 4) }]));

    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"keys": ["pos"], "values": [{"value": [3, 4]}]})
    );
}

#[test]
fn test_required_store_failure_is_not_a_conflict() {
    let mut map: SerialMap<String, Option<String>, Required> = SerialMap::new();
    map.insert("set".to_string(), Some("v".to_string()));
    map.insert("unset".to_string(), None);

    let err = map.begin_export().unwrap_err();
    assert!(err.is_storage_error());
    assert_eq!(err.module(), "storage");
    assert!(matches!(
        err,
        Error::Storage(StorageError::MissingValue { .. })
    ));
    assert!(map.conflicts().is_empty());

    let result = serde_json::to_string(&map);
    assert!(result.is_err());
}

#[test]
fn test_json_text_decode_failure_leaves_map_untouched() {
    let mut map: SerialMap<String, BTreeMap<String, u32>, JsonText> = SerialMap::new();
    map.insert("prior".to_string(), BTreeMap::new());

    let mut buffers: Buffers<String, String> = Buffers::new(
        vec![Some("good".to_string()), Some("bad".to_string())],
        vec![r#"{"n":1}"#.to_string(), "{oops".to_string()],
    );

    let err = map.end_import(&mut buffers).unwrap_err();
    assert!(err.is_storage_error());
    assert!(matches!(
        err,
        Error::Storage(StorageError::DecodeFailed { .. })
    ));
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("prior"));
}

#[test]
fn test_json_text_dropped_entries_still_loaded() {
    let mut map: SerialMap<String, Vec<u8>, JsonText> = SerialMap::new();
    let mut buffers: Buffers<String, String> = Buffers::new(
        vec![Some("a".to_string()), None],
        vec!["[1]".to_string(), "[2,3]".to_string()],
    );

    let conflicts = map.end_import(&mut buffers).unwrap();
    assert_eq!(conflicts[0].value, vec![2, 3]);
}
