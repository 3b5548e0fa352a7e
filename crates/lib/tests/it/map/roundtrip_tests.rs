use crate::helpers::*;
use serdict::{Buffers, SerialMap};

#[test]
fn test_export_produces_paired_sequences() {
    let map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    let buffers = map.begin_export().unwrap();

    assert_eq!(buffers.validate().unwrap(), Some(3));
    assert_eq!(
        buffers.keys,
        Some(vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("c".to_string())
        ])
    );
    assert_eq!(buffers.values, Some(vec![1, 2, 3]));
}

#[test]
fn test_export_does_not_change_map() {
    let map = map_of(&[("a", 1)]);
    let first = map.begin_export().unwrap();
    let second = map.begin_export().unwrap();
    assert_eq!(first, second);
    assert_eq!(entries(&map), vec![("a", 1)]);
}

#[test]
fn test_round_trip_reproduces_map() {
    let original = map_of(&[("x", 10), ("y", -4), ("z", 0)]);
    let mut buffers = original.begin_export().unwrap();

    let mut restored = StrMap::new();
    let conflicts = restored.end_import(&mut buffers).unwrap();
    assert!(conflicts.is_empty());

    assert_eq!(restored, original);
    assert_eq!(entries(&restored), entries(&original));
}

#[test]
fn test_import_discards_buffers() {
    let original = map_of(&[("a", 1)]);
    let mut buffers = original.begin_export().unwrap();

    let mut restored = StrMap::new();
    restored.end_import(&mut buffers).unwrap();
    assert!(buffers.is_absent());
    assert!(buffers.keys.is_none());
    assert!(buffers.values.is_none());
}

#[test]
fn test_import_replaces_previous_contents() {
    let mut map = map_of(&[("old", 1), ("a", 99)]);
    let mut buffers = buffers_of(&[Some("a"), Some("b")], &[1, 2]);
    map.end_import(&mut buffers).unwrap();
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2)]);
}

#[test]
fn test_absent_buffers_are_noop() {
    let mut map = map_of(&[("keep", 1)]);
    let mut buffers: Buffers<String, i32> = Buffers::absent();
    let conflicts = map.end_import(&mut buffers).unwrap();
    assert!(conflicts.is_empty());
    assert_eq!(entries(&map), vec![("keep", 1)]);
}

#[test]
fn test_empty_map_round_trip() {
    let map = StrMap::new();
    let mut buffers = map.begin_export().unwrap();
    assert_eq!(buffers.validate().unwrap(), Some(0));

    let mut restored = map_of(&[("stale", 1)]);
    restored.end_import(&mut buffers).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn test_mismatched_lengths_rejected() {
    let mut map = map_of(&[("keep", 7)]);
    let mut buffers = buffers_of(&[Some("a"), Some("b")], &[1]);

    let err = map.end_import(&mut buffers).unwrap_err();
    assert!(err.is_consistency_error());
    assert_eq!(err.module(), "map");

    // Nothing applied, nothing consumed
    assert_eq!(entries(&map), vec![("keep", 7)]);
    assert!(map.conflicts().is_empty());
    assert_eq!(buffers.len(), 2);
}

#[test]
fn test_lone_sequence_rejected() {
    let mut map = map_of(&[("keep", 7)]);
    let mut buffers: Buffers<String, i32> = Buffers {
        keys: None,
        values: Some(vec![1]),
    };

    let err = map.end_import(&mut buffers).unwrap_err();
    assert!(err.is_consistency_error());
    assert_eq!(entries(&map), vec![("keep", 7)]);
}

#[test]
fn test_serde_round_trip_through_json() {
    let original = map_of(&[("b", 2), ("a", 1)]);
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, r#"{"keys":["b","a"],"values":[2,1]}"#);

    let restored: StrMap = serde_json::from_str(&json).unwrap();
    assert_eq!(entries(&restored), vec![("b", 2), ("a", 1)]);
}

#[test]
fn test_serde_mismatch_is_an_error() {
    let result: Result<SerialMap<String, i32>, _> =
        serde_json::from_str(r#"{"keys":["a","b"],"values":[1]}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Buffer length mismatch"));
}
