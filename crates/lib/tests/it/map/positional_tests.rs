use crate::helpers::*;

#[test]
fn test_remove_at_shifts_later_entries() {
    let mut map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    let removed = map.remove_at(1).unwrap();
    assert_eq!(removed, ("b".to_string(), 2));
    assert_eq!(entries(&map), vec![("a", 1), ("c", 3)]);
    assert_eq!(map.index_of("c"), Some(1));
}

#[test]
fn test_remove_at_out_of_range() {
    let mut map = map_of(&[("a", 1)]);
    let err = map.remove_at(1).unwrap_err();
    assert!(err.is_index_error());
    assert_eq!(map.len(), 1);
}

#[test]
fn test_insert_at_shifts_later_entries() {
    let mut map = map_of(&[("a", 1), ("c", 3)]);
    map.insert_at(1, "b".to_string(), 2).unwrap();
    map.insert_at(3, "d".to_string(), 4).unwrap();
    map.insert_at(0, "start".to_string(), 0).unwrap();
    assert_eq!(
        entries(&map),
        vec![("start", 0), ("a", 1), ("b", 2), ("c", 3), ("d", 4)]
    );
}

#[test]
fn test_insert_at_rejects_existing_key() {
    let mut map = map_of(&[("a", 1), ("b", 2)]);
    let err = map.insert_at(0, "b".to_string(), 9).unwrap_err();
    assert!(err.is_index_error());
    assert!(err.to_string().contains("index 1"));
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2)]);
}

#[test]
fn test_insert_at_rejects_index_past_end() {
    let mut map = map_of(&[("a", 1)]);
    let err = map.insert_at(2, "b".to_string(), 2).unwrap_err();
    assert!(err.is_index_error());
    assert!(!err.is_consistency_error());
    assert_eq!(map.len(), 1);
}

#[test]
fn test_get_index_and_mutation() {
    let mut map = map_of(&[("a", 1), ("b", 2)]);
    assert_eq!(map.get_index(1), Some((&"b".to_string(), &2)));
    assert_eq!(map.get_index(2), None);

    if let Some((_, value)) = map.get_index_mut(0) {
        *value = 100;
    }
    assert_eq!(map.get("a"), Some(&100));
}

#[test]
fn test_positional_edits_survive_round_trip() {
    let mut map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    map.remove_at(0).unwrap();
    map.insert_at(1, "mid".to_string(), 9).unwrap();

    let mut buffers = map.begin_export().unwrap();
    let mut restored = StrMap::new();
    restored.end_import(&mut buffers).unwrap();
    assert_eq!(entries(&restored), vec![("b", 2), ("mid", 9), ("c", 3)]);
}

#[test]
fn test_buffer_level_edits_then_import() {
    let map = map_of(&[("a", 1), ("b", 2)]);
    let mut buffers = map.begin_export().unwrap();

    // An editor adds a blank row at the end, then deletes the first row
    buffers.push(None, 0).unwrap();
    buffers.remove_at(0).unwrap();

    let mut restored = StrMap::new();
    let conflicts = restored.end_import(&mut buffers).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].is_null_key());
    assert_eq!(entries(&restored), vec![("b", 2)]);
}
