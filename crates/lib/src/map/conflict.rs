//! Conflict records produced by import.
//!
//! When the key sequence handed to an import contains a missing key or a key
//! seen earlier in the same sequence, the entry is dropped and a [`Conflict`]
//! keeps the dropped pair so it can be offered back to the user.

use std::fmt;

use serde::Serialize;

/// Why an entry was dropped during import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ConflictKind {
    /// The slot had no key
    NullKey,
    /// The key was already taken by the slot at `first_index`
    DuplicateKey { first_index: usize },
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::NullKey => write!(f, "null key"),
            ConflictKind::DuplicateKey { first_index } => {
                write!(f, "duplicate of key at index {first_index}")
            }
        }
    }
}

/// A (key, value) pair dropped during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict<K, V> {
    /// Slot index in the imported buffers
    pub index: usize,
    pub key: Option<K>,
    pub value: V,
    #[serde(flatten)]
    pub kind: ConflictKind,
}

impl<K, V> Conflict<K, V> {
    pub(crate) fn null_key(index: usize, value: V) -> Self {
        Self {
            index,
            key: None,
            value,
            kind: ConflictKind::NullKey,
        }
    }

    pub(crate) fn duplicate(index: usize, first_index: usize, key: K, value: V) -> Self {
        Self {
            index,
            key: Some(key),
            value,
            kind: ConflictKind::DuplicateKey { first_index },
        }
    }

    pub fn is_null_key(&self) -> bool {
        matches!(self.kind, ConflictKind::NullKey)
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind, ConflictKind::DuplicateKey { .. })
    }

    /// Index of the slot that kept the key, for duplicate conflicts.
    pub fn other_index(&self) -> Option<usize> {
        match self.kind {
            ConflictKind::DuplicateKey { first_index } => Some(first_index),
            ConflictKind::NullKey => None,
        }
    }

    /// Split into the dropped pair.
    pub fn into_pair(self) -> (Option<K>, V) {
        (self.key, self.value)
    }
}

impl<K, V> fmt::Display for Conflict<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry at index {} dropped: {}", self.index, self.kind)
    }
}
