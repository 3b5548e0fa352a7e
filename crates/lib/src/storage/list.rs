//! Carrier strategies for sequence-valued entries.
//!
//! A host that stores exactly one value per slot cannot hold a
//! variable-length sequence in a value slot directly. These strategies wrap
//! the sequence in a one-field [`ListStorage`] record so each entry still
//! occupies a single slot.

use serde::{Deserialize, Serialize};

use super::{Storage, StorageError};

/// One-field record holding an entry's sequence while it is exported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListStorage<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// Carries `Vec<T>` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCarrier;

impl<T: Clone> Storage<Vec<T>> for ListCarrier {
    type Stored = ListStorage<T>;

    fn store(value: &Vec<T>) -> Result<ListStorage<T>, StorageError> {
        Ok(ListStorage {
            items: value.clone(),
        })
    }

    fn load(stored: ListStorage<T>) -> Result<Vec<T>, StorageError> {
        Ok(stored.items)
    }
}

/// Carries fixed-length `Box<[T]>` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayCarrier;

impl<T: Clone> Storage<Box<[T]>> for ArrayCarrier {
    type Stored = ListStorage<T>;

    fn store(value: &Box<[T]>) -> Result<ListStorage<T>, StorageError> {
        Ok(ListStorage {
            items: value.to_vec(),
        })
    }

    fn load(stored: ListStorage<T>) -> Result<Box<[T]>, StorageError> {
        Ok(stored.items.into_boxed_slice())
    }
}
