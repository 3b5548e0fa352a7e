//! Storage-conversion strategies.
//!
//! A [`SerialMap`](crate::map::SerialMap) never places its logical values
//! directly into the exported value sequence. Each value passes through a
//! [`Storage`] strategy, chosen as a type parameter, which converts it into the
//! form the host serializer can hold and back again.
//!
//! # Strategies
//!
//! - [`Identity`] - the value is its own storage form
//! - [`ListCarrier`] / [`ArrayCarrier`] - a variable-length sequence carried in
//!   a single-field [`ListStorage`] record
//! - [`Wrapped`] - any value carried in a single-field [`Wrapper`] record
//! - [`Required`] - an `Option<V>` that must be `Some` to be stored
//! - [`JsonText`] - any serde type stored as JSON text
//!
//! Every strategy must be lossless: `load(store(v))` is observably equal to `v`.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub mod errors;
mod list;

pub use errors::StorageError;
pub use list::{ArrayCarrier, ListCarrier, ListStorage};

/// Conversion between a logical value and its storage representation.
///
/// Strategies are zero-sized marker types; the conversion functions are
/// associated functions so the strategy is fixed at compile time.
///
/// # Examples
///
/// ```
/// use serdict::storage::{ListCarrier, ListStorage, Storage};
///
/// let stored: ListStorage<u8> = ListCarrier::store(&vec![1, 2, 3]).unwrap();
/// assert_eq!(stored.items, vec![1, 2, 3]);
/// assert_eq!(ListCarrier::load(stored).unwrap(), vec![1, 2, 3]);
/// ```
pub trait Storage<V> {
    /// The form a value takes inside the exported value sequence.
    type Stored;

    /// Convert a logical value into a freshly created storage value.
    fn store(value: &V) -> Result<Self::Stored, StorageError>;

    /// Consume a storage value and rebuild the logical value.
    fn load(stored: Self::Stored) -> Result<V, StorageError>;
}

/// Stores values as themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<V: Clone> Storage<V> for Identity {
    type Stored = V;

    fn store(value: &V) -> Result<V, StorageError> {
        Ok(value.clone())
    }

    fn load(stored: V) -> Result<V, StorageError> {
        Ok(stored)
    }
}

/// Single-field carrier record produced by [`Wrapped`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper<V> {
    pub value: V,
}

/// Stores each value inside its own [`Wrapper`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wrapped;

impl<V: Clone> Storage<V> for Wrapped {
    type Stored = Wrapper<V>;

    fn store(value: &V) -> Result<Wrapper<V>, StorageError> {
        Ok(Wrapper {
            value: value.clone(),
        })
    }

    fn load(stored: Wrapper<V>) -> Result<V, StorageError> {
        Ok(stored.value)
    }
}

/// Stores an `Option<V>` as a bare `V`, refusing `None`.
///
/// Use this when the storage slot cannot represent absence. Storing `None`
/// fails with [`StorageError::MissingValue`] rather than silently dropping
/// the entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

impl<V: Clone> Storage<Option<V>> for Required {
    type Stored = V;

    fn store(value: &Option<V>) -> Result<V, StorageError> {
        value.clone().ok_or(StorageError::MissingValue {
            type_name: std::any::type_name::<V>(),
        })
    }

    fn load(stored: V) -> Result<Option<V>, StorageError> {
        Ok(Some(stored))
    }
}

/// Stores any serde type as a JSON string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonText;

impl<V: Serialize + DeserializeOwned> Storage<V> for JsonText {
    type Stored = String;

    fn store(value: &V) -> Result<String, StorageError> {
        serde_json::to_string(value).map_err(|e| StorageError::EncodeFailed {
            reason: e.to_string(),
        })
    }

    fn load(stored: String) -> Result<V, StorageError> {
        serde_json::from_str(&stored).map_err(|e| StorageError::DecodeFailed {
            reason: format!("invalid JSON text '{stored}': {e}"),
        })
    }
}
