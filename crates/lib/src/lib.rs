//!
//! Serdict: ordered maps and sets that survive a serializer which only knows
//! about flat sequences.
//!
//! ## Core Concepts
//!
//! * **SerialMap (`map::SerialMap`)**: An ordered, key-unique map. At runtime it is an ordinary associative container; at the serialization boundary it flattens itself into two parallel sequences and rebuilds itself from them.
//! * **Buffers (`map::Buffers`)**: The exported form of a map: `keys[i]` pairs with `values[i]`. Buffers are transient; a successful import leaves them absent.
//! * **Storage strategies (`storage::Storage`)**: A compile-time choice of how each value is represented inside the exported value sequence:
//!     * **Identity (`storage::Identity`)**: Values stored as themselves.
//!     * **ListCarrier / ArrayCarrier (`storage::ListCarrier`)**: Sequence values carried in a one-field record.
//!     * **Wrapped, Required, JsonText**: Single-field wrappers, non-optional storage of `Option`, and JSON text for foreign types.
//! * **Conflicts (`map::Conflict`)**: Entries dropped while importing tampered buffers (a slot with no key, or a repeated key). The first slot holding a key wins; dropped pairs stay on the container so they can be offered back.
//! * **SerialSet (`set::SerialSet`)**: The set specialization, exported as a single key sequence.

pub mod map;
pub mod set;
pub mod storage;

pub use map::{ArrayMap, Buffers, Conflict, ConflictKind, ListMap, SerialMap};
pub use set::{SerialSet, SetBuffer};

/// Result type used throughout the Serdict library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Serdict library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured container errors from the map module
    #[error(transparent)]
    Map(map::MapError),

    /// Structured storage-conversion errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
            Error::Storage(_) => "storage",
        }
    }

    /// Check if this error is an internal-consistency failure at import.
    pub fn is_consistency_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_consistency_error(),
            _ => false,
        }
    }

    /// Check if this error came from a positional operation.
    pub fn is_index_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_index_error(),
            _ => false,
        }
    }

    /// Check if this error is a storage-conversion failure.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
