//! Error types for container operations.
//!
//! Key-level conflicts found during import are not errors; they are recorded
//! as [`Conflict`](super::Conflict)s. The errors here are the failures that
//! leave the container untouched.

use thiserror::Error;

/// Structured error types for container and buffer operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The key and value sequences handed to an import differ in length
    #[error("Buffer length mismatch: {keys} keys, {values} values")]
    BufferLengthMismatch { keys: usize, values: usize },

    /// Only one of the two sequences was present at import
    #[error(
        "Incomplete buffers: keys present = {keys_present}, values present = {values_present}"
    )]
    IncompleteBuffers {
        keys_present: bool,
        values_present: bool,
    },

    /// A positional operation addressed an index outside the container
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A positional insert used a key that is already held at `index`
    #[error("Key already present at index {index}")]
    KeyExists { index: usize },
}

impl MapError {
    /// Check if this error is an internal-consistency failure at import
    pub fn is_consistency_error(&self) -> bool {
        matches!(
            self,
            MapError::BufferLengthMismatch { .. } | MapError::IncompleteBuffers { .. }
        )
    }

    /// Check if this error came from a positional operation
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            MapError::IndexOutOfBounds { .. } | MapError::KeyExists { .. }
        )
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
