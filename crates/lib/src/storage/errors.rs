//! Error types for storage conversion.
//!
//! A storage strategy fails when a logical value has no representation in its
//! storage form, or when a stored value cannot be turned back into a logical
//! one. These failures are value-level and always reach the caller.

use thiserror::Error;

/// Structured error types for storage conversion.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The strategy requires a value but none was present
    #[error("Missing value for required storage of {type_name}")]
    MissingValue { type_name: &'static str },

    /// The logical value could not be encoded into its storage form
    #[error("Storage encode failed: {reason}")]
    EncodeFailed { reason: String },

    /// The stored value could not be decoded into its logical form
    #[error("Storage decode failed: {reason}")]
    DecodeFailed { reason: String },
}

impl StorageError {
    /// Check if this error is a missing required value
    pub fn is_missing_value(&self) -> bool {
        matches!(self, StorageError::MissingValue { .. })
    }

    /// Check if this error came from encoding or decoding
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            StorageError::EncodeFailed { .. } | StorageError::DecodeFailed { .. }
        )
    }
}

// Conversion from StorageError to the main Error type
impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
