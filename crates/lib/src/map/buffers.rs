//! The export buffer pair.
//!
//! [`Buffers`] is the only shape a [`SerialMap`](super::SerialMap) takes on the
//! far side of the serialization boundary: two parallel sequences where
//! `keys[i]` belongs to `values[i]`. Keys are optional because a host (or an
//! editor working on the buffers) may hand back a slot with no key in it.

use serde::{Deserialize, Serialize};

use super::errors::MapError;

/// Two parallel sequences holding a container's entries in storage form.
///
/// Both sequences are either absent or present together. The absent state is
/// what a container leaves behind after a successful import, so a later
/// export starts clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffers<K, St> {
    pub keys: Option<Vec<Option<K>>>,
    pub values: Option<Vec<St>>,
}

impl<K, St> Default for Buffers<K, St> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<K, St> Buffers<K, St> {
    /// Create present buffers from the two sequences.
    pub fn new(keys: Vec<Option<K>>, values: Vec<St>) -> Self {
        Self {
            keys: Some(keys),
            values: Some(values),
        }
    }

    /// Create absent buffers.
    pub fn absent() -> Self {
        Self {
            keys: None,
            values: None,
        }
    }

    /// Check whether both sequences are absent.
    pub fn is_absent(&self) -> bool {
        self.keys.is_none() && self.values.is_none()
    }

    /// Number of key slots, zero when absent.
    pub fn len(&self) -> usize {
        self.keys.as_ref().map_or(0, Vec::len)
    }

    /// Check whether there are no key slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the sequences out, leaving these buffers absent.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Check the pairing invariant.
    ///
    /// Returns `Ok(None)` for absent buffers and `Ok(Some(len))` for a
    /// consistent pair. A lone sequence or a length mismatch is an
    /// internal-consistency failure.
    pub fn validate(&self) -> Result<Option<usize>, MapError> {
        match (&self.keys, &self.values) {
            (None, None) => Ok(None),
            (Some(keys), Some(values)) if keys.len() == values.len() => Ok(Some(keys.len())),
            (Some(keys), Some(values)) => Err(MapError::BufferLengthMismatch {
                keys: keys.len(),
                values: values.len(),
            }),
            (keys, values) => Err(MapError::IncompleteBuffers {
                keys_present: keys.is_some(),
                values_present: values.is_some(),
            }),
        }
    }

    /// Insert a slot into both sequences at `index`, shifting later slots.
    ///
    /// Absent buffers are treated as empty.
    pub fn insert_at(&mut self, index: usize, key: Option<K>, stored: St) -> Result<(), MapError> {
        let len = self.validate()?.unwrap_or(0);
        if index > len {
            return Err(MapError::IndexOutOfBounds { index, len });
        }
        self.keys.get_or_insert_with(Vec::new).insert(index, key);
        self.values.get_or_insert_with(Vec::new).insert(index, stored);
        Ok(())
    }

    /// Append a slot to both sequences.
    pub fn push(&mut self, key: Option<K>, stored: St) -> Result<(), MapError> {
        let len = self.validate()?.unwrap_or(0);
        self.insert_at(len, key, stored)
    }

    /// Remove the slot at `index` from both sequences, shifting later slots.
    pub fn remove_at(&mut self, index: usize) -> Result<(Option<K>, St), MapError> {
        let len = self.validate()?.unwrap_or(0);
        match (&mut self.keys, &mut self.values) {
            (Some(keys), Some(values)) if index < len => {
                Ok((keys.remove(index), values.remove(index)))
            }
            _ => Err(MapError::IndexOutOfBounds { index, len }),
        }
    }

    /// Iterate over the paired slots in order.
    ///
    /// Yields nothing for absent buffers; a mismatched pair is cut to the
    /// shorter sequence.
    pub fn slots(&self) -> impl Iterator<Item = (Option<&K>, &St)> {
        let keys = self.keys.as_deref().unwrap_or_default();
        let values = self.values.as_deref().unwrap_or_default();
        keys.iter().map(Option::as_ref).zip(values.iter())
    }
}
