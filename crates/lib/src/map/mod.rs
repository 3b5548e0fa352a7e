//! The serializable ordered map.
//!
//! [`SerialMap`] behaves as an ordinary associative map at runtime and crosses
//! a serialization boundary as a pair of parallel sequences ([`Buffers`]).
//!
//! # Round trip
//!
//! - [`SerialMap::begin_export`] flattens the entries into fresh buffers,
//!   passing every value through the storage strategy `S`.
//! - [`SerialMap::end_import`] rebuilds the entries from buffers, loading each
//!   value back through `S`, and leaves the buffers absent.
//!
//! ```
//! use serdict::SerialMap;
//!
//! let mut map: SerialMap<String, u32> = SerialMap::new();
//! map.insert("a".to_string(), 1);
//! map.insert("b".to_string(), 2);
//!
//! let mut buffers = map.begin_export().unwrap();
//! let mut restored: SerialMap<String, u32> = SerialMap::new();
//! restored.end_import(&mut buffers).unwrap();
//!
//! assert_eq!(restored, map);
//! assert!(buffers.is_absent());
//! ```
//!
//! # Conflicts
//!
//! Buffers edited between export and import may hold a slot without a key or
//! repeat a key. Import never fails for these: the first slot holding a key
//! wins, every other offending slot is dropped, and the dropped pairs are kept
//! on the container as [`Conflict`]s until the next import, `clear` or
//! `copy_from`. [`SerialMap::export_with_conflicts`] puts them back at their
//! original slots so an editor can offer them again.
//!
//! # Ordering
//!
//! Entries keep insertion order and are index-addressable. Updating an
//! existing key keeps its position; removals shift later entries down.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexMap;
use tracing::{debug, error, warn};

use crate::Result;
use crate::storage::{ArrayCarrier, Identity, ListCarrier, Storage};

mod buffers;
mod conflict;
pub mod errors;
mod persistence;

pub use buffers::Buffers;
pub use conflict::{Conflict, ConflictKind};
pub use errors::MapError;

/// Map whose values are variable-length lists.
pub type ListMap<K, T> = SerialMap<K, Vec<T>, ListCarrier>;

/// Map whose values are fixed-length arrays.
pub type ArrayMap<K, T> = SerialMap<K, Box<[T]>, ArrayCarrier>;

/// An ordered, key-unique map that round-trips through a pair of sequences.
///
/// `S` is the [`Storage`] strategy applied to values on export and import.
pub struct SerialMap<K, V, S = Identity> {
    entries: IndexMap<K, V>,
    /// Pairs dropped by the most recent import
    conflicts: Vec<Conflict<K, V>>,
    strategy: PhantomData<fn() -> S>,
}

impl<K, V, S> SerialMap<K, V, S> {
    /// Create a new empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            conflicts: Vec::new(),
            strategy: PhantomData,
        }
    }

    /// Create a new empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            conflicts: Vec::new(),
            strategy: PhantomData,
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry and forget pending conflicts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.conflicts.clear();
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterate over values in order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Iterate mutably over values in order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    /// Get the entry at `index`.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    /// Get the entry at `index` with a mutable value.
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.entries.get_index_mut(index)
    }

    /// Pairs dropped by the most recent import.
    pub fn conflicts(&self) -> &[Conflict<K, V>] {
        &self.conflicts
    }

    /// Move the pending conflicts out of the map.
    pub fn take_conflicts(&mut self) -> Vec<Conflict<K, V>> {
        std::mem::take(&mut self.conflicts)
    }

    /// Get a reference to the internal IndexMap.
    pub fn as_index_map(&self) -> &IndexMap<K, V> {
        &self.entries
    }
}

impl<K: Hash + Eq, V, S> SerialMap<K, V, S> {
    /// Insert or update an entry, returning the previous value.
    ///
    /// An updated key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Get a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Get a mutable value by key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Check if a key is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Get the position of a key.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_index_of(key)
    }

    /// Remove an entry by key, keeping the order of the rest.
    ///
    /// Removing an absent key is a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }

    /// Insert a new entry at `index`, shifting later entries up.
    ///
    /// `index` may equal `len()` to append. Fails if the key is already
    /// present anywhere in the map.
    pub fn insert_at(&mut self, index: usize, key: K, value: V) -> Result<()> {
        if let Some(existing) = self.entries.get_index_of(&key) {
            return Err(MapError::KeyExists { index: existing }.into());
        }
        let len = self.entries.len();
        if index > len {
            return Err(MapError::IndexOutOfBounds { index, len }.into());
        }
        self.entries.shift_insert(index, key, value);
        Ok(())
    }

    /// Remove the entry at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Result<(K, V)> {
        let len = self.entries.len();
        self.entries
            .shift_remove_index(index)
            .ok_or_else(|| MapError::IndexOutOfBounds { index, len }.into())
    }

    /// Replace the whole contents with the entries of `source`.
    ///
    /// Later duplicates in `source` overwrite earlier ones.
    pub fn copy_from<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.clear();
        self.extend(source);
    }
}

impl<K, V, S> SerialMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: Storage<V>,
{
    /// Flatten the entries into freshly allocated buffers.
    ///
    /// Every value passes through [`Storage::store`]; a storage failure is
    /// returned as is and no buffers are produced.
    pub fn begin_export(&self) -> Result<Buffers<K, S::Stored>> {
        let mut keys = Vec::with_capacity(self.entries.len());
        let mut values = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            keys.push(Some(key.clone()));
            values.push(S::store(value)?);
        }
        debug!(entries = keys.len(), "Exported map buffers");
        Ok(Buffers::new(keys, values))
    }

    /// Export, then put every pending conflict back at its original slot.
    ///
    /// Importing the result again drops the same pairs and rebuilds the same
    /// entries.
    pub fn export_with_conflicts(&self) -> Result<Buffers<K, S::Stored>> {
        let mut buffers = self.begin_export()?;
        for conflict in &self.conflicts {
            let stored = S::store(&conflict.value)?;
            let index = conflict.index.min(buffers.len());
            buffers.insert_at(index, conflict.key.clone(), stored)?;
        }
        Ok(buffers)
    }

    /// Rebuild the entries from `buffers` and leave them absent.
    ///
    /// Absent buffers are a no-op. A lone sequence or a length mismatch is
    /// rejected before anything changes. Otherwise every value is loaded
    /// through [`Storage::load`] into a fresh set of entries; slots without a
    /// key, and slots repeating an earlier key, are dropped and recorded as
    /// conflicts. The container is only replaced once every slot has loaded,
    /// so a storage failure leaves it untouched (the buffers are consumed
    /// either way).
    ///
    /// Returns the conflicts recorded by this import.
    pub fn end_import(&mut self, buffers: &mut Buffers<K, S::Stored>) -> Result<&[Conflict<K, V>]> {
        if let Err(err) = buffers.validate() {
            error!(%err, "Refusing to import inconsistent buffers");
            return Err(err.into());
        }
        let (Some(keys), Some(values)) = (buffers.keys.take(), buffers.values.take()) else {
            return Ok(Default::default());
        };

        let mut entries = IndexMap::with_capacity(keys.len());
        // Buffer slot each kept entry came from
        let mut origins = Vec::with_capacity(keys.len());
        let mut conflicts = Vec::new();

        for (index, (key, stored)) in keys.into_iter().zip(values).enumerate() {
            let value = S::load(stored)?;
            match key {
                None => conflicts.push(Conflict::null_key(index, value)),
                Some(key) => match entries.get_index_of(&key) {
                    Some(position) => {
                        conflicts.push(Conflict::duplicate(index, origins[position], key, value))
                    }
                    None => {
                        entries.insert(key, value);
                        origins.push(index);
                    }
                },
            }
        }

        for conflict in &conflicts {
            warn!(index = conflict.index, kind = %conflict.kind, "Dropped conflicting entry during import");
        }
        debug!(
            entries = entries.len(),
            conflicts = conflicts.len(),
            "Imported map buffers"
        );

        self.entries = entries;
        self.conflicts = conflicts;
        Ok(&self.conflicts)
    }
}

impl<K, V, S> Default for SerialMap<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, S> Clone for SerialMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            conflicts: self.conflicts.clone(),
            strategy: PhantomData,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for SerialMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialMap")
            .field("entries", &self.entries)
            .field("conflicts", &self.conflicts)
            .finish()
    }
}

/// Order-independent comparison of entries; pending conflicts are ignored.
impl<K: Hash + Eq, V: PartialEq, S> PartialEq for SerialMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq, S> Eq for SerialMap<K, V, S> {}

impl<K: Hash + Eq, V, S> Extend<(K, V)> for SerialMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, S> FromIterator<(K, V)> for SerialMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S> From<HashMap<K, V>> for SerialMap<K, V, S> {
    fn from(data: HashMap<K, V>) -> Self {
        data.into_iter().collect()
    }
}

impl<'a, K, V, S> IntoIterator for &'a SerialMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V, S> IntoIterator for SerialMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
