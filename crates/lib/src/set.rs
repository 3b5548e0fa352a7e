//! A serializable set.
//!
//! [`SerialSet`] is a [`SerialMap`] with unit values whose export is a single
//! key sequence. Imports follow the same conflict policy as the map: slots
//! without a key and repeated keys are dropped and recorded.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Result;
use crate::map::{Buffers, Conflict, SerialMap};

/// The exported form of a [`SerialSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBuffer<T> {
    pub keys: Option<Vec<Option<T>>>,
}

impl<T> Default for SetBuffer<T> {
    fn default() -> Self {
        Self { keys: None }
    }
}

/// An ordered set that round-trips through one sequence of keys.
///
/// # Examples
///
/// ```
/// use serdict::{SerialSet, SetBuffer};
///
/// let mut buffer = SetBuffer {
///     keys: Some(vec![Some("x"), Some("y"), Some("x")]),
/// };
/// let mut set = SerialSet::new();
/// let conflicts = set.end_import(&mut buffer).unwrap();
///
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(set.len(), 2);
/// assert!(buffer.keys.is_none());
/// ```
pub struct SerialSet<T> {
    inner: SerialMap<T, ()>,
}

impl<T> SerialSet<T> {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self {
            inner: SerialMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.keys()
    }

    /// Remove every element and forget pending conflicts.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Slots dropped by the most recent import.
    pub fn conflicts(&self) -> &[Conflict<T, ()>] {
        self.inner.conflicts()
    }

    pub fn take_conflicts(&mut self) -> Vec<Conflict<T, ()>> {
        self.inner.take_conflicts()
    }
}

impl<T: Hash + Eq> SerialSet<T> {
    /// Add an element, returning whether it was new.
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// Remove an element, returning whether it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value).is_some()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(value)
    }

    /// Replace the whole contents with the elements of `source`.
    pub fn copy_from<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.copy_from(source.into_iter().map(|value| (value, ())));
    }
}

impl<T: Hash + Eq + Clone> SerialSet<T> {
    /// Flatten the elements into a fresh key sequence.
    pub fn begin_export(&self) -> Result<SetBuffer<T>> {
        let buffers = self.inner.begin_export()?;
        Ok(SetBuffer { keys: buffers.keys })
    }

    /// Rebuild the elements from `buffer` and leave it absent.
    pub fn end_import(&mut self, buffer: &mut SetBuffer<T>) -> Result<&[Conflict<T, ()>]> {
        let keys = buffer.keys.take();
        let values = keys.as_ref().map(|keys| vec![(); keys.len()]);
        let mut buffers = Buffers { keys, values };
        self.inner.end_import(&mut buffers)
    }
}

impl<T> Default for SerialSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SerialSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SerialSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq> PartialEq for SerialSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for SerialSet<T> {}

impl<T: Hash + Eq> Extend<T> for SerialSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|value| (value, ())));
    }
}

impl<T: Hash + Eq> FromIterator<T> for SerialSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> From<HashSet<T>> for SerialSet<T> {
    fn from(set: HashSet<T>) -> Self {
        set.into_iter().collect()
    }
}

impl<T> Serialize for SerialSet<T>
where
    T: Hash + Eq + Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let buffer = self.begin_export().map_err(serde::ser::Error::custom)?;
        buffer.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SerialSet<T>
where
    T: Hash + Eq + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut buffer = SetBuffer::<T>::deserialize(deserializer)?;
        let mut set = Self::new();
        set.end_import(&mut buffer)
            .map_err(serde::de::Error::custom)?;
        Ok(set)
    }
}
