//! Serde integration for [`SerialMap`].
//!
//! A map never serializes its entries directly. Serialization exports the map
//! and writes the resulting [`Buffers`] (`{"keys": [...], "values": [...]}`);
//! deserialization reads buffers and imports them. Conflicts found while
//! importing do not fail deserialization; they stay on the map, see
//! [`SerialMap::conflicts`].

use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Buffers, SerialMap};
use crate::storage::Storage;

impl<K, V, S> Serialize for SerialMap<K, V, S>
where
    K: Hash + Eq + Clone + Serialize,
    S: Storage<V>,
    S::Stored: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let buffers = self.begin_export().map_err(serde::ser::Error::custom)?;
        buffers.serialize(serializer)
    }
}

impl<'de, K, V, S> Deserialize<'de> for SerialMap<K, V, S>
where
    K: Hash + Eq + Clone + Deserialize<'de>,
    S: Storage<V>,
    S::Stored: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut buffers = Buffers::<K, S::Stored>::deserialize(deserializer)?;
        let mut map = Self::new();
        map.end_import(&mut buffers)
            .map_err(serde::de::Error::custom)?;
        Ok(map)
    }
}
