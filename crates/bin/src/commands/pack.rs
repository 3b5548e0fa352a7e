//! Pack and unpack commands - convert between plain objects and documents.

use serde_json::{Map, Value};

use crate::cli::{PackArgs, UnpackArgs};
use crate::document::{JsonMap, import, read_json, write_json};

/// Run the pack command
pub fn pack(args: &PackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let object: Map<String, Value> = read_json(&args.file)?;

    let mut map = JsonMap::with_capacity(object.len());
    map.copy_from(object);

    write_json(args.output.as_deref(), &map.begin_export()?)
}

/// Run the unpack command
pub fn unpack(args: &UnpackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let map = import(&args.file)?;
    for conflict in map.conflicts() {
        tracing::warn!("Not unpacked: {conflict}");
    }

    let object: Map<String, Value> = map.into_iter().collect();
    write_json(args.output.as_deref(), &object)
}
