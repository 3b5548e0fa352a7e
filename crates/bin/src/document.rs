//! Reading and writing JSON documents.

use std::fs;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serdict::{Buffers, SerialMap};

/// A flattened document as it sits on disk.
pub type Document = Buffers<String, serde_json::Value>;

/// The in-memory form of a document.
pub type JsonMap = SerialMap<String, serde_json::Value>;

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
    tracing::debug!("Read {}", path.display());
    Ok(value)
}

/// Write pretty JSON to `output`, or to stdout when no path is given
pub fn write_json<T: Serialize>(
    output: Option<&Path>,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Import a document into a fresh map
pub fn import(path: &Path) -> Result<JsonMap, Box<dyn std::error::Error>> {
    let mut buffers: Document = read_json(path)?;
    let mut map = JsonMap::new();
    map.end_import(&mut buffers)?;
    Ok(map)
}
