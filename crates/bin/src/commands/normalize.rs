//! Normalize command - rewrites a document so every slot survives import.

use crate::cli::NormalizeArgs;
use crate::document::{import, write_json};

/// Run the normalize command
pub fn run(args: &NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let map = import(&args.file)?;

    let buffers = if args.keep_conflicts {
        map.export_with_conflicts()?
    } else {
        map.begin_export()?
    };

    tracing::info!(
        entries = map.len(),
        dropped = map.conflicts().len(),
        "Normalized {}",
        args.file.display()
    );
    write_json(args.output.as_deref(), &buffers)
}
