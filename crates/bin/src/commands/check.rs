//! Check command - imports a document and reports dropped entries.

use crate::cli::CheckArgs;
use crate::document::{Document, JsonMap, read_json};
use crate::output::{OutputFormat, conflict_rows, print_table};

/// Run the check command
pub fn run(args: &CheckArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut buffers: Document = read_json(&args.file)?;
    let slots = buffers.len();

    let mut map = JsonMap::new();
    map.end_import(&mut buffers)?;
    let conflicts = map.conflicts();

    match format {
        OutputFormat::Human => {
            println!("Slots:       {slots}");
            println!("Entries:     {}", map.len());
            println!("Conflicts:   {}", conflicts.len());
            if !conflicts.is_empty() {
                println!();
                print_table(&["SLOT", "KEY", "REASON"], &conflict_rows(conflicts));
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "slots": slots,
                "entries": map.len(),
                "conflicts": conflicts,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    if args.strict && !conflicts.is_empty() {
        return Err(format!("{} entries would be dropped", conflicts.len()).into());
    }
    Ok(())
}
