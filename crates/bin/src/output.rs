//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use serdict::Conflict;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }
}

/// One table row per dropped entry: slot, key, reason.
pub fn conflict_rows(conflicts: &[Conflict<String, serde_json::Value>]) -> Vec<Vec<String>> {
    conflicts
        .iter()
        .map(|conflict| {
            vec![
                conflict.index.to_string(),
                conflict.key.as_deref().unwrap_or("<null>").to_string(),
                conflict.kind.to_string(),
            ]
        })
        .collect()
}
