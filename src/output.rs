//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Table
//!
//! ```text
//! Rows 0x00-0xFF (256 bytes)
//!     ASCII          256 cells
//!     Windows-1252   256 cells, 5 undefined
//!     CP437          256 cells
//! Wrote reference.html
//! ```

use crate::config::TableConfig;
use crate::table::EncodingSummary;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn summary_line(summary: &EncodingSummary) -> String {
    let label = format!("{:<14}", summary.encoding.label());
    match summary.undefined {
        0 => format!("{}{} {} cells", indent(1), label, summary.cells),
        n => format!(
            "{}{} {} cells, {} undefined",
            indent(1),
            label,
            summary.cells,
            n
        ),
    }
}

/// Format what the `table` command rendered and where it went.
pub fn format_table_output(
    config: &TableConfig,
    summaries: &[EncodingSummary],
    written_to: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Rows 0x{:02X}-0x{:02X} ({} bytes)",
        config.first,
        config.last,
        config.row_count()
    ));
    lines.extend(summaries.iter().map(summary_line));
    lines.push(format!("Wrote {}", written_to.display()));
    lines
}

/// Print table output to stdout.
pub fn print_table_output(config: &TableConfig, summaries: &[EncodingSummary], written_to: &Path) {
    for line in format_table_output(config, summaries, written_to) {
        println!("{}", line);
    }
}
