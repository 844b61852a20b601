//! Full reference tables.
//!
//! A table has one row per byte in the configured range and one column per
//! configured encoding. Each row starts with a `<th>` holding the byte in hex,
//! followed by the cells from [`crate::render`] verbatim:
//!
//! ```text
//! <table class="codepage">
//!   <caption>...</caption>
//!   <thead><tr><th>Byte</th><th>ASCII</th><th>Windows-1252</th><th>CP437</th></tr></thead>
//!   <tbody>
//!     <tr><th>0x00</th><td class="smallcaps">...</td><td>...</td><td>...</td></tr>
//!     ...
//!   </tbody>
//! </table>
//! ```
//!
//! Rows are built once as data ([`TableRow`]) so the same pass feeds the HTML
//! output, the JSON dump, and the CLI summary.

use crate::codepage::Encoding;
use crate::config::TableConfig;
use crate::render;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;

/// One encoding's reading of one byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub encoding: Encoding,
    /// Decoded code point. `None` for control-code mnemonics and for bytes
    /// the code page leaves unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_point: Option<u32>,
    pub undefined: bool,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub byte: u8,
    pub cells: Vec<Cell>,
}

/// Per-encoding totals over a set of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSummary {
    pub encoding: Encoding,
    pub cells: usize,
    pub undefined: usize,
}

fn build_cell(byte: u8, encoding: Encoding) -> Cell {
    let (code_point, undefined) = match encoding.legacy() {
        Some(legacy) => match legacy.decode(byte) {
            Ok(c) => (Some(u32::from(c)), false),
            Err(_) => (None, true),
        },
        None if crate::control::control_code(byte).is_some() => (None, false),
        None => (Some(u32::from(byte)), false),
    };
    Cell {
        encoding,
        code_point,
        undefined,
        html: render::render_cell(byte, encoding),
    }
}

/// Build every row the config asks for, in byte order.
pub fn build_rows(config: &TableConfig) -> Vec<TableRow> {
    (config.first..=config.last)
        .map(|byte| TableRow {
            byte,
            cells: config
                .encodings
                .iter()
                .map(|&enc| build_cell(byte, enc))
                .collect(),
        })
        .collect()
}

/// Render rows as an HTML `<table>` fragment.
pub fn render_table(config: &TableConfig, rows: &[TableRow]) -> Markup {
    html! {
        table class="codepage" {
            @if let Some(caption) = &config.caption {
                caption { (caption) }
            }
            thead {
                tr {
                    th { "Byte" }
                    @for enc in &config.encodings {
                        th { (enc.label()) }
                    }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        th { (format!("0x{:02X}", row.byte)) }
                        @for cell in &row.cells {
                            (PreEscaped(cell.html.as_str()))
                        }
                    }
                }
            }
        }
    }
}

const DOCUMENT_CSS: &str = "\
table.codepage { border-collapse: collapse; font-family: monospace; }
table.codepage th, table.codepage td { border: 1px solid #ccc; padding: 0.2em 0.5em; text-align: center; }
td.smallcaps { font-variant: small-caps; text-transform: lowercase; }
td.err { background: #f4cccc; }
";

/// Render the configured output: a bare table, or a full document when
/// `standalone` is set.
pub fn render_document(config: &TableConfig, rows: &[TableRow]) -> String {
    let table = render_table(config, rows);
    if !config.standalone {
        return table.into_string();
    }
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (config.title) }
                style { (PreEscaped(DOCUMENT_CSS)) }
            }
            body {
                (table)
            }
        }
    }
    .into_string()
}

pub fn rows_to_json(rows: &[TableRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// Count cells and undefined cells per encoding, in column order.
pub fn summarize(config: &TableConfig, rows: &[TableRow]) -> Vec<EncodingSummary> {
    config
        .encodings
        .iter()
        .map(|&encoding| {
            let cells = rows
                .iter()
                .flat_map(|r| &r.cells)
                .filter(|c| c.encoding == encoding);
            let (total, undefined) =
                cells.fold((0, 0), |(t, u), c| (t + 1, u + usize::from(c.undefined)));
            EncodingSummary {
                encoding,
                cells: total,
                undefined,
            }
        })
        .collect()
}
