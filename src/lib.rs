//! # Site Code
//!
//! HTML table cells describing how a byte reads under legacy text
//! interpretations, for code page reference tables on a static site.
//!
//! A byte can be read three ways: as an ASCII control code (`NUL`, `LF`,
//! `DEL`), through Windows-1252, or through CP437. Each reading becomes one
//! `<td>` that a page template drops into a table row:
//!
//! ```
//! use site_code::codepage::LegacyEncoding;
//! use site_code::render::{render_ascii_control, render_legacy_encoding};
//!
//! assert_eq!(
//!     render_ascii_control(0x0A),
//!     r#"<td class="smallcaps"><span title="Line Feed">LF</span></td>"#
//! );
//! assert_eq!(
//!     render_legacy_encoding(0x81, LegacyEncoding::Windows1252),
//!     r#"<td class="err"></td>"#
//! );
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`control`] | The 33-entry control-code table plus `DEL` |
//! | [`codepage`] | Encoding selectors and the Windows-1252 / CP437 decode tables |
//! | [`render`] | One byte + one encoding → one `<td>` |
//! | [`table`] | Whole reference tables as HTML or JSON |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Unassigned Bytes Are Cells, Not Errors
//!
//! Windows-1252 leaves five bytes unassigned. Decoding one yields
//! [`codepage::UndefinedCodePoint`], which the renderer turns into an empty
//! `<td class="err">` so the table shows a styled gap instead of failing.
//!
//! ## Maud For Markup
//!
//! Cells and tables are built with [Maud](https://maud.lambda.xyz/).
//! Attribute values are escaped automatically; numeric character references
//! go through `PreEscaped` since they are already markup.

pub mod codepage;
pub mod config;
pub mod control;
pub mod output;
pub mod render;
pub mod table;
