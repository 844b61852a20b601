//! Reference table configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! render every byte under all three interpretations; a user file overrides
//! just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! encodings = ["ascii-control", "windows-1252", "cp437"]  # Columns, in order
//! first = 0                       # First byte row (0-255)
//! last = 255                      # Last byte row (0-255)
//! # caption = "Byte values"       # Table caption (omitted when unset)
//! standalone = false              # Wrap the table in a full HTML document
//! title = "Code page reference"   # Document title when standalone
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only the upper half, CP437 only
//! encodings = ["cp437"]
//! first = 128
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::codepage::Encoding;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Reference table configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Columns to render, left to right.
    pub encodings: Vec<Encoding>,
    /// First byte row, inclusive.
    pub first: u8,
    /// Last byte row, inclusive.
    pub last: u8,
    /// Optional `<caption>` text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Emit a complete HTML document instead of a bare `<table>`.
    pub standalone: bool,
    /// `<title>` of the standalone document.
    pub title: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            encodings: Encoding::ALL.to_vec(),
            first: 0x00,
            last: 0xFF,
            caption: None,
            standalone: false,
            title: "Code page reference".to_string(),
        }
    }
}

impl TableConfig {
    /// Validate cross-field constraints the types can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.encodings.is_empty() {
            return Err(ConfigError::Validation(
                "encodings must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for enc in &self.encodings {
            if !seen.insert(enc) {
                return Err(ConfigError::Validation(format!(
                    "encodings lists {} more than once",
                    enc
                )));
            }
        }
        if self.first > self.last {
            return Err(ConfigError::Validation(format!(
                "first ({}) must not be greater than last ({})",
                self.first, self.last
            )));
        }
        Ok(())
    }

    /// Number of byte rows the table will have.
    pub fn row_count(&self) -> usize {
        usize::from(self.last) - usize::from(self.first) + 1
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(TableConfig::default()).expect("default config must serialize")
}

/// Overlay the top-level keys of `overlay` onto `base`.
///
/// The config is flat, so each key in overlay replaces the base value whole
/// (an `encodings` list replaces the default list rather than extending it).
/// Keys in base that are not in overlay are preserved. A non-table overlay
/// replaces base entirely and fails deserialization downstream.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            base_table.extend(overlay_table);
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<TableConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: TableConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Parse config text on top of stock defaults.
pub fn parse_config(content: &str) -> Result<TableConfig, ConfigError> {
    let overlay: toml::Value = toml::from_str(content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Load the config file at `path`, or stock defaults when no path is given.
///
/// A path that was given but can't be read is an error, not a fallback.
pub fn load_config(path: Option<&Path>) -> Result<TableConfig, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => resolve_config(stock_defaults_value(), None),
    }
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Code Page Reference Table
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Columns to render, left to right. Each may appear once.
#   ascii-control  control-code mnemonics for 0x00-0x20 and 0x7F
#   windows-1252   Windows Western European
#   cp437          IBM PC code page 437
encodings = ["ascii-control", "windows-1252", "cp437"]

# Byte rows to include, inclusive (0-255).
first = 0
last = 255

# Table caption. Omitted from the output when unset.
# caption = "Byte values under legacy encodings"

# Wrap the table in a complete HTML document with minimal styling for the
# .smallcaps and .err cell classes. Leave off when embedding in a page.
standalone = false

# Document <title> when standalone.
title = "Code page reference"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = TableConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.row_count(), 256);
        assert_eq!(config.encodings, Encoding::ALL.to_vec());
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config = parse_config(stock_config_toml()).unwrap();
        assert_eq!(config, TableConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config("first = 128\n").unwrap();
        assert_eq!(config.first, 128);
        assert_eq!(config.last, 255);
        assert_eq!(config.encodings.len(), 3);
        assert!(!config.standalone);
        assert_eq!(config.row_count(), 128);
    }

    #[test]
    fn encodings_list_replaces_default_list() {
        let config = parse_config(r#"encodings = ["cp437", "ascii-control"]"#).unwrap();
        assert_eq!(config.encodings, vec![Encoding::Cp437, Encoding::AsciiControl]);
    }

    #[test]
    fn caption_and_standalone() {
        let config = parse_config(
            r#"
caption = "Bytes"
standalone = true
title = "Reference"
"#,
        )
        .unwrap();
        assert_eq!(config.caption.as_deref(), Some("Bytes"));
        assert!(config.standalone);
        assert_eq!(config.title, "Reference");
    }

    #[test]
    fn unknown_key_rejected() {
        let err = parse_config("colour = \"red\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn unknown_encoding_rejected() {
        let err = parse_config(r#"encodings = ["latin-1"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn encoding_names_are_case_sensitive() {
        let err = parse_config(r#"encodings = ["CP437"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn byte_out_of_range_rejected() {
        let err = parse_config("last = 256\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn empty_encodings_rejected() {
        let err = parse_config("encodings = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("empty")));
    }

    #[test]
    fn duplicate_encoding_rejected() {
        let err = parse_config(r#"encodings = ["cp437", "cp437"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("cp437")));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = parse_config("first = 10\nlast = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn single_row_range_allowed() {
        let config = parse_config("first = 65\nlast = 65\n").unwrap();
        assert_eq!(config.row_count(), 1);
    }

    #[test]
    fn merge_toml_overlays_user_keys_on_stock_defaults() {
        let overlay: toml::Value =
            toml::from_str("encodings = [\"cp437\"]\nlast = 127\n").unwrap();
        let merged = merge_toml(stock_defaults_value(), overlay);
        assert_eq!(merged["first"].as_integer(), Some(0));
        assert_eq!(merged["last"].as_integer(), Some(127));
        assert_eq!(merged["encodings"].as_array().map(Vec::len), Some(1));
        assert_eq!(merged["title"].as_str(), Some("Code page reference"));

        let config: TableConfig = merged.try_into().unwrap();
        assert_eq!(config.encodings, vec![Encoding::Cp437]);
        assert_eq!(config.row_count(), 128);
    }

    #[test]
    fn load_config_without_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), TableConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "encodings = [\"windows-1252\"]").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.encodings, vec![Encoding::Windows1252]);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
