//! Byte interpretations and single-byte legacy code pages.
//!
//! Three ways of reading a byte are supported:
//!
//! | Selector        | Meaning                                              |
//! |-----------------|------------------------------------------------------|
//! | `ascii-control` | control-code mnemonic for `0x00..=0x20` and `0x7F`   |
//! | `windows-1252`  | Windows Western European; five bytes are unassigned  |
//! | `cp437`         | IBM PC code page 437; every byte is assigned         |
//!
//! Both legacy code pages read `0x00..=0x7F` as the identical code point.
//! CP437's graphical glyphs for the control range are a display convention
//! of the IBM PC display adapter and are not part of the decode mapping here.

use oem_cp::code_table::DECODING_TABLE_CP437;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A byte has no character in the selected code page.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("byte 0x{byte:02X} is not defined in {encoding}")]
pub struct UndefinedCodePoint {
    pub byte: u8,
    pub encoding: LegacyEncoding,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown encoding '{0}' (expected ascii-control, windows-1252 or cp437)")]
pub struct UnknownEncoding(pub String);

/// Any of the supported byte interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "ascii-control")]
    AsciiControl,
    #[serde(rename = "windows-1252")]
    Windows1252,
    #[serde(rename = "cp437")]
    Cp437,
}

/// The 8-bit code pages that map bytes to Unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyEncoding {
    #[serde(rename = "windows-1252")]
    Windows1252,
    #[serde(rename = "cp437")]
    Cp437,
}

impl Encoding {
    pub const ALL: [Encoding; 3] = [Encoding::AsciiControl, Encoding::Windows1252, Encoding::Cp437];

    /// Selector name used on the command line and in `config.toml`.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::AsciiControl => "ascii-control",
            Encoding::Windows1252 => "windows-1252",
            Encoding::Cp437 => "cp437",
        }
    }

    /// Column heading for reference tables.
    pub fn label(self) -> &'static str {
        match self {
            Encoding::AsciiControl => "ASCII",
            Encoding::Windows1252 => "Windows-1252",
            Encoding::Cp437 => "CP437",
        }
    }

    /// The code page behind this selector, or `None` for `ascii-control`.
    pub fn legacy(self) -> Option<LegacyEncoding> {
        match self {
            Encoding::AsciiControl => None,
            Encoding::Windows1252 => Some(LegacyEncoding::Windows1252),
            Encoding::Cp437 => Some(LegacyEncoding::Cp437),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| UnknownEncoding(s.to_string()))
    }
}

impl From<LegacyEncoding> for Encoding {
    fn from(legacy: LegacyEncoding) -> Self {
        match legacy {
            LegacyEncoding::Windows1252 => Encoding::Windows1252,
            LegacyEncoding::Cp437 => Encoding::Cp437,
        }
    }
}

impl LegacyEncoding {
    /// Decode a single byte to its Unicode character.
    pub fn decode(self, byte: u8) -> Result<char, UndefinedCodePoint> {
        let decoded = match self {
            LegacyEncoding::Windows1252 => decode_windows_1252(byte),
            LegacyEncoding::Cp437 => Some(decode_cp437(byte)),
        };
        decoded.ok_or(UndefinedCodePoint {
            byte,
            encoding: self,
        })
    }
}

impl fmt::Display for LegacyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Encoding::from(*self).name())
    }
}

fn decode_windows_1252(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => WINDOWS_1252_C1[(byte - 0x80) as usize],
        _ => Some(char::from(byte)),
    }
}

fn decode_cp437(byte: u8) -> char {
    match byte {
        0x80..=0xFF => DECODING_TABLE_CP437[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

/// Windows-1252 `0x80..=0x9F`. Everything else matches ISO-8859-1.
static WINDOWS_1252_C1: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 euro sign
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None, // 0x90
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Selector names
    // =========================================================================

    #[test]
    fn parses_selector_names() {
        assert_eq!("ascii-control".parse(), Ok(Encoding::AsciiControl));
        assert_eq!("windows-1252".parse(), Ok(Encoding::Windows1252));
        assert_eq!("cp437".parse(), Ok(Encoding::Cp437));
    }

    #[test]
    fn parse_is_exact_like_config_names() {
        assert!(" cp437 ".parse::<Encoding>().is_err());
        assert!("CP437".parse::<Encoding>().is_err());
        assert!("Windows-1252".parse::<Encoding>().is_err());
    }

    #[test]
    fn parse_agrees_with_serde_names() {
        for enc in Encoding::ALL {
            let quoted = format!("\"{}\"", enc.name());
            let from_json: Encoding = serde_json::from_str(&quoted).unwrap();
            assert_eq!(enc.name().parse(), Ok(from_json));
        }
    }

    #[test]
    fn rejects_unknown_selector() {
        let err = "latin-1".parse::<Encoding>().unwrap_err();
        assert_eq!(err, UnknownEncoding("latin-1".to_string()));
        assert!(err.to_string().contains("latin-1"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for enc in Encoding::ALL {
            assert_eq!(enc.to_string().parse(), Ok(enc));
        }
    }

    #[test]
    fn only_ascii_control_lacks_a_code_page() {
        assert_eq!(Encoding::AsciiControl.legacy(), None);
        assert_eq!(Encoding::Windows1252.legacy(), Some(LegacyEncoding::Windows1252));
        assert_eq!(Encoding::Cp437.legacy(), Some(LegacyEncoding::Cp437));
    }

    // =========================================================================
    // Windows-1252
    // =========================================================================

    #[test]
    fn windows_1252_euro_sign() {
        assert_eq!(LegacyEncoding::Windows1252.decode(0x80), Ok('€'));
    }

    #[test]
    fn windows_1252_unassigned_bytes() {
        let undefined: Vec<u8> = (0..=255u8)
            .filter(|&b| LegacyEncoding::Windows1252.decode(b).is_err())
            .collect();
        assert_eq!(undefined, vec![0x81, 0x8D, 0x8F, 0x90, 0x9D]);
    }

    #[test]
    fn windows_1252_undefined_error_names_byte() {
        let err = LegacyEncoding::Windows1252.decode(0x81).unwrap_err();
        assert_eq!(err.byte, 0x81);
        assert_eq!(err.encoding, LegacyEncoding::Windows1252);
        assert_eq!(err.to_string(), "byte 0x81 is not defined in windows-1252");
    }

    #[test]
    fn windows_1252_latin1_ranges_are_identity() {
        for b in (0x00..=0x7Fu8).chain(0xA0..=0xFF) {
            assert_eq!(LegacyEncoding::Windows1252.decode(b), Ok(char::from(b)));
        }
    }

    #[test]
    fn windows_1252_smart_quotes() {
        assert_eq!(LegacyEncoding::Windows1252.decode(0x93), Ok('\u{201C}'));
        assert_eq!(LegacyEncoding::Windows1252.decode(0x94), Ok('\u{201D}'));
        assert_eq!(LegacyEncoding::Windows1252.decode(0x9F), Ok('Ÿ'));
    }

    // =========================================================================
    // CP437
    // =========================================================================

    #[test]
    fn cp437_defines_every_byte() {
        for b in 0..=255u8 {
            assert!(LegacyEncoding::Cp437.decode(b).is_ok(), "0x{:02X}", b);
        }
    }

    #[test]
    fn cp437_low_half_is_identity() {
        assert_eq!(LegacyEncoding::Cp437.decode(0x00), Ok('\0'));
        assert_eq!(LegacyEncoding::Cp437.decode(b'A'), Ok('A'));
        assert_eq!(LegacyEncoding::Cp437.decode(0x7F), Ok('\u{7F}'));
    }

    #[test]
    fn cp437_high_half_landmarks() {
        assert_eq!(LegacyEncoding::Cp437.decode(0x80), Ok('Ç'));
        assert_eq!(LegacyEncoding::Cp437.decode(0xB0), Ok('░'));
        assert_eq!(LegacyEncoding::Cp437.decode(0xC9), Ok('╔'));
        assert_eq!(LegacyEncoding::Cp437.decode(0xDB), Ok('█'));
        assert_eq!(LegacyEncoding::Cp437.decode(0xE1), Ok('ß'));
        assert_eq!(LegacyEncoding::Cp437.decode(0xFE), Ok('■'));
        assert_eq!(LegacyEncoding::Cp437.decode(0xFF), Ok('\u{A0}'));
    }

    #[test]
    fn cp437_high_half_is_injective() {
        let mut seen = std::collections::HashSet::new();
        for c in DECODING_TABLE_CP437.iter() {
            assert!(seen.insert(c), "duplicate {:?}", c);
        }
    }
}
