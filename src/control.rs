//! ASCII control-code names.
//!
//! Bytes `0x00..=0x20` each have a short mnemonic (`NUL`, `LF`, `SP`, ...)
//! and a readable name. `0x7F` is the lone control code above the space and
//! is kept outside the table as [`DELETE`].

/// A control-code mnemonic and its readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCode {
    /// Two to four uppercase letters, e.g. `"ESC"`.
    pub mnemonic: &'static str,
    /// Title-cased name, e.g. `"Escape"`.
    pub name: &'static str,
}

const fn code(mnemonic: &'static str, name: &'static str) -> ControlCode {
    ControlCode { mnemonic, name }
}

/// Highest byte value covered by [`CONTROL_CODES`].
pub const LAST_TABLE_BYTE: u8 = 0x20;

/// Control codes indexed by byte value, `0x00` through `0x20`.
pub static CONTROL_CODES: [ControlCode; 33] = [
    code("NUL", "Null"),
    code("SOH", "Start of Heading"),
    code("STX", "Start of Text"),
    code("ETX", "End of Text"),
    code("EOT", "End of Transmission"),
    code("ENQ", "Enquiry"),
    code("ACK", "Acknowledge"),
    code("BEL", "Bell"),
    code("BS", "Backspace"),
    code("HT", "Horizontal Tabulation"),
    code("LF", "Line Feed"),
    code("VT", "Vertical Tabulation"),
    code("FF", "Form Feed"),
    code("CR", "Carriage Return"),
    code("SO", "Shift Out"),
    code("SI", "Shift In"),
    code("DLE", "Data Link Escape"),
    code("DC1", "Device Control One"),
    code("DC2", "Device Control Two"),
    code("DC3", "Device Control Three"),
    code("DC4", "Device Control Four"),
    code("NAK", "Negative Acknowledge"),
    code("SYN", "Synchronous Idle"),
    code("ETB", "End of Transmission Block"),
    code("CAN", "Cancel"),
    code("EM", "End of medium"),
    code("SUB", "Substitute"),
    code("ESC", "Escape"),
    code("FS", "File Separator"),
    code("GS", "Group Separator"),
    code("RS", "Record Separator"),
    code("US", "Unit Separator"),
    code("SP", "Space"),
];

/// The control code at `0x7F`.
pub const DELETE: ControlCode = code("DEL", "Delete");

/// Look up the control code for a byte, if it has one.
///
/// Returns `None` for printable bytes `0x21..=0x7E` and for everything
/// above `0x7F`.
pub fn control_code(byte: u8) -> Option<&'static ControlCode> {
    match byte {
        0x7F => Some(&DELETE),
        b if b <= LAST_TABLE_BYTE => Some(&CONTROL_CODES[b as usize]),
        _ => None,
    }
}
