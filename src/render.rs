//! HTML table cells for a single byte.
//!
//! Every function here is total over `u8` and returns exactly one `<td>`
//! element. Cells use two CSS classes the surrounding page is expected to
//! style:
//!
//! - `smallcaps`: control-code mnemonics (`NUL`, `ESC`, `DEL`)
//! - `err`: the byte has no character in the selected code page
//!
//! ```text
//! render_ascii_control(0x0A)              <td class="smallcaps"><span title="Line Feed">LF</span></td>
//! render_ascii_control(0x41)              <td>&#65;</td>
//! render_legacy_encoding(0x80, cp1252)    <td><span title="U+20ac">&#8364;</span></td>
//! render_legacy_encoding(0x81, cp1252)    <td class="err"></td>
//! ```

use crate::codepage::{Encoding, LegacyEncoding};
use crate::control::control_code;
use maud::{Markup, PreEscaped, html};

/// Decimal numeric character reference, e.g. `&#65;`.
fn char_ref(code_point: u32) -> PreEscaped<String> {
    PreEscaped(format!("&#{};", code_point))
}

/// Cell for a byte read as ASCII: the control-code mnemonic with its name as
/// a tooltip, or the byte's own code point for everything else.
pub fn ascii_control_cell(byte: u8) -> Markup {
    match control_code(byte) {
        Some(code) => html! {
            td class="smallcaps" { span title=(code.name) { (code.mnemonic) } }
        },
        None => html! {
            td { (char_ref(u32::from(byte))) }
        },
    }
}

/// Cell for a byte decoded through a code page, or an empty `err` cell when
/// the byte is unassigned.
pub fn legacy_encoding_cell(byte: u8, encoding: LegacyEncoding) -> Markup {
    match encoding.decode(byte) {
        Ok(c) => {
            let code_point = u32::from(c);
            html! {
                td { span title=(format!("U+{:04x}", code_point)) { (char_ref(code_point)) } }
            }
        }
        Err(_) => html! { td class="err" {} },
    }
}

/// Cell for any supported interpretation.
pub fn cell(byte: u8, encoding: Encoding) -> Markup {
    match encoding.legacy() {
        Some(legacy) => legacy_encoding_cell(byte, legacy),
        None => ascii_control_cell(byte),
    }
}

pub fn render_ascii_control(byte: u8) -> String {
    ascii_control_cell(byte).into_string()
}

pub fn render_legacy_encoding(byte: u8, encoding: LegacyEncoding) -> String {
    legacy_encoding_cell(byte, encoding).into_string()
}

pub fn render_cell(byte: u8, encoding: Encoding) -> String {
    cell(byte, encoding).into_string()
}
