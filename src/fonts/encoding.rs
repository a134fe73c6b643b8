//! WinAnsi encoding for standard-14 text fonts.
//!
//! Standard fonts are not embedded, so show-text operands must be single
//! bytes in the font's simple encoding. Every font written by this crate
//! declares `/Encoding /WinAnsiEncoding` (Windows-1252).

use crate::error::{Error, Result};

/// WinAnsi (Windows-1252) encoding table.
///
/// Maps Unicode codepoints to WinAnsi byte values. Printable ASCII and the
/// Latin-1 range map directly; 0x80-0x9F hold the typographic specials.
pub fn unicode_to_winansi(codepoint: u32) -> Option<u8> {
    if (0x20..0x7F).contains(&codepoint) || (0xA0..=0xFF).contains(&codepoint) {
        return Some(codepoint as u8);
    }

    // Special WinAnsi characters in 0x80-0x9F range
    match codepoint {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation mark
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation mark
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}

/// Check if a character can be encoded in WinAnsi.
///
/// Tab is accepted and rendered as a space.
pub fn is_winansi_char(ch: char) -> bool {
    ch == '\t' || unicode_to_winansi(ch as u32).is_some()
}

/// Encode one line of text (no line breaks) as WinAnsi bytes.
///
/// An [`Error::Encoding`] position is the character index within `text`.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        if ch == '\t' {
            out.push(b' ');
            continue;
        }
        match unicode_to_winansi(ch as u32) {
            Some(b) => out.push(b),
            None => {
                return Err(Error::Encoding { ch, position: i })
            },
        }
    }
    Ok(out)
}
