//! Font support for PDF generation.
//!
//! Only non-embedded standard-14 text fonts are written. Their metrics drive
//! line wrapping, and their WinAnsi encoding decides which characters a
//! document can carry.

mod encoding;
mod standard14;

pub use encoding::{encode_win_ansi, is_winansi_char, unicode_to_winansi};
pub use standard14::Standard14Font;
