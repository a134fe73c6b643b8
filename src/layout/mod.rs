//! Text layout for single-page documents.
//!
//! Converts plain text and a font size into positioned lines on a fixed page:
//! - explicit line breaks split lines
//! - lines wider than the usable width wrap at spaces
//! - lines below the bottom margin are truncated (no pagination)

mod page_size;
mod text_layout;

pub use page_size::PageSize;
pub use text_layout::{LayoutResult, LinePlacement, TextLayout, MIN_FONT_SIZE};
