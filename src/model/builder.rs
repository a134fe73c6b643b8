//! Single-page document assembly.

use super::{Document, Page, PdfObject};
use crate::config::PdfConfig;
use crate::error::{Error, Result};
use crate::fonts::encode_win_ansi;
use crate::layout::{LayoutResult, MIN_FONT_SIZE};
use crate::writer::ContentStream;

/// Resource name the page uses for its only font.
pub const FONT_RESOURCE_NAME: &str = "F1";

/// Build the object graph for one page of laid-out text.
///
/// Identifiers are allocated in a fixed order (catalog 1, page tree 2,
/// page 3, font 4, content stream 5) so identical input always yields an
/// identical graph. A non-empty `config.info` adds an `/Info` dictionary as
/// object 6. Blank lines keep their slot but draw nothing.
///
/// Placed lines may have been wrapped, so an [`Error::Encoding`] raised here
/// reports the character position within the offending line.
pub fn build_single_page(layout: &LayoutResult, font_size: f64, config: &PdfConfig) -> Result<Document> {
    if !font_size.is_finite() || font_size < MIN_FONT_SIZE {
        return Err(Error::InvalidFontSize(font_size));
    }
    config.validate()?;
    let mut doc = Document::from_config(config);

    let catalog_id = doc.alloc_id();
    let pages_id = doc.alloc_id();
    let page_id = doc.alloc_id();
    let font_id = doc.alloc_id();
    let content_id = doc.alloc_id();

    let mut content = ContentStream::new();
    for line in layout.lines.iter().filter(|line| !line.text.is_empty()) {
        let encoded = encode_win_ansi(&line.text)?;
        content.show_text_at(FONT_RESOURCE_NAME, font_size, line.x, line.y, encoded);
    }

    doc.insert(catalog_id, PdfObject::Catalog { pages: pages_id })?;
    doc.insert(pages_id, PdfObject::PageTree { kids: vec![page_id] })?;
    doc.insert(
        page_id,
        PdfObject::Page(Page {
            parent: pages_id,
            media_box: config.page_size.media_box(),
            fonts: vec![(FONT_RESOURCE_NAME.to_string(), font_id)],
            contents: content_id,
        }),
    )?;
    doc.insert(font_id, PdfObject::Font(config.font))?;
    doc.insert(content_id, PdfObject::ContentStream(content))?;
    doc.set_root(catalog_id);

    if !config.info.is_empty() {
        let info_id = doc.add(PdfObject::Info(config.info.clone()));
        doc.set_info(info_id);
    }

    log::debug!(
        "Built single-page document: {} objects, {} drawn lines",
        doc.object_count(),
        layout.lines.iter().filter(|l| !l.text.is_empty()).count()
    );

    Ok(doc)
}
