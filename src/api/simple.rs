//! One-call document creation from plain text.

use crate::config::PdfConfig;
use crate::error::Result;
use crate::layout::TextLayout;
use crate::model::{build_single_page, Document};
use bytes::Bytes;
use std::fs;
use std::path::Path;

/// A finished single-page text document and its serialized bytes.
///
/// The buffer is produced once by [`SimpleDocument::build`] and never
/// changes afterwards; [`SimpleDocument::as_bytes`] returns the same bytes
/// on every call.
#[derive(Debug, Clone)]
pub struct SimpleDocument {
    document: Document,
    bytes: Bytes,
    line_count: usize,
    truncated_lines: usize,
}

impl SimpleDocument {
    /// Lay out `text` at `font_size` on an A4 page and serialize it.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_pdf::SimpleDocument;
    ///
    /// let doc = SimpleDocument::build("Hello\nWorld", 18.0)?;
    /// assert!(doc.as_bytes().starts_with(b"%PDF-1.7"));
    /// # Ok::<(), rust_pdf::Error>(())
    /// ```
    pub fn build(text: &str, font_size: f64) -> Result<Self> {
        Self::build_with_config(text, font_size, &PdfConfig::default())
    }

    /// Like [`SimpleDocument::build`], with explicit page geometry, font, version and
    /// document information.
    pub fn build_with_config(text: &str, font_size: f64, config: &PdfConfig) -> Result<Self> {
        let layout = TextLayout::new(config.clone()).layout(text, font_size)?;
        let document = build_single_page(&layout, font_size, config)?;
        let bytes = Bytes::from(document.serialize()?);

        log::debug!(
            "Created {}-byte document with {} lines ({} truncated)",
            bytes.len(),
            layout.lines.len(),
            layout.truncated
        );

        Ok(Self {
            document,
            bytes,
            line_count: layout.lines.len(),
            truncated_lines: layout.truncated,
        })
    }

    /// Serialized PDF bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialized PDF bytes as a cheaply cloneable buffer.
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Length of the serialized PDF in bytes. Always non-zero.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; kept for API symmetry with [`SimpleDocument::len`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The object graph the bytes were written from.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Lines placed on the page.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Lines dropped because they fell below the bottom margin.
    pub fn truncated_lines(&self) -> usize {
        self.truncated_lines
    }

    /// Write the PDF to `path`, creating or truncating the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)?;
        log::debug!("Saved {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }

    /// Consume the document, keeping only the bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_build_hello_world() {
        let doc = SimpleDocument::build("Hello\nWorld", 18.0).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.truncated_lines(), 0);
        assert!(!doc.is_empty());
        assert_eq!(doc.len(), doc.as_bytes().len());
    }

    #[test]
    fn test_bytes_are_stable() {
        let doc = SimpleDocument::build("stable", 12.0).unwrap();
        let first = doc.as_bytes().to_vec();
        assert_eq!(doc.as_bytes(), first.as_slice());
        assert_eq!(doc.bytes(), doc.clone().into_bytes());
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            SimpleDocument::build("ok", 0.0),
            Err(Error::InvalidFontSize(_))
        ));
        assert!(matches!(
            SimpleDocument::build("\u{1F600}", 12.0),
            Err(Error::Encoding { position: 0, .. })
        ));
    }

    #[test]
    fn test_handles_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimpleDocument>();
    }
}
