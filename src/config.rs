//! Configuration for simple document creation.

use crate::error::{Error, Result};
use crate::fonts::Standard14Font;
use crate::layout::PageSize;
use crate::model::{DocumentInfo, PdfVersion};

/// Largest page side accepted, in points (200 inches).
pub const MAX_PAGE_DIMENSION: f64 = 14_400.0;

/// Page geometry and typography used when building a single-page text document.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfConfig {
    /// Page size
    pub page_size: PageSize,
    /// Top margin in points
    pub margin_top: f64,
    /// Right margin in points
    pub margin_right: f64,
    /// Bottom margin in points
    pub margin_bottom: f64,
    /// Left margin in points
    pub margin_left: f64,
    /// Leading as a multiple of the font size
    pub line_height: f64,
    /// Font used for all text
    pub font: Standard14Font,
    /// PDF version written in the header
    pub version: PdfVersion,
    /// Document information; written as `/Info` only when a field is set
    pub info: DocumentInfo,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_top: 72.0,    // 1 inch
            margin_right: 72.0,  // 1 inch
            margin_bottom: 72.0, // 1 inch
            margin_left: 72.0,   // 1 inch
            line_height: 1.2,
            font: Standard14Font::Helvetica,
            version: PdfVersion::default(),
            info: DocumentInfo::default(),
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set all four margins (top, right, bottom, left).
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    /// Set the same margin on every side.
    pub fn with_margin(self, margin: f64) -> Self {
        self.with_margins(margin, margin, margin, margin)
    }

    /// Set the leading multiplier.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: Standard14Font) -> Self {
        self.font = font;
        self
    }

    /// Set the PDF header version.
    pub fn with_version(mut self, version: PdfVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the document information.
    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    /// Check that the geometry can be written.
    ///
    /// Page sides must be finite, positive and at most
    /// [`MAX_PAGE_DIMENSION`]; margins finite and non-negative; the line
    /// height finite and positive.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.page_size.dimensions();
        for (label, side) in [("width", width), ("height", height)] {
            if !side.is_finite() || side <= 0.0 || side > MAX_PAGE_DIMENSION {
                return Err(Error::InvalidConfig(format!(
                    "page {} {} is outside (0, {}]",
                    label, side, MAX_PAGE_DIMENSION
                )));
            }
        }

        let margins = [
            ("top", self.margin_top),
            ("right", self.margin_right),
            ("bottom", self.margin_bottom),
            ("left", self.margin_left),
        ];
        for (label, margin) in margins {
            if !margin.is_finite() || margin < 0.0 {
                return Err(Error::InvalidConfig(format!("{} margin {} is invalid", label, margin)));
            }
        }

        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line height {} must be finite and positive",
                self.line_height
            )));
        }
        Ok(())
    }

    /// Horizontal space available for a line, in points.
    pub fn usable_width(&self) -> f64 {
        let (width, _) = self.page_size.dimensions();
        (width - self.margin_left - self.margin_right).max(0.0)
    }

    /// Baseline of the first line for the given font size.
    pub fn first_baseline(&self, font_size: f64) -> f64 {
        let (_, height) = self.page_size.dimensions();
        height - self.margin_top - font_size
    }

    /// Distance between consecutive baselines.
    pub fn leading(&self, font_size: f64) -> f64 {
        font_size * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PdfConfig::default();
        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.margin_left, 72.0);
        assert_eq!(config.margin_bottom, 72.0);
        assert_eq!(config.line_height, 1.2);
        assert_eq!(config.font, Standard14Font::Helvetica);
        assert_eq!(config.version, PdfVersion::V1_7);
        assert!(config.info.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_geometry() {
        let config = PdfConfig::default();
        assert_eq!(config.usable_width(), 595.0 - 144.0);
        assert_eq!(config.first_baseline(18.0), 842.0 - 72.0 - 18.0);
        assert!((config.leading(18.0) - 21.6).abs() < 1e-9);
    }

    #[test]
    fn test_builders() {
        let config = PdfConfig::new()
            .with_page_size(PageSize::Letter)
            .with_margin(36.0)
            .with_line_height(1.5)
            .with_font(Standard14Font::Courier)
            .with_version(PdfVersion::V1_4)
            .with_info(DocumentInfo::new().title("Notes"));
        assert_eq!(config.usable_width(), 612.0 - 72.0);
        assert_eq!(config.margin_top, 36.0);
        assert_eq!(config.line_height, 1.5);
        assert_eq!(config.font, Standard14Font::Courier);
        assert_eq!(config.version, PdfVersion::V1_4);
        assert_eq!(config.info.title.as_deref(), Some("Notes"));
    }

    #[test]
    fn test_usable_width_never_negative() {
        let config = PdfConfig::new().with_page_size(PageSize::Custom(100.0, 100.0));
        assert_eq!(config.usable_width(), 0.0);
    }

    #[test]
    fn test_rejects_non_finite_page() {
        for size in [
            PageSize::Custom(f64::NAN, 842.0),
            PageSize::Custom(595.0, f64::INFINITY),
            PageSize::Custom(0.0, 842.0),
            PageSize::Custom(-10.0, 842.0),
            PageSize::Custom(595.0, 1e9),
        ] {
            let config = PdfConfig::new().with_page_size(size);
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))), "{:?}", size);
        }
        let largest = PageSize::Custom(MAX_PAGE_DIMENSION, MAX_PAGE_DIMENSION);
        assert!(PdfConfig::new().with_page_size(largest).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_margins_and_line_height() {
        assert!(PdfConfig::new().with_margin(f64::NAN).validate().is_err());
        assert!(PdfConfig::new().with_margins(10.0, -1.0, 10.0, 10.0).validate().is_err());
        assert!(PdfConfig::new().with_line_height(0.0).validate().is_err());
        assert!(PdfConfig::new().with_line_height(f64::INFINITY).validate().is_err());
        assert!(PdfConfig::new().with_margin(0.0).validate().is_ok());
    }
}
