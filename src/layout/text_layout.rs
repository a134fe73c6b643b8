//! Plain-text line layout for a single page.
//!
//! Text is split on explicit line breaks, overflowing lines are wrapped at
//! spaces, and lines are placed top-down from the first baseline until the
//! bottom margin is reached. Anything below the bottom margin is dropped.

use crate::config::PdfConfig;
use crate::error::{Error, Result};
use crate::fonts::is_winansi_char;

/// Smallest accepted font size in points.
///
/// Sizes are written with five decimals, so anything smaller would be
/// written as `0`.
pub const MIN_FONT_SIZE: f64 = 1e-5;

/// A line of text and the baseline origin it is drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlacement {
    /// Line content, without line breaks
    pub text: String,
    /// Baseline x in points
    pub x: f64,
    /// Baseline y in points
    pub y: f64,
}

/// Output of [`TextLayout::layout`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Placed lines, top to bottom
    pub lines: Vec<LinePlacement>,
    /// Lines that did not fit above the bottom margin
    pub truncated: usize,
}

/// Text layout engine for one fixed-size page.
#[derive(Debug, Clone)]
pub struct TextLayout {
    config: PdfConfig,
}

impl TextLayout {
    /// Create a layout engine for the given page configuration.
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }

    /// The configuration lines are laid out against.
    pub fn config(&self) -> &PdfConfig {
        &self.config
    }

    /// Maximum number of lines that fit on the page at this font size.
    ///
    /// Returns 0 for sizes [`layout`](Self::layout) would reject. Saturates
    /// at `usize::MAX` when the leading is vanishingly small.
    pub fn capacity(&self, font_size: f64) -> usize {
        if !is_valid_font_size(font_size) {
            return 0;
        }
        self.fitting_lines(font_size, usize::MAX)
    }

    /// Number of baselines, at most `limit`, that sit on or above the bottom
    /// margin.
    fn fitting_lines(&self, font_size: f64, limit: usize) -> usize {
        let first = self.config.first_baseline(font_size);
        let bottom = self.config.margin_bottom;
        let leading = self.config.leading(font_size);
        if !(leading > 0.0) || !first.is_finite() || first < bottom {
            return 0;
        }

        // The closed form can be off by one under rounding; settle it against
        // the same predicate used for placement.
        let fits = |i: usize| first - (i as f64) * leading >= bottom;
        let span = ((first - bottom) / leading).floor();
        let mut n = if span.is_finite() && span < limit as f64 {
            (span as usize).saturating_add(1).min(limit)
        } else {
            limit
        };
        while n > 0 && !fits(n - 1) {
            n -= 1;
        }
        while n < limit && fits(n) {
            n += 1;
        }
        n
    }

    /// Wrap a single logical line to the usable width.
    ///
    /// A line that already fits is returned verbatim. Otherwise words are
    /// packed greedily; a word wider than the page gets a line of its own.
    pub fn wrap_line(&self, line: &str, font_size: f64) -> Vec<String> {
        let font = self.config.font;
        let max_width = self.config.usable_width();
        if font.text_width(line, font_size) <= max_width {
            return vec![line.to_string()];
        }

        let space_width = font.char_width(' ') * font_size / 1000.0;
        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_width = 0.0;

        for word in line.split_whitespace() {
            let word_width = font.text_width(word, font_size);

            if current_line.is_empty() {
                current_line = word.to_string();
                current_width = word_width;
            } else if current_width + space_width + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }

        // Whitespace-only overflow still occupies one (blank) line.
        if lines.is_empty() {
            lines.push(String::new());
        }

        lines
    }

    /// Lay out `text` at `font_size`.
    ///
    /// Fails with [`Error::InvalidFontSize`] for non-finite sizes or sizes
    /// below [`MIN_FONT_SIZE`], with [`Error::InvalidConfig`] for unusable
    /// page geometry, and with [`Error::Encoding`] for characters the font
    /// cannot encode. All checks run before any line is placed.
    pub fn layout(&self, text: &str, font_size: f64) -> Result<LayoutResult> {
        if !is_valid_font_size(font_size) {
            return Err(Error::InvalidFontSize(font_size));
        }
        self.config.validate()?;
        validate_encoding(text)?;

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let wrapped: Vec<String> = normalized
            .lines()
            .flat_map(|line| self.wrap_line(line, font_size))
            .collect();

        let total = wrapped.len();
        let capacity = self.fitting_lines(font_size, total);
        let x = self.config.margin_left;
        let first = self.config.first_baseline(font_size);
        let leading = self.config.leading(font_size);

        let lines: Vec<LinePlacement> = wrapped
            .into_iter()
            .take(capacity)
            .enumerate()
            .map(|(i, text)| LinePlacement {
                text,
                x,
                y: first - (i as f64) * leading,
            })
            .collect();
        let truncated = total - lines.len();

        if truncated > 0 {
            log::warn!(
                "{} of {} lines do not fit on the page at {}pt and were dropped",
                truncated,
                total,
                font_size
            );
        }
        log::debug!("Laid out {} of {} lines at {}pt", lines.len(), total, font_size);

        Ok(LayoutResult { lines, truncated })
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new(PdfConfig::default())
    }
}

fn is_valid_font_size(font_size: f64) -> bool {
    font_size.is_finite() && font_size >= MIN_FONT_SIZE
}

/// Reject any character the simple font encoding cannot carry.
fn validate_encoding(text: &str) -> Result<()> {
    for (position, ch) in text.chars().enumerate() {
        if ch != '\n' && ch != '\r' && !is_winansi_char(ch) {
            return Err(Error::Encoding { ch, position });
        }
    }
    Ok(())
}
