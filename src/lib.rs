#![allow(clippy::write_with_newline)]

//! # rust-pdf
//!
//! Minimal PDF writer: turn plain text into a valid single-page PDF
//! (version 1.7 unless configured otherwise).
//!
//! ## Pipeline
//!
//! ```text
//! text ─▶ [layout::TextLayout] ─▶ [model::build_single_page] ─▶ [writer::PdfWriter] ─▶ bytes
//! ```
//!
//! - **Layout**: splits lines, wraps at spaces using standard-14 font
//!   metrics, truncates below the bottom margin
//! - **Model**: an arena of typed indirect objects linked by [`ObjectRef`]
//! - **Writer**: header, objects, cross-reference table with exact byte
//!   offsets, trailer
//!
//! Output is deterministic: the same text, size and configuration always
//! produce identical bytes.
//!
//! ## Quick Start
//!
//! ```
//! use rust_pdf::SimpleDocument;
//!
//! let pdf = SimpleDocument::build("Hello\nWorld", 18.0)?;
//! assert!(pdf.as_bytes().starts_with(b"%PDF-1.7"));
//! # Ok::<(), rust_pdf::Error>(())
//! ```
//!
//! A C interface lives in [`ffi`], declared in `include/rust_pdf.h`.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// PDF object syntax
pub mod object;

// Fonts and encoding
pub mod fonts;

// Text layout
pub mod layout;

// Object graph
pub mod model;

// Serialization
pub mod writer;

// High-level API
pub mod api;

// C ABI
pub mod ffi;

// Re-exports
pub use api::SimpleDocument;
pub use config::PdfConfig;
pub use error::{Error, Result};
pub use fonts::Standard14Font;
pub use layout::PageSize;
pub use model::{Document, DocumentInfo, PdfVersion};
pub use object::{Object, ObjectRef};

/// Commonly used types.
pub mod prelude {
    pub use crate::api::SimpleDocument;
    pub use crate::config::PdfConfig;
    pub use crate::error::{Error, Result};
    pub use crate::fonts::Standard14Font;
    pub use crate::layout::{PageSize, TextLayout};
    pub use crate::model::{Document, DocumentInfo, PdfObject, PdfVersion};
    pub use crate::writer::PdfWriter;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert_eq!(super::VERSION, "0.1.0");
    }
}
