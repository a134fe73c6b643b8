//! High-level PDF API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rust_pdf::api::SimpleDocument;
//!
//! let pdf = SimpleDocument::build("Hello, World!", 12.0)?;
//! pdf.save("output.pdf")?;
//! # Ok::<(), rust_pdf::Error>(())
//! ```
//!
//! Page size, margins, line height and font come from [`PdfConfig`]:
//!
//! ```no_run
//! use rust_pdf::api::SimpleDocument;
//! use rust_pdf::{PageSize, PdfConfig, Standard14Font};
//!
//! let config = PdfConfig::new()
//!     .with_page_size(PageSize::Letter)
//!     .with_margin(54.0)
//!     .with_font(Standard14Font::Courier);
//! let pdf = SimpleDocument::build_with_config("monospaced", 10.0, &config)?;
//! # Ok::<(), rust_pdf::Error>(())
//! ```
//!
//! [`PdfConfig`]: crate::config::PdfConfig

mod simple;

pub use simple::SimpleDocument;
