//! PDF writing module for generating PDF files.
//!
//! ## Architecture
//!
//! ```text
//! Document (model)
//!     ↓
//! [PdfWriter] (validates the graph, assembles header, body, xref, trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! [`ContentStream`] holds page drawing operators and their encoded bytes.

mod content_stream;
mod object_serializer;
mod pdf_writer;
mod xref;

pub use content_stream::{ContentStream, ContentStreamOp};
pub use object_serializer::{escape_literal, format_real, ObjectSerializer};
pub use pdf_writer::PdfWriter;
pub use xref::{XrefEntry, XrefTable};
