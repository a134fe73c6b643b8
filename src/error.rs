//! Error types for the PDF library.
//!
//! This module defines all error types that can occur while laying out text,
//! building the object model, serializing, and saving documents.

use crate::object::ObjectRef;

/// Result type alias for PDF library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF creation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Character cannot be represented in the font's simple encoding
    #[error("Unsupported character {ch:?} at position {position}: not in WinAnsiEncoding")]
    Encoding {
        /// The offending character
        ch: char,
        /// Character index in the text being encoded
        position: usize,
    },

    /// Font size is not finite or is below the smallest writable size
    #[error("Invalid font size: {0}")]
    InvalidFontSize(f64),

    /// Page geometry or leading that cannot be written as a valid page
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An object references an identifier that was never allocated
    #[error("Object {from} references unallocated object {to}")]
    UnallocatedReference {
        /// Object holding the reference
        from: ObjectRef,
        /// Dangling target
        to: ObjectRef,
    },

    /// An object references an allocated identifier that holds no object
    #[error("Object {from} references {to}, which has no object")]
    MissingObject {
        /// Object holding the reference
        from: ObjectRef,
        /// Allocated but empty target
        to: ObjectRef,
    },

    /// An object was inserted under an identifier the document never allocated
    #[error("Object {0} was never allocated by this document")]
    UnallocatedObject(ObjectRef),

    /// The trailer names an information dictionary that holds no object
    #[error("Trailer /Info names {0}, which has no object")]
    MissingInfo(ObjectRef),

    /// The document has no catalog to name as trailer root
    #[error("Document has no catalog root")]
    MissingRoot,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error indicates an internal object-graph defect rather than bad input.
    ///
    /// Fatal errors are never caused by caller-supplied text; they mean the
    /// object model builder produced an inconsistent graph.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::UnallocatedReference { .. }
                | Error::MissingObject { .. }
                | Error::UnallocatedObject(_)
                | Error::MissingInfo(_)
                | Error::MissingRoot
        )
    }
}
