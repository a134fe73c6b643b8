//! Document information dictionary (`/Info`).

use crate::object::{Dictionary, Object};

/// Document metadata written to the trailer's `/Info` dictionary.
///
/// Only fields that are set are written. Dates are passed through as given
/// and should already be in PDF date format (`D:YYYYMMDDHHmmSS`); nothing is
/// filled in automatically, so output stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords (comma-separated)
    pub keywords: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// PDF producer
    pub producer: Option<String>,
    /// Creation date (PDF date format)
    pub creation_date: Option<String>,
    /// Modification date (PDF date format)
    pub mod_date: Option<String>,
}

impl DocumentInfo {
    /// Create a new empty DocumentInfo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set the creator.
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the producer.
    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self
    }

    /// Set the creation date.
    pub fn creation_date(mut self, date: impl Into<String>) -> Self {
        self.creation_date = Some(date.into());
        self
    }

    /// Set the modification date.
    pub fn mod_date(mut self, date: impl Into<String>) -> Self {
        self.mod_date = Some(date.into());
        self
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.entries().all(|(_, value)| value.is_none())
    }

    /// Lower to an `/Info` dictionary holding the set fields.
    pub fn to_object(&self) -> Object {
        let dict: Dictionary = self
            .entries()
            .filter_map(|(key, value)| {
                value.map(|v| (key.to_string(), Object::String(encode_text_string(v))))
            })
            .collect();
        Object::Dictionary(dict)
    }

    fn entries(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("Title", self.title.as_deref()),
            ("Author", self.author.as_deref()),
            ("Subject", self.subject.as_deref()),
            ("Keywords", self.keywords.as_deref()),
            ("Creator", self.creator.as_deref()),
            ("Producer", self.producer.as_deref()),
            ("CreationDate", self.creation_date.as_deref()),
            ("ModDate", self.mod_date.as_deref()),
        ]
        .into_iter()
    }
}

/// Encode a PDF text string.
///
/// Printable ASCII is stored as-is; anything else becomes UTF-16BE with a
/// byte order mark.
fn encode_text_string(s: &str) -> Vec<u8> {
    if s.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return s.as_bytes().to_vec();
    }
    let mut result = vec![0xFE, 0xFF]; // UTF-16BE BOM
    for c in s.encode_utf16() {
        result.push((c >> 8) as u8);
        result.push((c & 0xFF) as u8);
    }
    result
}
