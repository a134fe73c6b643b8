//! PDF content stream builder.
//!
//! Builds page content streams from text operators according to
//! PDF specification ISO 32000-1:2008 Section 9.4.

use super::object_serializer::{escape_literal, format_real};
use bytes::Bytes;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f64),
    /// Move text position (Td)
    MoveText(f64, f64),
    /// Show text (Tj) - bytes already in the font's encoding
    ShowText(Vec<u8>),
}

impl ContentStreamOp {
    /// Append this operator and its operands to `out`, without a trailing
    /// separator.
    pub fn encode(&self, out: &mut Vec<u8>) {
        match self {
            ContentStreamOp::BeginText => out.extend_from_slice(b"BT"),
            ContentStreamOp::EndText => out.extend_from_slice(b"ET"),
            ContentStreamOp::SetFont(name, size) => {
                out.extend_from_slice(format!("/{} {} Tf", name, format_real(*size)).as_bytes());
            },
            ContentStreamOp::MoveText(tx, ty) => {
                out.extend_from_slice(format!("{} {} Td", format_real(*tx), format_real(*ty)).as_bytes());
            },
            ContentStreamOp::ShowText(text) => {
                out.push(b'(');
                out.extend_from_slice(&escape_literal(text));
                out.extend_from_slice(b") Tj");
            },
        }
    }
}

/// A page content stream.
///
/// The encoded bytes are extended on every push, so [`ContentStream::len`]
/// and [`ContentStream::data`] always describe exactly the operators held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStream {
    ops: Vec<ContentStreamOp>,
    encoded: Vec<u8>,
}

impl ContentStream {
    /// Create an empty content stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operator.
    pub fn push(&mut self, op: ContentStreamOp) -> &mut Self {
        if !self.encoded.is_empty() {
            self.encoded.push(b'\n');
        }
        op.encode(&mut self.encoded);
        self.ops.push(op);
        self
    }

    /// Append one self-contained text object drawing `text` at `(x, y)`.
    ///
    /// Emits `BT /{font} {size} Tf {x} {y} Td ({text}) Tj ET`.
    pub fn show_text_at(&mut self, font: &str, size: f64, x: f64, y: f64, text: Vec<u8>) -> &mut Self {
        self.push(ContentStreamOp::BeginText)
            .push(ContentStreamOp::SetFont(font.to_string(), size))
            .push(ContentStreamOp::MoveText(x, y))
            .push(ContentStreamOp::ShowText(text))
            .push(ContentStreamOp::EndText)
    }

    /// Operators in the order they were pushed.
    pub fn ops(&self) -> &[ContentStreamOp] {
        &self.ops
    }

    /// Encoded stream bytes.
    pub fn data(&self) -> &[u8] {
        &self.encoded
    }

    /// Encoded stream bytes as a shareable buffer.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.encoded)
    }

    /// Length in bytes of the encoded stream.
    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    /// Whether no operator has been pushed.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(stream: &ContentStream) -> String {
        String::from_utf8_lossy(stream.data()).to_string()
    }

    #[test]
    fn test_single_op_encoding() {
        let mut buf = Vec::new();
        ContentStreamOp::SetFont("F1".to_string(), 12.0).encode(&mut buf);
        assert_eq!(buf, b"/F1 12 Tf".to_vec());

        let mut buf = Vec::new();
        ContentStreamOp::MoveText(72.0, 730.4).encode(&mut buf);
        assert_eq!(buf, b"72 730.4 Td".to_vec());
    }

    #[test]
    fn test_show_text_at() {
        let mut stream = ContentStream::new();
        stream.show_text_at("F1", 18.0, 72.0, 752.0, b"Hello".to_vec());
        assert_eq!(text(&stream), "BT\n/F1 18 Tf\n72 752 Td\n(Hello) Tj\nET");
        assert_eq!(stream.ops().len(), 5);
    }

    #[test]
    fn test_show_text_escapes_parentheses() {
        let mut stream = ContentStream::new();
        stream.push(ContentStreamOp::ShowText(b"a (b) \\c".to_vec()));
        assert_eq!(text(&stream), "(a \\(b\\) \\\\c) Tj");
    }

    #[test]
    fn test_length_tracks_pushes() {
        let mut stream = ContentStream::new();
        assert!(stream.is_empty());
        assert_eq!(stream.len(), 0);

        stream.push(ContentStreamOp::BeginText);
        assert_eq!(stream.len(), 2);
        stream.push(ContentStreamOp::EndText);
        assert_eq!(stream.len(), 5);
        assert_eq!(stream.len(), stream.data().len());
        assert_eq!(stream.to_bytes().len(), stream.len());
    }

    #[test]
    fn test_encode_appends() {
        let mut buf = b"BT\n".to_vec();
        ContentStreamOp::ShowText(b"a)".to_vec()).encode(&mut buf);
        assert_eq!(buf, b"BT\n(a\\)) Tj".to_vec());
    }
}
