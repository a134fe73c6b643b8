//! PDF document writer.
//!
//! Writes a [`Document`] as a complete PDF file: header, body, xref table,
//! and trailer. The object graph is validated before the first byte is
//! written, so a graph defect never produces a truncated file.

use super::object_serializer::ObjectSerializer;
use super::xref::XrefTable;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::object::ObjectRef;
use std::io::{self, Write};

/// Binary comment line marking the file as containing 8-bit data.
const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

/// Writer that counts the bytes passed through it.
struct CountingWriter<W> {
    inner: W,
    position: usize,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.position += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Serializes documents to PDF bytes.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    serializer: ObjectSerializer,
}

impl PdfWriter {
    /// Create a writer.
    pub fn new() -> Self {
        Self {
            serializer: ObjectSerializer::new(),
        }
    }

    /// Check that the document has a root, that a named `/Info` exists and
    /// that every reference resolves.
    pub fn validate(&self, doc: &Document) -> Result<ObjectRef> {
        for (id, object) in doc.iter() {
            for target in object.references() {
                if !doc.is_allocated(target) {
                    return Err(Error::UnallocatedReference { from: id, to: target });
                }
                if doc.get(target).is_none() {
                    return Err(Error::MissingObject { from: id, to: target });
                }
            }
        }

        if let Some(info) = doc.info() {
            if doc.get(info).is_none() {
                return Err(Error::MissingInfo(info));
            }
        }

        let root = doc.root().ok_or(Error::MissingRoot)?;
        if doc.get(root).is_none() {
            return Err(Error::MissingRoot);
        }
        Ok(root)
    }

    /// Serialize `doc` into a fresh buffer.
    pub fn serialize(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.write_to(doc, &mut output)?;
        Ok(output)
    }

    /// Write `doc` to `w`.
    ///
    /// Validation happens before any output. An I/O failure part-way through
    /// can still leave `w` with a partial file.
    pub fn write_to<W: Write>(&self, doc: &Document, w: W) -> Result<()> {
        let root = self.validate(doc)?;
        let mut out = CountingWriter { inner: w, position: 0 };

        write!(out, "%PDF-{}\n", doc.version())?;
        out.write_all(BINARY_MARKER)?;

        let mut xref = XrefTable::new();
        for (id, object) in doc.iter() {
            xref.record(id.id, id.gen, out.position);
            log::trace!("Writing {} ({}) at offset {}", id, object.kind(), out.position);
            self.serializer
                .write_indirect(&mut out, id, &object.to_object())?;
        }

        let xref_start = out.position;
        xref.write_to(&mut out)?;

        let mut entries = vec![
            ("Size", ObjectSerializer::integer(i64::from(xref.size()))),
            ("Root", ObjectSerializer::reference(root)),
        ];
        if let Some(info) = doc.info() {
            entries.push(("Info", ObjectSerializer::reference(info)));
        }
        let trailer = ObjectSerializer::dict(entries);
        write!(out, "trailer\n")?;
        self.serializer.write_object(&mut out, &trailer)?;
        write!(out, "\nstartxref\n{}\n%%EOF\n", xref_start)?;
        out.flush()?;

        log::debug!(
            "Wrote PDF {} with {} objects ({} bytes)",
            doc.version(),
            doc.object_count(),
            out.position
        );
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageSize;
    use crate::model::{DocumentInfo, PdfObject, PdfVersion};
    use crate::object::Object;

    fn minimal() -> Document {
        let mut doc = Document::new(PageSize::A4, PdfVersion::V1_7);
        let catalog = doc.alloc_id();
        let pages = doc.alloc_id();
        doc.insert(catalog, PdfObject::Catalog { pages }).unwrap();
        doc.insert(pages, PdfObject::PageTree { kids: vec![] }).unwrap();
        doc.set_root(catalog);
        doc
    }

    #[test]
    fn test_minimal_document_layout() {
        let bytes = PdfWriter::new().serialize(&minimal()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(bytes.starts_with(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n"));
        assert!(text.contains("1 0 obj\n<</Type /Catalog /Pages 2 0 R>>\nendobj\n"));
        assert!(text.contains("2 0 obj\n<</Type /Pages /Kids [] /Count 0>>\nendobj\n"));
        assert!(text.contains("trailer\n<</Size 3 /Root 1 0 R>>\nstartxref\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    fn startxref(bytes: &[u8]) -> usize {
        let at = bytes
            .windows(10)
            .rposition(|w| w == b"startxref\n")
            .unwrap();
        let tail = std::str::from_utf8(&bytes[at + 10..]).unwrap();
        tail.lines().next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_offsets_point_at_objects() {
        let bytes = PdfWriter::new().serialize(&minimal()).unwrap();
        let xref_at = startxref(&bytes);
        let section = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        let lines: Vec<&str> = section.lines().collect();
        for (i, line) in lines[3..5].iter().enumerate() {
            let offset: usize = line[..10].parse().unwrap();
            assert!(bytes[offset..].starts_with(format!("{} 0 obj", i + 1).as_bytes()));
        }
    }

    #[test]
    fn test_startxref_points_at_xref() {
        let bytes = PdfWriter::new().serialize(&minimal()).unwrap();
        assert!(bytes[startxref(&bytes)..].starts_with(b"xref\n0 3\n"));
    }

    #[test]
    fn test_unallocated_reference_rejected() {
        let mut doc = minimal();
        doc.add(PdfObject::Other(Object::Reference(ObjectRef::new(42, 0))));
        let err = PdfWriter::new().serialize(&doc).unwrap_err();
        assert!(matches!(err, Error::UnallocatedReference { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_reference_to_empty_slot_rejected() {
        let mut doc = minimal();
        let empty = doc.alloc_id();
        doc.add(PdfObject::Other(Object::Reference(empty)));
        assert!(matches!(
            PdfWriter::new().serialize(&doc),
            Err(Error::MissingObject { .. })
        ));
    }

    #[test]
    fn test_missing_root_rejected() {
        let mut doc = Document::new(PageSize::A4, PdfVersion::V1_7);
        doc.add(PdfObject::Other(Object::Null));
        assert!(matches!(PdfWriter::new().serialize(&doc), Err(Error::MissingRoot)));
    }

    #[test]
    fn test_failed_validation_writes_nothing() {
        let doc = Document::new(PageSize::A4, PdfVersion::V1_7);
        let mut sink = Vec::new();
        assert!(PdfWriter::new().write_to(&doc, &mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_version_in_header() {
        let mut doc = Document::new(PageSize::A4, PdfVersion::V1_4);
        let catalog = doc.alloc_id();
        let pages = doc.add(PdfObject::PageTree { kids: vec![] });
        doc.insert(catalog, PdfObject::Catalog { pages }).unwrap();
        doc.set_root(catalog);
        let bytes = doc.serialize().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
    }

    #[test]
    fn test_info_in_trailer() {
        let mut doc = minimal();
        let info = doc.add(PdfObject::Info(DocumentInfo::new().title("Caf\u{e9}").author("Ann")));
        doc.set_info(info);
        let bytes = doc.serialize().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("3 0 obj\n<</Title <FEFF00430061006600E9> /Author (Ann)>>\nendobj\n"));
        assert!(text.contains("trailer\n<</Size 4 /Root 1 0 R /Info 3 0 R>>\n"));
    }

    #[test]
    fn test_dangling_info_rejected() {
        let mut doc = minimal();
        let empty = doc.alloc_id();
        doc.set_info(empty);
        let err = PdfWriter::new().serialize(&doc).unwrap_err();
        assert!(matches!(err, Error::MissingInfo(id) if id == empty));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unused_ids_are_linked_free_entries() {
        let mut doc = minimal();
        doc.alloc_id();
        doc.add(PdfObject::Other(Object::Null));
        let bytes = doc.serialize().unwrap();
        let section = std::str::from_utf8(&bytes[startxref(&bytes)..]).unwrap();
        let rows: Vec<&str> = section.lines().skip(2).take(5).collect();
        assert_eq!(rows[0], "0000000003 65535 f ");
        assert_eq!(rows[3], "0000000000 65535 f ");
        assert!(rows[4].ends_with(" n "));
    }
}
