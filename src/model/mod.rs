//! In-memory PDF object graph.
//!
//! A [`Document`] owns every indirect object in an arena keyed by object
//! number. Objects refer to each other only through [`ObjectRef`]s handed
//! out by the document's allocator, so the graph has no shared ownership
//! and can be validated before anything is written.

mod builder;
mod info;
mod version;

pub use builder::{build_single_page, FONT_RESOURCE_NAME};
pub use info::DocumentInfo;
pub use version::PdfVersion;

use crate::config::PdfConfig;
use crate::error::{Error, Result};
use crate::fonts::Standard14Font;
use crate::layout::PageSize;
use crate::object::{Dictionary, Object, ObjectRef};
use crate::writer::{ContentStream, ObjectSerializer, PdfWriter};
use std::collections::BTreeMap;

/// Hands out object numbers, starting at 1 and never reusing one.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator whose first identifier is `1 0 R`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next identifier.
    pub fn alloc(&mut self) -> ObjectRef {
        let id = ObjectRef::new(self.next, 0);
        self.next += 1;
        id
    }

    /// Whether `id` was handed out by this allocator.
    pub fn is_allocated(&self, id: ObjectRef) -> bool {
        id.gen == 0 && id.id >= 1 && id.id < self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Page object contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Owning page tree node
    pub parent: ObjectRef,
    /// `[llx lly urx ury]` in points
    pub media_box: [f64; 4],
    /// Font resources as `(resource name, font object)`
    pub fonts: Vec<(String, ObjectRef)>,
    /// Page content stream
    pub contents: ObjectRef,
}

/// A typed indirect object.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    /// Document catalog (`/Type /Catalog`)
    Catalog {
        /// Root of the page tree
        pages: ObjectRef,
    },
    /// Page tree node (`/Type /Pages`)
    PageTree {
        /// Child pages
        kids: Vec<ObjectRef>,
    },
    /// A single page (`/Type /Page`)
    Page(Page),
    /// Non-embedded standard-14 font with WinAnsi encoding
    Font(Standard14Font),
    /// Page content stream
    ContentStream(ContentStream),
    /// Document information dictionary
    Info(DocumentInfo),
    /// Any other object, written as-is
    Other(Object),
}

impl PdfObject {
    /// Lower to the generic object syntax tree.
    pub fn to_object(&self) -> Object {
        match self {
            PdfObject::Catalog { pages } => ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(*pages)),
            ]),
            PdfObject::PageTree { kids } => ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                (
                    "Kids",
                    Object::Array(kids.iter().copied().map(Object::Reference).collect()),
                ),
                ("Count", ObjectSerializer::integer(kids.len() as i64)),
            ]),
            PdfObject::Page(page) => {
                let fonts: Dictionary = page
                    .fonts
                    .iter()
                    .map(|(name, font)| (name.clone(), Object::Reference(*font)))
                    .collect();
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Page")),
                    ("Parent", ObjectSerializer::reference(page.parent)),
                    ("MediaBox", ObjectSerializer::rect(page.media_box)),
                    (
                        "Resources",
                        ObjectSerializer::dict(vec![("Font", Object::Dictionary(fonts))]),
                    ),
                    ("Contents", ObjectSerializer::reference(page.contents)),
                ])
            },
            PdfObject::Font(font) => ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(font.postscript_name())),
                ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
            ]),
            PdfObject::ContentStream(stream) => Object::Stream {
                dict: Dictionary::new(),
                data: stream.to_bytes(),
            },
            PdfObject::Info(info) => info.to_object(),
            PdfObject::Other(object) => object.clone(),
        }
    }

    /// Every identifier this object refers to.
    pub fn references(&self) -> Vec<ObjectRef> {
        match self {
            PdfObject::Catalog { pages } => vec![*pages],
            PdfObject::PageTree { kids } => kids.clone(),
            PdfObject::Page(page) => {
                let mut refs = vec![page.parent];
                refs.extend(page.fonts.iter().map(|(_, font)| *font));
                refs.push(page.contents);
                refs
            },
            PdfObject::Font(_) | PdfObject::ContentStream(_) | PdfObject::Info(_) => Vec::new(),
            PdfObject::Other(object) => object.references(),
        }
    }

    /// Short type label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PdfObject::Catalog { .. } => "Catalog",
            PdfObject::PageTree { .. } => "Pages",
            PdfObject::Page(_) => "Page",
            PdfObject::Font(_) => "Font",
            PdfObject::ContentStream(_) => "ContentStream",
            PdfObject::Info(_) => "Info",
            PdfObject::Other(object) => object.type_name(),
        }
    }
}

/// Arena of indirect objects plus the metadata needed to write a file.
#[derive(Debug, Clone)]
pub struct Document {
    objects: BTreeMap<u32, PdfObject>,
    ids: IdAllocator,
    root: Option<ObjectRef>,
    info: Option<ObjectRef>,
    page_size: PageSize,
    version: PdfVersion,
}

impl Document {
    /// Create an empty document.
    pub fn new(page_size: PageSize, version: PdfVersion) -> Self {
        Self {
            objects: BTreeMap::new(),
            ids: IdAllocator::new(),
            root: None,
            info: None,
            page_size,
            version,
        }
    }

    /// Create an empty document using the page size and version from `config`.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new(config.page_size, config.version)
    }

    /// Reserve an identifier without storing an object yet.
    pub fn alloc_id(&mut self) -> ObjectRef {
        self.ids.alloc()
    }

    /// Store `object` under a previously allocated identifier.
    ///
    /// Returns the object it replaces, if any.
    pub fn insert(&mut self, id: ObjectRef, object: PdfObject) -> Result<Option<PdfObject>> {
        if !self.ids.is_allocated(id) {
            return Err(Error::UnallocatedObject(id));
        }
        log::trace!("Inserting {} as {}", object.kind(), id);
        Ok(self.objects.insert(id.id, object))
    }

    /// Allocate an identifier and store `object` under it.
    pub fn add(&mut self, object: PdfObject) -> ObjectRef {
        let id = self.ids.alloc();
        self.objects.insert(id.id, object);
        id
    }

    /// Look up an object.
    pub fn get(&self, id: ObjectRef) -> Option<&PdfObject> {
        if id.gen != 0 {
            return None;
        }
        self.objects.get(&id.id)
    }

    /// Whether `id` was allocated by this document.
    pub fn is_allocated(&self, id: ObjectRef) -> bool {
        self.ids.is_allocated(id)
    }

    /// Objects in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectRef, &PdfObject)> {
        self.objects
            .iter()
            .map(|(id, object)| (ObjectRef::new(*id, 0), object))
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Name the document catalog.
    pub fn set_root(&mut self, root: ObjectRef) {
        self.root = Some(root);
    }

    /// The document catalog, once set.
    pub fn root(&self) -> Option<ObjectRef> {
        self.root
    }

    /// Name the document information dictionary for the trailer.
    pub fn set_info(&mut self, info: ObjectRef) {
        self.info = Some(info);
    }

    /// The document information dictionary, if any.
    pub fn info(&self) -> Option<ObjectRef> {
        self.info
    }

    /// Page size the document was built for.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Header version.
    pub fn version(&self) -> PdfVersion {
        self.version
    }

    /// The first content stream in the document.
    pub fn content_stream(&self) -> Option<&ContentStream> {
        self.objects.values().find_map(|object| match object {
            PdfObject::ContentStream(stream) => Some(stream),
            _ => None,
        })
    }

    /// Mutable access to the first content stream in the document.
    pub fn content_stream_mut(&mut self) -> Option<&mut ContentStream> {
        self.objects.values_mut().find_map(|object| match object {
            PdfObject::ContentStream(stream) => Some(stream),
            _ => None,
        })
    }

    /// Serialize into a fresh buffer.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        PdfWriter::new().serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_starts_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.alloc(), ObjectRef::new(1, 0));
        assert_eq!(ids.alloc(), ObjectRef::new(2, 0));
        assert!(ids.is_allocated(ObjectRef::new(2, 0)));
        assert!(!ids.is_allocated(ObjectRef::new(3, 0)));
        assert!(!ids.is_allocated(ObjectRef::new(0, 0)));
        assert!(!ids.is_allocated(ObjectRef::new(1, 1)));
    }

    #[test]
    fn test_insert_requires_allocation() {
        let mut doc = Document::new(PageSize::A4, PdfVersion::V1_7);
        let err = doc
            .insert(ObjectRef::new(7, 0), PdfObject::Other(Object::Null))
            .unwrap_err();
        assert!(matches!(err, Error::UnallocatedObject(_)));

        let id = doc.alloc_id();
        assert!(doc.insert(id, PdfObject::Other(Object::Null)).unwrap().is_none());
        let previous = doc
            .insert(id, PdfObject::Other(Object::Integer(1)))
            .unwrap();
        assert_eq!(previous, Some(PdfObject::Other(Object::Null)));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let mut doc = Document::new(PageSize::A4, PdfVersion::V1_7);
        let a = doc.alloc_id();
        let b = doc.alloc_id();
        doc.insert(b, PdfObject::Other(Object::Integer(2))).unwrap();
        doc.insert(a, PdfObject::Other(Object::Integer(1))).unwrap();
        let ids: Vec<u32> = doc.iter().map(|(id, _)| id.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(doc.object_count(), 2);
    }

    #[test]
    fn test_page_references() {
        let page = PdfObject::Page(Page {
            parent: ObjectRef::new(2, 0),
            media_box: [0.0, 0.0, 595.0, 842.0],
            fonts: vec![("F1".to_string(), ObjectRef::new(4, 0))],
            contents: ObjectRef::new(5, 0),
        });
        let refs = page.references();
        assert_eq!(
            refs,
            vec![ObjectRef::new(2, 0), ObjectRef::new(4, 0), ObjectRef::new(5, 0)]
        );
        // Lowered form carries the same references.
        let mut lowered = page.to_object().references();
        lowered.sort();
        assert_eq!(lowered, refs);
    }

    fn lowered_dict(object: &PdfObject) -> Dictionary {
        match object.to_object() {
            Object::Dictionary(dict) => dict,
            other => panic!("expected dictionary, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_font_lowering() {
        let dict = lowered_dict(&PdfObject::Font(Standard14Font::TimesBold));
        assert_eq!(dict.get("BaseFont"), Some(&Object::Name("Times-Bold".to_string())));
        assert_eq!(
            dict.get("Encoding"),
            Some(&Object::Name("WinAnsiEncoding".to_string()))
        );
    }

    #[test]
    fn test_page_tree_count_matches_kids() {
        let tree = PdfObject::PageTree {
            kids: vec![ObjectRef::new(3, 0)],
        };
        assert_eq!(lowered_dict(&tree).get("Count"), Some(&Object::Integer(1)));
    }

    #[test]
    fn test_info_lowering() {
        let info = PdfObject::Info(DocumentInfo::new().author("Ada"));
        assert!(info.references().is_empty());
        assert_eq!(info.kind(), "Info");
        assert_eq!(lowered_dict(&info).get("Author"), Some(&Object::String(b"Ada".to_vec())));
    }
}
