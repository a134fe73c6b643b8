//! PDF object types.
//!
//! Generic values that make up the body of an indirect object. Typed document
//! objects (catalog, pages, fonts, ...) lower into these before serialization.

use indexmap::IndexMap;

/// Dictionary storage. Insertion order is kept so output is deterministic.
pub type Dictionary = IndexMap<String, Object>;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// String (byte array)
    String(Vec<u8>),
    /// Name (starting with /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(Dictionary),
    /// Stream (dictionary + data)
    Stream {
        /// Stream dictionary
        dict: Dictionary,
        /// Stream data
        data: bytes::Bytes,
    },
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::String(_) => "String",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream { .. } => "Stream",
            Object::Reference(_) => "Reference",
        }
    }

    /// Collect every indirect reference reachable inside this value, in encounter order.
    pub fn references(&self) -> Vec<ObjectRef> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut Vec<ObjectRef>) {
        match self {
            Object::Reference(r) => out.push(*r),
            Object::Array(items) => items.iter().for_each(|o| o.collect_references(out)),
            Object::Dictionary(dict) | Object::Stream { dict, .. } => {
                dict.values().for_each(|o| o.collect_references(out))
            },
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_display() {
        assert_eq!(ObjectRef::new(12, 0).to_string(), "12 0 R");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Object::Null.type_name(), "Null");
        assert_eq!(Object::Name("Page".into()).type_name(), "Name");
        assert_eq!(Object::Reference(ObjectRef::new(1, 0)).type_name(), "Reference");
    }

    #[test]
    fn test_nested_references() {
        let mut inner = Dictionary::new();
        inner.insert("F1".to_string(), Object::Reference(ObjectRef::new(4, 0)));
        let mut dict = Dictionary::new();
        dict.insert("Parent".to_string(), Object::Reference(ObjectRef::new(2, 0)));
        dict.insert(
            "Kids".to_string(),
            Object::Array(vec![Object::Reference(ObjectRef::new(3, 0)), Object::Integer(7)]),
        );
        dict.insert("Font".to_string(), Object::Dictionary(inner));

        let refs = Object::Dictionary(dict).references();
        let ids: Vec<u32> = refs.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_stream_dictionary_references() {
        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), Object::Reference(ObjectRef::new(9, 0)));
        let stream = Object::Stream {
            dict,
            data: bytes::Bytes::from_static(b"BT ET"),
        };
        assert_eq!(stream.references(), vec![ObjectRef::new(9, 0)]);
    }
}
