//! Non-graphical objects (OBJECTS section) and the data every graph node
//! shares.

mod xrecord;

pub use xrecord::{DictionaryCloningFlags, XRecord};

use indexmap::{IndexMap, IndexSet};

use crate::io::dxf::{DxfClassMap, DxfCode, DxfMapped, DxfValue};
use crate::types::{DxfVersion, Handle};
use crate::xdata::ExtendedData;

/// Data carried by every object of the document graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectCommon {
    /// Document-unique handle
    pub handle: Handle,
    /// Owning object. `Some(Handle::NULL)` is the document root; `None` is a
    /// broken graph that fails to encode.
    pub owner: Option<Handle>,
    /// Extended dictionary owned by this object
    pub xdictionary: Option<Handle>,
    /// Objects that depend on this one (weak back-references)
    pub reactors: IndexSet<Handle>,
    /// Application data attached to the object
    pub extended_data: Option<ExtendedData>,
}

impl ObjectCommon {
    /// Common data for an object owned by `owner`
    pub fn owned_by(owner: Handle) -> Self {
        Self {
            owner: Some(owner),
            ..Default::default()
        }
    }
}

/// Shared behaviour of every graph node
pub trait CadObject {
    /// Object common data
    fn common(&self) -> &ObjectCommon;

    /// Mutable object common data
    fn common_mut(&mut self) -> &mut ObjectCommon;

    /// DXF object name written under code 0 (`LINE`, `LAYER`, ...)
    fn object_name(&self) -> &'static str;

    /// Code the handle is written under
    fn handle_code(&self) -> i32 {
        DxfCode::Handle.into()
    }

    fn handle(&self) -> Handle {
        self.common().handle
    }

    fn owner(&self) -> Option<Handle> {
        self.common().owner
    }
}

/// Dictionary object - stores key-value pairs of object handles
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub common: ObjectCommon,
    /// Entries in insertion order (key -> owned object)
    pub entries: IndexMap<String, Handle>,
    /// Duplicate record cloning flag
    pub duplicate_cloning: DictionaryCloningFlags,
    /// Entries are hard-owned
    pub hard_owner: bool,
}

impl Dictionary {
    /// Create a new dictionary owned by `owner`
    pub fn new(owner: Handle) -> Self {
        Self {
            common: ObjectCommon::owned_by(owner),
            ..Default::default()
        }
    }

    /// Add an entry, replacing any previous entry with the same key
    pub fn add_entry(&mut self, key: impl Into<String>, handle: Handle) {
        self.entries.insert(key.into(), handle);
    }

    /// Get a handle by key
    pub fn get(&self, key: &str) -> Option<Handle> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CadObject for Dictionary {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn object_name(&self) -> &'static str {
        "DICTIONARY"
    }
}

impl DxfMapped for Dictionary {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("DICTIONARY")
            .subclass("AcDbDictionary")
            .property(280, "hard_owner", |d| DxfValue::Byte(d.hard_owner as u8))
            .since(DxfVersion::AC1015)
            .default_value(DxfValue::Byte(0))
            .property(281, "duplicate_cloning", |d| DxfValue::Byte(d.duplicate_cloning as u8))
            .since(DxfVersion::AC1015)
            .build()
    }
}

/// Object types stored in the document's object arena
#[derive(Debug, Clone)]
pub enum ObjectType {
    Dictionary(Dictionary),
    XRecord(XRecord),
}

impl ObjectType {
    pub fn as_object(&self) -> &dyn CadObject {
        match self {
            ObjectType::Dictionary(o) => o,
            ObjectType::XRecord(o) => o,
        }
    }

    pub fn as_object_mut(&mut self) -> &mut dyn CadObject {
        match self {
            ObjectType::Dictionary(o) => o,
            ObjectType::XRecord(o) => o,
        }
    }

    pub fn handle(&self) -> Handle {
        self.as_object().handle()
    }

    /// The dictionary, if this object is one
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            ObjectType::Dictionary(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Dictionary> for ObjectType {
    fn from(d: Dictionary) -> Self {
        ObjectType::Dictionary(d)
    }
}

impl From<XRecord> for ObjectType {
    fn from(x: XRecord) -> Self {
        ObjectType::XRecord(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_entries_keep_order() {
        let mut dict = Dictionary::new(Handle::NULL);
        assert!(dict.is_empty());

        dict.add_entry("B", Handle::new(0x20));
        dict.add_entry("A", Handle::new(0x10));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("A"), Some(Handle::new(0x10)));
        assert_eq!(dict.get("C"), None);
        assert_eq!(dict.entries.keys().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_object_common_defaults() {
        let common = ObjectCommon::default();
        assert_eq!(common.owner, None);
        assert!(common.reactors.is_empty());
        assert_eq!(ObjectCommon::owned_by(Handle::NULL).owner, Some(Handle::NULL));
    }

    #[test]
    fn test_dictionary_handle_code() {
        let dict = Dictionary::new(Handle::NULL);
        assert_eq!(dict.handle_code(), 5);
        assert_eq!(ObjectType::from(dict).as_object().object_name(), "DICTIONARY");
    }
}
