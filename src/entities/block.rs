//! Block begin/end markers of a block definition

use super::{impl_entity, EntityCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::types::{DxfVersion, Vector3};

/// Block entity - marks the beginning of a block definition
///
/// Written as `BLOCK` in the BLOCKS section; it is owned by its block record
/// and carries the block's base point.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub common: EntityCommon,
    /// Block name (matches the BlockRecord name)
    pub name: String,
    /// Block-type flags (code 70)
    pub flags: i16,
    /// Base point (insertion point) for the block
    pub base_point: Vector3,
    /// Block description
    pub description: String,
    /// X-ref path name (for external references)
    pub xref_path: String,
}

impl Block {
    /// Create a new block entity
    pub fn new(name: impl Into<String>, base_point: Vector3) -> Self {
        Self {
            common: EntityCommon::default(),
            name: name.into(),
            flags: 0,
            base_point,
            description: String::new(),
            xref_path: String::new(),
        }
    }

    /// Builder: Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl_entity!(Block, "BLOCK");

impl DxfMapped for Block {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("BLOCK")
            .subclass("AcDbBlockBegin")
            .property(2, "name", |b| b.name.as_str().into())
            .property(70, "flags", |b| DxfValue::Int16(b.flags))
            .property(10, "base_point", |b| b.base_point.into())
            .property(3, "name", |b| b.name.as_str().into())
            .property(1, "xref_path", |b| b.xref_path.as_str().into())
            .property(4, "description", |b| b.description.as_str().into())
            .since(DxfVersion::AC1018)
            .default_value("")
            .build()
    }
}

/// BlockEnd entity - marks the end of a block definition
#[derive(Debug, Clone, PartialEq)]
pub struct BlockEnd {
    pub common: EntityCommon,
}

impl BlockEnd {
    /// Create a new block end entity
    pub fn new() -> Self {
        Self {
            common: EntityCommon::default(),
        }
    }
}

impl Default for BlockEnd {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(BlockEnd, "ENDBLK");

impl DxfMapped for BlockEnd {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("ENDBLK")
            .subclass("AcDbBlockEnd")
            .build()
    }
}
