//! Block record table entry

use bitflags::bitflags;

use super::{impl_table_object, TableEntry};
use crate::entities::{Block, BlockEnd};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::ObjectCommon;
use crate::types::{DxfVersion, Handle, Vector3};

/// Name of the model space block record
pub const MODEL_SPACE: &str = "*Model_Space";
/// Name of the paper space block record
pub const PAPER_SPACE: &str = "*Paper_Space";

bitflags! {
    /// Block-type flags (code 70 of the BLOCK entity)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockFlags: i16 {
        /// Anonymous block
        const ANONYMOUS = 0x1;
        /// Block has attribute definitions
        const HAS_ATTRIBUTES = 0x2;
        /// Block is an external reference
        const XREF = 0x4;
        /// Block is an xref overlay
        const XREF_OVERLAY = 0x8;
        /// Block is externally dependent
        const EXTERNAL = 0x10;
    }
}

/// A block record table entry
///
/// Owns the `BLOCK`/`ENDBLK` markers of its definition; the entities of the
/// block live in the document arena and are listed here by handle.
#[derive(Debug, Clone)]
pub struct BlockRecord {
    pub common: ObjectCommon,
    /// Block name
    pub name: String,
    /// Block flags
    pub flags: BlockFlags,
    /// BLOCK entity
    pub block: Block,
    /// ENDBLK entity
    pub block_end: BlockEnd,
    /// Layout object (if this block is a layout)
    pub layout: Handle,
    /// Insertion units
    pub units: i16,
    /// Explodability flag
    pub explodable: bool,
    /// Can scale uniformly
    pub scale_uniformly: bool,
    entities: Vec<Handle>,
}

impl BlockRecord {
    /// Create a new block record with its base point at the origin
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        BlockRecord {
            common: ObjectCommon::default(),
            block: Block::new(name.clone(), Vector3::ZERO),
            block_end: BlockEnd::new(),
            name,
            flags: BlockFlags::empty(),
            layout: Handle::NULL,
            units: 0,
            explodable: true,
            scale_uniformly: false,
            entities: Vec::new(),
        }
    }

    /// Create the model space block record
    pub fn model_space() -> Self {
        Self::new(MODEL_SPACE)
    }

    /// Create the paper space block record
    pub fn paper_space() -> Self {
        Self::new(PAPER_SPACE)
    }

    pub fn is_model_space(&self) -> bool {
        self.name.eq_ignore_ascii_case(MODEL_SPACE)
    }

    pub fn is_paper_space(&self) -> bool {
        self.name.len() >= PAPER_SPACE.len()
            && self.name[..PAPER_SPACE.len()].eq_ignore_ascii_case(PAPER_SPACE)
    }

    /// Check if this is a layout block
    pub fn is_layout(&self) -> bool {
        !self.layout.is_null()
    }

    /// Check if this block is anonymous
    pub fn is_anonymous(&self) -> bool {
        self.flags.contains(BlockFlags::ANONYMOUS) || self.name.starts_with('*')
    }

    /// Handles of the entities in this block, in drawing order
    pub fn entities(&self) -> &[Handle] {
        &self.entities
    }

    /// Append an entity handle to the block
    pub fn push_entity(&mut self, handle: Handle) {
        self.entities.push(handle);
    }
}

impl TableEntry for BlockRecord {
    const TABLE_NAME: &'static str = "BLOCK_RECORD";

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.is_model_space() || self.is_paper_space()
    }
}

impl_table_object!(BlockRecord);

impl DxfMapped for BlockRecord {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("BLOCK_RECORD")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbBlockTableRecord")
            .property(2, "name", |b| b.name.as_str().into())
            .property(340, "layout", |b| b.layout.into())
            .since(DxfVersion::AC1015)
            .property(70, "units", |b| DxfValue::Int16(b.units))
            .since(DxfVersion::AC1015)
            .property(280, "explodable", |b| DxfValue::Byte(b.explodable as u8))
            .since(DxfVersion::AC1015)
            .property(281, "scale_uniformly", |b| DxfValue::Byte(b.scale_uniformly as u8))
            .since(DxfVersion::AC1015)
            .build()
    }
}
