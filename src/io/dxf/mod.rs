//! DXF (Drawing Exchange Format) writing
//!
//! Documents are serialized as a stream of group-code/value tokens. The
//! per-type field maps in [`class_map`] describe what each kind contributes;
//! the section writers add the shared object and entity data around them.

mod class_map;
mod code_page;
mod dxf_code;
mod group_code_value;
mod writer;

pub use class_map::{
    class_map, DxfClassMap, DxfClassMapBuilder, DxfMapEntry, DxfMapped, DxfProperty, DxfValue,
};
pub use code_page::{encoding_from_code_page, output_encoding, DEFAULT_CODE_PAGE};
pub use dxf_code::DxfCode;
pub use group_code_value::GroupCodeValueType;
pub use writer::{
    value_type_for_code, write_binary_dxf, write_dxf, DxfBinaryWriter, DxfSection,
    DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, DxfToken, DxfTokenWriter, DxfWriter,
    DxfWriterConfiguration, ObjectQueue, SectionWriter,
};
