//! Application ID table entry

use super::{impl_table_object, TableEntry};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::ObjectCommon;

/// An application ID table entry (registers an extended-data owner)
#[derive(Debug, Clone)]
pub struct AppId {
    pub common: ObjectCommon,
    /// Application name
    pub name: String,
    /// Standard flags
    pub flags: i16,
}

impl AppId {
    /// Create a new application ID
    pub fn new(name: impl Into<String>) -> Self {
        AppId {
            common: ObjectCommon::default(),
            name: name.into(),
            flags: 0,
        }
    }

    /// Create the standard "ACAD" application ID
    pub fn acad() -> Self {
        Self::new("ACAD")
    }
}

impl TableEntry for AppId {
    const TABLE_NAME: &'static str = "APPID";

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case("ACAD")
    }
}

impl_table_object!(AppId);

impl DxfMapped for AppId {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("APPID")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbRegAppTableRecord")
            .property(2, "name", |a| a.name.as_str().into())
            .property(70, "flags", |a| DxfValue::Int16(a.flags))
            .build()
    }
}
