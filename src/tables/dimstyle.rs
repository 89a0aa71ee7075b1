//! Dimension style table entry

use super::TableEntry;
use crate::io::dxf::{DxfClassMap, DxfCode, DxfMapped, DxfValue};
use crate::objects::{CadObject, ObjectCommon};
use crate::types::{DxfVersion, Handle};

/// A dimension style table entry
///
/// Only the commonly edited variables are carried; the rest take the
/// defaults a consumer assumes when the code is absent.
#[derive(Debug, Clone)]
pub struct DimStyle {
    pub common: ObjectCommon,
    /// Style name
    pub name: String,
    /// Standard flags
    pub flags: i16,
    /// General dimension suffix (DIMPOST, code 3)
    pub dimpost: String,
    /// Overall scale factor (DIMSCALE, code 40)
    pub dimscale: f64,
    /// Arrow size (DIMASZ, code 41)
    pub dimasz: f64,
    /// Extension line offset (DIMEXO, code 42)
    pub dimexo: f64,
    /// Extension line extension (DIMEXE, code 44)
    pub dimexe: f64,
    /// Text height (DIMTXT, code 140)
    pub dimtxt: f64,
    /// Dimension line gap (DIMGAP, code 147)
    pub dimgap: f64,
    /// Decimal places (DIMDEC, code 271)
    pub dimdec: i16,
    /// Text style (DIMTXSTY, code 340)
    pub text_style: Handle,
}

impl DimStyle {
    /// Create a new dimension style with the imperial defaults
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            common: ObjectCommon::default(),
            name: name.into(),
            flags: 0,
            dimpost: String::new(),
            dimscale: 1.0,
            dimasz: 0.18,
            dimexo: 0.0625,
            dimexe: 0.18,
            dimtxt: 0.18,
            dimgap: 0.09,
            dimdec: 4,
            text_style: Handle::NULL,
        }
    }

    /// Create the standard "Standard" dimension style
    pub fn standard() -> Self {
        Self::new("Standard")
    }
}

impl TableEntry for DimStyle {
    const TABLE_NAME: &'static str = "DIMSTYLE";

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case("Standard")
    }
}

impl CadObject for DimStyle {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn object_name(&self) -> &'static str {
        Self::TABLE_NAME
    }

    fn handle_code(&self) -> i32 {
        DxfCode::DimVarHandle.into()
    }
}

impl DxfMapped for DimStyle {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("DIMSTYLE")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbDimStyleTableRecord")
            .property(2, "name", |d| d.name.as_str().into())
            .property(70, "flags", |d| DxfValue::Int16(d.flags))
            .property(3, "dimpost", |d| d.dimpost.as_str().into())
            .default_value("")
            .property(40, "dimscale", |d| d.dimscale.into())
            .property(41, "dimasz", |d| d.dimasz.into())
            .property(42, "dimexo", |d| d.dimexo.into())
            .property(44, "dimexe", |d| d.dimexe.into())
            .property(140, "dimtxt", |d| d.dimtxt.into())
            .property(147, "dimgap", |d| d.dimgap.into())
            .property(271, "dimdec", |d| DxfValue::Int16(d.dimdec))
            .since(DxfVersion::AC1015)
            .property(340, "text_style", |d| d.text_style.into())
            .since(DxfVersion::AC1015)
            .default_value(Handle::NULL)
            .build()
    }
}
