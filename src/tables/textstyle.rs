//! Text style table entry

use bitflags::bitflags;

use super::{impl_table_object, TableEntry};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::ObjectCommon;

bitflags! {
    /// Text generation flags (code 71)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i16 {
        /// Text is backward (mirrored in X)
        const BACKWARD = 0x2;
        /// Text is upside down (mirrored in Y)
        const UPSIDE_DOWN = 0x4;
    }
}

/// A text style table entry
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub common: ObjectCommon,
    /// Style name
    pub name: String,
    /// Standard flags (code 70)
    pub flags: i16,
    /// Text generation flags
    pub generation: TextGenerationFlags,
    /// Fixed text height (0 = variable)
    pub height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Oblique angle in radians
    pub oblique_angle: f64,
    /// Last height used
    pub last_height: f64,
    /// Primary font file name
    pub font_file: String,
    /// Big font file name (for Asian languages)
    pub big_font_file: String,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            common: ObjectCommon::default(),
            name: name.into(),
            flags: 0,
            generation: TextGenerationFlags::empty(),
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            last_height: 2.5,
            font_file: "txt".to_string(),
            big_font_file: String::new(),
        }
    }

    /// Create the standard "Standard" text style
    pub fn standard() -> Self {
        Self::new("Standard")
    }

    pub fn set_backward(&mut self, backward: bool) {
        self.generation.set(TextGenerationFlags::BACKWARD, backward);
    }

    pub fn set_upside_down(&mut self, upside_down: bool) {
        self.generation.set(TextGenerationFlags::UPSIDE_DOWN, upside_down);
    }

    pub fn is_backward(&self) -> bool {
        self.generation.contains(TextGenerationFlags::BACKWARD)
    }

    pub fn is_upside_down(&self) -> bool {
        self.generation.contains(TextGenerationFlags::UPSIDE_DOWN)
    }

    /// Check if this style has a fixed height
    pub fn has_fixed_height(&self) -> bool {
        self.height > 0.0
    }
}

impl TableEntry for TextStyle {
    const TABLE_NAME: &'static str = "STYLE";

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case("Standard")
    }
}

impl_table_object!(TextStyle);

impl DxfMapped for TextStyle {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("STYLE")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbTextStyleTableRecord")
            .property(2, "name", |s| s.name.as_str().into())
            .property(70, "flags", |s| DxfValue::Int16(s.flags))
            .property(40, "height", |s| s.height.into())
            .property(41, "width_factor", |s| s.width_factor.into())
            .property(50, "oblique_angle", |s| s.oblique_angle.to_degrees().into())
            .property(71, "generation", |s| DxfValue::Int16(s.generation.bits()))
            .property(42, "last_height", |s| s.last_height.into())
            .property(3, "font_file", |s| s.font_file.as_str().into())
            .property(4, "big_font_file", |s| s.big_font_file.as_str().into())
            .build()
    }
}
