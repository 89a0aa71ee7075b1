//! Text entity

use super::{impl_entity, EntityCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::types::Vector3;

/// Text horizontal alignment (code 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
    /// Fit between two points, height follows
    Aligned = 3,
    /// Centered horizontally and vertically
    Middle = 4,
    /// Fit between two points, height kept
    Fit = 5,
}

/// Text vertical alignment (code 73)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    #[default]
    Baseline = 0,
    Bottom = 1,
    Middle = 2,
    Top = 3,
}

/// A single-line text entity
#[derive(Debug, Clone)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content
    pub value: String,
    /// Insertion point (first alignment point)
    pub insertion_point: Vector3,
    /// Second alignment point, used unless the text is left/baseline aligned
    pub alignment_point: Vector3,
    /// Text height
    pub height: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Width scale factor
    pub width_factor: f64,
    /// Oblique angle in radians
    pub oblique_angle: f64,
    /// Text style name
    pub style: String,
    pub horizontal_alignment: TextHorizontalAlignment,
    pub vertical_alignment: TextVerticalAlignment,
    /// Thickness
    pub thickness: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Text {
    /// Create an empty text
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            alignment_point: Vector3::ZERO,
            height: 2.5,
            rotation: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            style: "Standard".to_string(),
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a text with content, position and height
    pub fn with_value(value: impl Into<String>, insertion_point: Vector3, height: f64) -> Self {
        Text {
            value: value.into(),
            insertion_point,
            height,
            ..Self::new()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Text, "TEXT");

impl DxfMapped for Text {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("TEXT")
            .subclass("AcDbText")
            .property(39, "thickness", |t| t.thickness.into())
            .default_value(0.0)
            .property(10, "insertion_point", |t| t.insertion_point.into())
            .property(40, "height", |t| t.height.into())
            .property(1, "value", |t| t.value.as_str().into())
            .property(50, "rotation", |t| t.rotation.to_degrees().into())
            .default_value(0.0)
            .property(41, "width_factor", |t| t.width_factor.into())
            .default_value(1.0)
            .property(51, "oblique_angle", |t| t.oblique_angle.to_degrees().into())
            .default_value(0.0)
            .property(7, "style", |t| t.style.as_str().into())
            .default_value("Standard")
            .property(72, "horizontal_alignment", |t| {
                DxfValue::Int16(t.horizontal_alignment as i16)
            })
            .default_value(DxfValue::Int16(0))
            .property(11, "alignment_point", |t| t.alignment_point.into())
            .default_value(Vector3::ZERO)
            .property(210, "normal", |t| t.normal.into())
            .default_value(Vector3::UNIT_Z)
            .subclass("AcDbText")
            .property(73, "vertical_alignment", |t| {
                DxfValue::Int16(t.vertical_alignment as i16)
            })
            .default_value(DxfValue::Int16(0))
            .build()
    }
}
