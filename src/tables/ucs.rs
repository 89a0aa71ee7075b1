//! User Coordinate System table entry

use super::{impl_table_object, TableEntry};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::ObjectCommon;
use crate::types::{DxfVersion, Handle, Vector2, Vector3};

/// Orthographic classification of a UCS (codes 71 and 79)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrthographicType {
    /// Not orthographic
    #[default]
    None = 0,
    Top = 1,
    Bottom = 2,
    Front = 3,
    Back = 4,
    Left = 5,
    Right = 6,
}

impl OrthographicType {
    /// The six orthographic views in the order their origins are written
    pub const VIEWS: [OrthographicType; 6] = [
        OrthographicType::Top,
        OrthographicType::Bottom,
        OrthographicType::Front,
        OrthographicType::Back,
        OrthographicType::Left,
        OrthographicType::Right,
    ];

    pub fn from_value(value: i16) -> Self {
        match value {
            1 => OrthographicType::Top,
            2 => OrthographicType::Bottom,
            3 => OrthographicType::Front,
            4 => OrthographicType::Back,
            5 => OrthographicType::Left,
            6 => OrthographicType::Right,
            _ => OrthographicType::None,
        }
    }

    pub fn value(self) -> i16 {
        self as i16
    }
}

/// A User Coordinate System (UCS) table entry
///
/// The orthographic classification is fixed when the entry is created:
/// use [`Ucs::new_orthographic`] to build a classified entry.
#[derive(Debug, Clone)]
pub struct Ucs {
    pub common: ObjectCommon,
    /// UCS name
    pub name: String,
    /// Standard flags
    pub flags: i16,
    /// Origin point
    pub origin: Vector3,
    /// X-axis direction
    pub x_axis: Vector3,
    /// Y-axis direction
    pub y_axis: Vector3,
    /// Elevation
    pub elevation: f64,
    /// Base UCS for the orthographic origins (NULL = world)
    pub base_ucs: Handle,
    /// Origins of the six orthographic views, indexed like [`OrthographicType::VIEWS`]
    pub orthographic_origins: [Vector3; 6],
    /// Paper-space insertion base
    pub paper_space_insertion_base: Vector3,
    /// Paper-space extents
    pub paper_space_extents: (Vector3, Vector3),
    /// Paper-space limits
    pub paper_space_limits: (Vector2, Vector2),
    orthographic_type: OrthographicType,
    orthographic_view_type: OrthographicType,
}

impl Ucs {
    /// Create a new, non-orthographic UCS aligned with the world axes
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_orthographic(name, OrthographicType::None, OrthographicType::None)
    }

    /// Create a UCS with the given orthographic classification
    pub fn new_orthographic(
        name: impl Into<String>,
        orthographic_type: OrthographicType,
        orthographic_view_type: OrthographicType,
    ) -> Self {
        Ucs {
            common: ObjectCommon::default(),
            name: name.into(),
            flags: 0,
            origin: Vector3::ZERO,
            x_axis: Vector3::UNIT_X,
            y_axis: Vector3::UNIT_Y,
            elevation: 0.0,
            base_ucs: Handle::NULL,
            orthographic_origins: [Vector3::ZERO; 6],
            paper_space_insertion_base: Vector3::ZERO,
            paper_space_extents: (Vector3::ZERO, Vector3::ZERO),
            paper_space_limits: (Vector2::ZERO, Vector2::ZERO),
            orthographic_type,
            orthographic_view_type,
        }
    }

    /// Create a UCS with specific origin and axes
    pub fn from_origin_axes(
        name: impl Into<String>,
        origin: Vector3,
        x_axis: Vector3,
        y_axis: Vector3,
    ) -> Self {
        Ucs {
            origin,
            x_axis,
            y_axis,
            ..Self::new(name)
        }
    }

    /// Get the Z-axis direction (cross product of X and Y)
    pub fn z_axis(&self) -> Vector3 {
        self.x_axis.cross(&self.y_axis)
    }

    pub fn orthographic_type(&self) -> OrthographicType {
        self.orthographic_type
    }

    pub fn orthographic_view_type(&self) -> OrthographicType {
        self.orthographic_view_type
    }

    /// Origin of one of the six orthographic views
    pub fn orthographic_origin(&self, view: OrthographicType) -> Option<Vector3> {
        OrthographicType::VIEWS
            .iter()
            .position(|v| *v == view)
            .map(|i| self.orthographic_origins[i])
    }
}

impl TableEntry for Ucs {
    const TABLE_NAME: &'static str = "UCS";

    fn name(&self) -> &str {
        &self.name
    }
}

impl_table_object!(Ucs);

impl DxfMapped for Ucs {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("UCS")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbUCSTableRecord")
            .property(2, "name", |u| u.name.as_str().into())
            .property(70, "flags", |u| DxfValue::Int16(u.flags))
            .property(10, "origin", |u| u.origin.into())
            .property(11, "x_axis", |u| u.x_axis.into())
            .property(12, "y_axis", |u| u.y_axis.into())
            .property(79, "orthographic_view_type", |u| {
                DxfValue::Int16(u.orthographic_view_type.value())
            })
            .since(DxfVersion::AC1015)
            .property(146, "elevation", |u| u.elevation.into())
            .since(DxfVersion::AC1015)
            .property(346, "base_ucs", |u| u.base_ucs.into())
            .since(DxfVersion::AC1015)
            .default_value(Handle::NULL)
            .property(71, "orthographic_type", |u| {
                DxfValue::Int16(u.orthographic_type.value())
            })
            .since(DxfVersion::AC1015)
            .default_value(DxfValue::Int16(0))
            .property(71, "top", |_| DxfValue::Int16(OrthographicType::Top.value()))
            .since(DxfVersion::AC1015)
            .property(13, "top_origin", |u| u.orthographic_origins[0].into())
            .since(DxfVersion::AC1015)
            .property(71, "bottom", |_| DxfValue::Int16(OrthographicType::Bottom.value()))
            .since(DxfVersion::AC1015)
            .property(13, "bottom_origin", |u| u.orthographic_origins[1].into())
            .since(DxfVersion::AC1015)
            .property(71, "front", |_| DxfValue::Int16(OrthographicType::Front.value()))
            .since(DxfVersion::AC1015)
            .property(13, "front_origin", |u| u.orthographic_origins[2].into())
            .since(DxfVersion::AC1015)
            .property(71, "back", |_| DxfValue::Int16(OrthographicType::Back.value()))
            .since(DxfVersion::AC1015)
            .property(13, "back_origin", |u| u.orthographic_origins[3].into())
            .since(DxfVersion::AC1015)
            .property(71, "left", |_| DxfValue::Int16(OrthographicType::Left.value()))
            .since(DxfVersion::AC1015)
            .property(13, "left_origin", |u| u.orthographic_origins[4].into())
            .since(DxfVersion::AC1015)
            .property(71, "right", |_| DxfValue::Int16(OrthographicType::Right.value()))
            .since(DxfVersion::AC1015)
            .property(13, "right_origin", |u| u.orthographic_origins[5].into())
            .since(DxfVersion::AC1015)
            .build()
    }
}
