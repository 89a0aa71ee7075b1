//! Circle entity

use super::{impl_entity, EntityCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped};
use crate::types::Vector3;

/// A circle entity
#[derive(Debug, Clone)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Circle {
    /// Create a unit circle at the origin
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a circle from center and radius
    pub fn from_center_radius(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Circle, "CIRCLE");

impl DxfMapped for Circle {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("CIRCLE")
            .subclass("AcDbCircle")
            .property(39, "thickness", |c| c.thickness.into())
            .default_value(0.0)
            .property(10, "center", |c| c.center.into())
            .property(40, "radius", |c| c.radius.into())
            .property(210, "normal", |c| c.normal.into())
            .default_value(Vector3::UNIT_Z)
            .build()
    }
}
