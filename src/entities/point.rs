//! Point entity

use super::{impl_entity, EntityCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped};
use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Vector3,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Point {
    /// Create a new point at the origin
    pub fn new() -> Self {
        Point {
            common: EntityCommon::new(),
            location: Vector3::ZERO,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a new point at a specific location
    pub fn at(location: Vector3) -> Self {
        Point {
            location,
            ..Self::new()
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Point, "POINT");

impl DxfMapped for Point {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("POINT")
            .subclass("AcDbPoint")
            .property(10, "location", |p| p.location.into())
            .property(39, "thickness", |p| p.thickness.into())
            .default_value(0.0)
            .property(210, "normal", |p| p.normal.into())
            .default_value(Vector3::UNIT_Z)
            .build()
    }
}
