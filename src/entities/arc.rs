//! Arc entity

use super::{impl_entity, EntityCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped};
use crate::types::Vector3;

/// An arc entity (portion of a circle)
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the arc
    pub center: Vector3,
    /// Radius of the arc
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Arc {
    /// Create a new quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a new arc with center, radius, and angles (radians)
    pub fn from_center_radius_angles(
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Arc, "ARC");

impl DxfMapped for Arc {
    fn build_class_map() -> DxfClassMap<Self> {
        // Angles are stored in radians and written in degrees
        DxfClassMap::<Self>::builder("ARC")
            .subclass("AcDbCircle")
            .property(39, "thickness", |a| a.thickness.into())
            .default_value(0.0)
            .property(10, "center", |a| a.center.into())
            .property(40, "radius", |a| a.radius.into())
            .property(210, "normal", |a| a.normal.into())
            .default_value(Vector3::UNIT_Z)
            .subclass("AcDbArc")
            .property(50, "start_angle", |a| a.start_angle.to_degrees().into())
            .property(51, "end_angle", |a| a.end_angle.to_degrees().into())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::{class_map, DxfTokenWriter, DxfValue};
    use crate::types::DxfVersion;

    #[test]
    fn test_angles_in_degrees() {
        let arc = Arc::from_center_radius_angles(Vector3::ZERO, 2.0, 0.0, std::f64::consts::PI);
        let mut w = DxfTokenWriter::new();
        class_map::<Arc>().write(&arc, DxfVersion::AC1032, &mut w).unwrap();

        let tokens = w.tokens();
        assert!(tokens.iter().any(|t| t.is(100, "AcDbArc")));
        let end = tokens.iter().find(|t| t.code == 51).unwrap();
        assert_eq!(end.value, DxfValue::Double(180.0));
    }
}
