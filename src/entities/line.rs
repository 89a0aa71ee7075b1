//! Line entity

use super::{impl_entity, EntityCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped};
use crate::types::Vector3;

/// A line entity defined by two endpoints
#[derive(Debug, Clone)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Vector3::ZERO,
            end: Vector3::ZERO,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Line, "LINE");

impl DxfMapped for Line {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("LINE")
            .subclass("AcDbLine")
            .property(39, "thickness", |l| l.thickness.into())
            .default_value(0.0)
            .property(10, "start", |l| l.start.into())
            .property(11, "end", |l| l.end.into())
            .property(210, "normal", |l| l.normal.into())
            .default_value(Vector3::UNIT_Z)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::{class_map, DxfTokenWriter, DxfValue};
    use crate::types::DxfVersion;

    #[test]
    fn test_line_fields() {
        let mut line = Line::from_points(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        line.thickness = 2.0;

        let mut w = DxfTokenWriter::new();
        class_map::<Line>().write(&line, DxfVersion::AC1015, &mut w).unwrap();

        let codes: Vec<i32> = w.tokens().iter().map(|t| t.code).collect();
        assert_eq!(codes, vec![100, 39, 10, 20, 30, 11, 21, 31]);
        assert_eq!(w.tokens()[5].value, DxfValue::Double(10.0));
    }
}
