//! Line type table entry

use super::{impl_table_object, TableEntry};
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::ObjectCommon;
use crate::types::DxfVersion;

/// Line type element (dash, dot, space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTypeElement {
    /// Length of the element (positive = dash, negative = space, 0 = dot)
    pub length: f64,
    /// Complex element type (code 74, 0 for simple segments)
    pub shape_flags: i16,
}

impl LineTypeElement {
    /// Create a dash element
    pub fn dash(length: f64) -> Self {
        LineTypeElement {
            length: length.abs(),
            shape_flags: 0,
        }
    }

    /// Create a space element
    pub fn space(length: f64) -> Self {
        LineTypeElement {
            length: -length.abs(),
            shape_flags: 0,
        }
    }

    /// Create a dot element
    pub fn dot() -> Self {
        LineTypeElement {
            length: 0.0,
            shape_flags: 0,
        }
    }

    pub fn is_dash(&self) -> bool {
        self.length > 0.0
    }

    pub fn is_space(&self) -> bool {
        self.length < 0.0
    }

    pub fn is_dot(&self) -> bool {
        self.length == 0.0
    }
}

impl DxfMapped for LineTypeElement {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("")
            .property(49, "length", |e| e.length.into())
            .property(74, "shape_flags", |e| DxfValue::Int16(e.shape_flags))
            .since(DxfVersion::AC1012)
            .build()
    }
}

/// A line type table entry
///
/// The element count, pattern length and elements follow the mapped
/// fields; see [`LineType::element_count`].
#[derive(Debug, Clone)]
pub struct LineType {
    pub common: ObjectCommon,
    /// Line type name
    pub name: String,
    /// Standard flags
    pub flags: i16,
    /// Description
    pub description: String,
    /// Pattern elements
    elements: Vec<LineTypeElement>,
}

impl LineType {
    /// Create a new line type without pattern
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            common: ObjectCommon::default(),
            name: name.into(),
            flags: 0,
            description: String::new(),
            elements: Vec::new(),
        }
    }

    /// Create the standard "Continuous" line type
    pub fn continuous() -> Self {
        LineType {
            description: "Solid line".to_string(),
            ..Self::new("Continuous")
        }
    }

    pub fn by_layer() -> Self {
        Self::new("ByLayer")
    }

    pub fn by_block() -> Self {
        Self::new("ByBlock")
    }

    /// Create a dashed line type
    pub fn dashed() -> Self {
        let mut lt = LineType::new("Dashed");
        lt.description = "__ __ __ __ __ __".to_string();
        lt.add_element(LineTypeElement::dash(0.5));
        lt.add_element(LineTypeElement::space(0.25));
        lt
    }

    /// Append a pattern element
    pub fn add_element(&mut self, element: LineTypeElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[LineTypeElement] {
        &self.elements
    }

    /// Element count as written under code 73
    pub fn element_count(&self) -> Result<i16> {
        i16::try_from(self.elements.len()).map_err(|_| {
            DxfError::encoding(format!(
                "line type '{}' has {} elements; code 73 holds at most {}",
                self.name,
                self.elements.len(),
                i16::MAX
            ))
        })
    }

    /// Total pattern length: the sum of the absolute element lengths
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.length.abs()).sum()
    }

    pub fn is_continuous(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TableEntry for LineType {
    const TABLE_NAME: &'static str = "LTYPE";

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        ["Continuous", "ByLayer", "ByBlock"]
            .iter()
            .any(|n| self.name.eq_ignore_ascii_case(n))
    }
}

impl_table_object!(LineType);

impl DxfMapped for LineType {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("LTYPE")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbLinetypeTableRecord")
            .property(2, "name", |l| l.name.as_str().into())
            .property(70, "flags", |l| DxfValue::Int16(l.flags))
            .property(3, "description", |l| l.description.as_str().into())
            // Alignment code, always 'A'
            .property(72, "alignment", |_| DxfValue::Int16(65))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::{class_map, DxfTokenWriter};
    use crate::types::DxfVersion;

    #[test]
    fn test_dashed_pattern() {
        let lt = LineType::dashed();
        assert_eq!(lt.elements().len(), 2);
        assert!(lt.elements()[0].is_dash());
        assert!(lt.elements()[1].is_space());
        assert!((lt.pattern_length() - 0.75).abs() < 1e-12);
        assert!(!lt.is_continuous());
    }

    #[test]
    fn test_standard_names() {
        assert!(LineType::continuous().is_standard());
        assert!(LineType::by_layer().is_standard());
        assert!(!LineType::dashed().is_standard());
    }

    #[test]
    fn test_map_ends_with_alignment() {
        let lt = LineType::dashed();
        let mut w = DxfTokenWriter::new();
        class_map::<LineType>().write(&lt, DxfVersion::AC1015, &mut w).unwrap();

        let tokens = w.tokens();
        assert_eq!(tokens.last().map(|t| (t.code, &t.value)), Some((72, &DxfValue::Int16(65))));
    }

    #[test]
    fn test_element_shape_flags_since_r13() {
        let dash = LineTypeElement::dash(0.5);
        let map = class_map::<LineTypeElement>();

        let mut r12 = DxfTokenWriter::new();
        map.write(&dash, DxfVersion::AC1009, &mut r12).unwrap();
        let codes: Vec<i32> = r12.tokens().iter().map(|t| t.code).collect();
        assert_eq!(codes, vec![49]);

        let mut r13 = DxfTokenWriter::new();
        map.write(&dash, DxfVersion::AC1012, &mut r13).unwrap();
        let codes: Vec<i32> = r13.tokens().iter().map(|t| t.code).collect();
        assert_eq!(codes, vec![49, 74]);
    }

    #[test]
    fn test_element_count_limit() {
        let mut lt = LineType::new("Dense");
        for _ in 0..i16::MAX {
            lt.add_element(LineTypeElement::dot());
        }
        assert_eq!(lt.element_count().unwrap(), i16::MAX);

        lt.add_element(LineTypeElement::dot());
        assert!(matches!(lt.element_count(), Err(DxfError::Encoding(_))));
    }
}
