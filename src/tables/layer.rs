//! Layer table entry

use bitflags::bitflags;

use super::{impl_table_object, TableEntry};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::ObjectCommon;
use crate::types::{Color, DxfVersion, Handle, LineWeight};

bitflags! {
    /// Standard layer flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i16 {
        /// Layer is frozen
        const FROZEN = 0x1;
        /// Layer is frozen by default in new viewports
        const FROZEN_NEW_VIEWPORTS = 0x2;
        /// Layer is locked
        const LOCKED = 0x4;
        /// Layer depends on an external reference
        const XREF_DEPENDENT = 0x10;
    }
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    pub common: ObjectCommon,
    /// Layer name
    pub name: String,
    /// Layer flags
    pub flags: LayerFlags,
    /// Layer color
    pub color: Color,
    /// Layer is turned off (written as a negative color index)
    pub off: bool,
    /// Linetype name
    pub line_type: String,
    /// Line weight
    pub line_weight: LineWeight,
    /// Layer is plotted
    pub is_plottable: bool,
    /// Plot style name object
    pub plot_style: Handle,
    /// Material object
    pub material: Handle,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            common: ObjectCommon::default(),
            name: name.into(),
            flags: LayerFlags::empty(),
            color: Color::WHITE,
            off: false,
            line_type: "Continuous".to_string(),
            line_weight: LineWeight::Default,
            is_plottable: true,
            plot_style: Handle::NULL,
            material: Handle::NULL,
        }
    }

    /// Create the standard layer "0"
    pub fn layer_0() -> Self {
        Self::new("0")
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }

    pub fn freeze(&mut self) {
        self.flags.insert(LayerFlags::FROZEN);
    }

    pub fn thaw(&mut self) {
        self.flags.remove(LayerFlags::FROZEN);
    }

    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    pub fn lock(&mut self) {
        self.flags.insert(LayerFlags::LOCKED);
    }

    pub fn unlock(&mut self) {
        self.flags.remove(LayerFlags::LOCKED);
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }

    /// Check if the layer is visible (not off and not frozen)
    pub fn is_visible(&self) -> bool {
        !self.off && !self.is_frozen()
    }

    /// Color index written under code 62; negative when the layer is off
    pub fn color_index(&self) -> i16 {
        let index = self
            .color
            .index()
            .unwrap_or_else(|| self.color.approximate_index());
        if self.off {
            -index.abs()
        } else {
            index
        }
    }
}

impl TableEntry for Layer {
    const TABLE_NAME: &'static str = "LAYER";

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == "0"
    }
}

impl_table_object!(Layer);

impl DxfMapped for Layer {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("LAYER")
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbLayerTableRecord")
            .property(2, "name", |l| l.name.as_str().into())
            .property(70, "flags", |l| DxfValue::Int16(l.flags.bits()))
            .property(62, "color", |l| DxfValue::Int16(l.color_index()))
            .property(6, "line_type", |l| l.line_type.as_str().into())
            .property(290, "is_plottable", |l| l.is_plottable.into())
            .since(DxfVersion::AC1015)
            .property(370, "line_weight", |l| DxfValue::Int16(l.line_weight.value()))
            .since(DxfVersion::AC1015)
            .property(390, "plot_style", |l| l.plot_style.into())
            .since(DxfVersion::AC1015)
            .default_value(Handle::NULL)
            .property(347, "material", |l| l.material.into())
            .since(DxfVersion::AC1018)
            .default_value(Handle::NULL)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::{class_map, DxfTokenWriter};

    #[test]
    fn test_flags() {
        let mut layer = Layer::new("Walls");
        layer.freeze();
        layer.lock();
        assert!(layer.is_frozen());
        assert!(layer.is_locked());
        assert!(!layer.is_visible());
        assert_eq!(layer.flags.bits(), 5);

        layer.thaw();
        layer.unlock();
        assert!(layer.is_visible());
    }

    #[test]
    fn test_off_layer_negative_color() {
        let mut layer = Layer::with_color("Hidden", Color::RED);
        assert_eq!(layer.color_index(), 1);
        layer.off = true;
        assert_eq!(layer.color_index(), -1);
        assert!(!layer.is_visible());
    }

    #[test]
    fn test_plot_fields_gated() {
        let layer = Layer::layer_0();
        let map = class_map::<Layer>();

        let mut r14 = DxfTokenWriter::new();
        map.write(&layer, DxfVersion::AC1014, &mut r14).unwrap();
        let codes: Vec<i32> = r14.tokens().iter().map(|t| t.code).collect();
        assert_eq!(codes, vec![100, 100, 2, 70, 62, 6]);

        let mut r2000 = DxfTokenWriter::new();
        map.write(&layer, DxfVersion::AC1015, &mut r2000).unwrap();
        assert!(r2000.tokens().iter().any(|t| t.code == 290));
        assert!(r2000.tokens().iter().any(|t| t.code == 370));
    }
}
