//! CAD entity types and traits

use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::objects::{CadObject, ObjectCommon};
use crate::types::{BookColor, Color, DxfVersion, Handle, LineWeight, Transparency};

pub mod arc;
pub mod block;
pub mod circle;
pub mod line;
pub mod point;
pub mod text;

pub use arc::Arc;
pub use block::{Block, BlockEnd};
pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};

/// Base trait for all CAD entities
pub trait Entity: CadObject {
    /// Common entity data
    fn entity(&self) -> &EntityCommon;

    /// Mutable common entity data
    fn entity_mut(&mut self) -> &mut EntityCommon;

    fn layer(&self) -> Option<Handle> {
        self.entity().layer
    }

    fn set_layer(&mut self, layer: Handle) {
        self.entity_mut().layer = Some(layer);
    }

    fn line_type(&self) -> Option<Handle> {
        self.entity().line_type
    }

    fn set_line_type(&mut self, line_type: Handle) {
        self.entity_mut().line_type = Some(line_type);
    }

    fn color(&self) -> Color {
        self.entity().color
    }

    fn set_color(&mut self, color: Color) {
        self.entity_mut().color = color;
    }

    fn transparency(&self) -> Transparency {
        self.entity().transparency
    }

    fn set_transparency(&mut self, transparency: Transparency) {
        self.entity_mut().transparency = transparency;
    }
}

/// Implements [`CadObject`] and [`Entity`] for a struct with a
/// `common: EntityCommon` field.
macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl $crate::objects::CadObject for $ty {
            fn common(&self) -> &$crate::objects::ObjectCommon {
                &self.common.object
            }

            fn common_mut(&mut self) -> &mut $crate::objects::ObjectCommon {
                &mut self.common.object
            }

            fn object_name(&self) -> &'static str {
                $name
            }
        }

        impl $crate::entities::Entity for $ty {
            fn entity(&self) -> &$crate::entities::EntityCommon {
                &self.common
            }

            fn entity_mut(&mut self) -> &mut $crate::entities::EntityCommon {
                &mut self.common
            }
        }
    };
}

pub(crate) use impl_entity;

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Graph node data
    pub object: ObjectCommon,
    /// Layer table entry
    pub layer: Option<Handle>,
    /// Linetype table entry
    pub line_type: Option<Handle>,
    /// Color
    pub color: Color,
    /// Named color; takes precedence over `color`
    pub book_color: Option<BookColor>,
    /// Transparency; `BY_LAYER` means unset
    pub transparency: Transparency,
    /// Linetype scale
    pub linetype_scale: f64,
    /// Visibility flag
    pub invisible: bool,
    /// Line weight
    pub line_weight: LineWeight,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            object: ObjectCommon::default(),
            layer: None,
            line_type: None,
            color: Color::ByLayer,
            book_color: None,
            transparency: Transparency::BY_LAYER,
            linetype_scale: 1.0,
            invisible: false,
            line_weight: LineWeight::ByLayer,
        }
    }

    /// Create with a specific layer and linetype
    pub fn with_resources(layer: Handle, line_type: Handle) -> Self {
        EntityCommon {
            layer: Some(layer),
            line_type: Some(line_type),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfMapped for EntityCommon {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("")
            .property(48, "linetype_scale", |e| e.linetype_scale.into())
            .since(DxfVersion::AC1012)
            .default_value(1.0)
            .property(60, "invisible", |e| DxfValue::Int16(e.invisible as i16))
            .since(DxfVersion::AC1012)
            .default_value(DxfValue::Int16(0))
            .build()
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone)]
pub enum EntityType {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Text(Text),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Text(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Text(e) => e,
        }
    }

    pub fn handle(&self) -> Handle {
        self.as_entity().handle()
    }

    /// DXF entity name (`LINE`, `CIRCLE`, ...)
    pub fn object_name(&self) -> &'static str {
        self.as_entity().object_name()
    }
}

macro_rules! entity_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for EntityType {
                fn from(e: $variant) -> Self {
                    EntityType::$variant(e)
                }
            }
        )*
    };
}

entity_from!(Point, Line, Circle, Arc, Text);
