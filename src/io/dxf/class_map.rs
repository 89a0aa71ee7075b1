//! Field map registry
//!
//! Each mapped type describes, once, which of its attributes are written,
//! in what order, under which group code, from which format version on and
//! with which default value (a property equal to its default is skipped).
//! The description is built lazily the first time a type is requested and
//! shared afterwards.
//!
//! This is the only place where version differences are expressed: the
//! encoders never compare versions themselves.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use once_cell::sync::Lazy;

use super::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::error::Result;
use crate::types::{DxfVersion, Handle, Vector2, Vector3};

/// A typed value read out of a mapped object
#[derive(Debug, Clone, PartialEq)]
pub enum DxfValue {
    String(String),
    Byte(u8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    Handle(Handle),
    Point2(Vector2),
    Point3(Vector3),
    Binary(Vec<u8>),
}

impl DxfValue {
    /// Write this value under `code`; points expand to one token per axis.
    pub fn write_to<W: DxfStreamWriter + ?Sized>(&self, code: i32, writer: &mut W) -> Result<()> {
        match self {
            DxfValue::String(s) => writer.write_string(code, s),
            DxfValue::Byte(v) => writer.write_byte(code, *v),
            DxfValue::Int16(v) => writer.write_i16(code, *v),
            DxfValue::Int32(v) => writer.write_i32(code, *v),
            DxfValue::Int64(v) => writer.write_i64(code, *v),
            DxfValue::Double(v) => writer.write_double(code, *v),
            DxfValue::Bool(v) => writer.write_bool(code, *v),
            DxfValue::Handle(h) => writer.write_handle(code, *h),
            DxfValue::Point2(p) => writer.write_point2d(code, *p),
            DxfValue::Point3(p) => writer.write_point3d(code, *p),
            DxfValue::Binary(data) => writer.write_binary(code, data),
        }
    }
}

impl fmt::Display for DxfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DxfValue::String(s) => write!(f, "{}", s),
            DxfValue::Byte(v) => write!(f, "{}", v),
            DxfValue::Int16(v) => write!(f, "{}", v),
            DxfValue::Int32(v) => write!(f, "{}", v),
            DxfValue::Int64(v) => write!(f, "{}", v),
            DxfValue::Double(v) => write!(f, "{}", v),
            DxfValue::Bool(v) => write!(f, "{}", *v as u8),
            DxfValue::Handle(h) => write!(f, "{:X}", h.value()),
            DxfValue::Point2(p) => write!(f, "{}", p),
            DxfValue::Point3(p) => write!(f, "{}", p),
            DxfValue::Binary(data) => write!(f, "<{} bytes>", data.len()),
        }
    }
}

impl From<&str> for DxfValue {
    fn from(s: &str) -> Self {
        DxfValue::String(s.to_string())
    }
}

impl From<String> for DxfValue {
    fn from(s: String) -> Self {
        DxfValue::String(s)
    }
}

impl From<u8> for DxfValue {
    fn from(v: u8) -> Self {
        DxfValue::Byte(v)
    }
}

impl From<i16> for DxfValue {
    fn from(v: i16) -> Self {
        DxfValue::Int16(v)
    }
}

impl From<i32> for DxfValue {
    fn from(v: i32) -> Self {
        DxfValue::Int32(v)
    }
}

impl From<i64> for DxfValue {
    fn from(v: i64) -> Self {
        DxfValue::Int64(v)
    }
}

impl From<f64> for DxfValue {
    fn from(v: f64) -> Self {
        DxfValue::Double(v)
    }
}

impl From<bool> for DxfValue {
    fn from(v: bool) -> Self {
        DxfValue::Bool(v)
    }
}

impl From<Handle> for DxfValue {
    fn from(h: Handle) -> Self {
        DxfValue::Handle(h)
    }
}

impl From<Vector2> for DxfValue {
    fn from(p: Vector2) -> Self {
        DxfValue::Point2(p)
    }
}

impl From<Vector3> for DxfValue {
    fn from(p: Vector3) -> Self {
        DxfValue::Point3(p)
    }
}

/// One mapped attribute
pub struct DxfProperty<T> {
    /// Group code the value is written under (the x code for points)
    pub code: i32,
    /// Attribute name; for header variables the `$NAME` written under code 9
    pub name: &'static str,
    /// Oldest version in which the attribute exists
    pub min_version: DxfVersion,
    /// Value that suppresses the token when matched
    pub default: Option<DxfValue>,
    getter: fn(&T) -> DxfValue,
}

impl<T> DxfProperty<T> {
    /// Read the attribute from `obj`
    pub fn value(&self, obj: &T) -> DxfValue {
        (self.getter)(obj)
    }

    /// Whether the attribute exists in `version`
    pub fn is_available(&self, version: DxfVersion) -> bool {
        version >= self.min_version
    }

    /// The value to emit, or `None` when the version gate or the default
    /// suppresses it.
    pub fn emitted_value(&self, obj: &T, version: DxfVersion) -> Option<DxfValue> {
        if !self.is_available(version) {
            return None;
        }
        let value = self.value(obj);
        match &self.default {
            Some(default) if *default == value => None,
            _ => Some(value),
        }
    }
}

impl<T> fmt::Debug for DxfProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DxfProperty")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("min_version", &self.min_version)
            .field("default", &self.default)
            .finish()
    }
}

/// Entry of a class map, in write order
#[derive(Debug)]
pub enum DxfMapEntry<T> {
    /// `100` subclass marker
    Subclass(&'static str),
    /// A mapped attribute
    Property(DxfProperty<T>),
}

/// Ordered description of how a type is written
#[derive(Debug)]
pub struct DxfClassMap<T> {
    /// DXF object name (`LINE`, `UCS`, ...); empty for partial maps
    pub name: &'static str,
    entries: Vec<DxfMapEntry<T>>,
}

impl<T> DxfClassMap<T> {
    /// Start describing a type
    pub fn builder(name: &'static str) -> DxfClassMapBuilder<T> {
        DxfClassMapBuilder {
            name,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[DxfMapEntry<T>] {
        &self.entries
    }

    /// Iterate the mapped attributes, skipping subclass markers
    pub fn properties(&self) -> impl Iterator<Item = &DxfProperty<T>> {
        self.entries.iter().filter_map(|e| match e {
            DxfMapEntry::Property(p) => Some(p),
            DxfMapEntry::Subclass(_) => None,
        })
    }

    /// Attribute written under `code`
    pub fn property(&self, code: i32) -> Option<&DxfProperty<T>> {
        self.properties().find(|p| p.code == code)
    }

    /// Attribute with the given name
    pub fn property_named(&self, name: &str) -> Option<&DxfProperty<T>> {
        self.properties().find(|p| p.name == name)
    }

    /// Write every entry of the map for `obj`, honoring version gates and
    /// default suppression.
    pub fn write<W: DxfStreamWriter + ?Sized>(
        &self,
        obj: &T,
        version: DxfVersion,
        writer: &mut W,
    ) -> Result<()> {
        for entry in &self.entries {
            match entry {
                DxfMapEntry::Subclass(marker) => writer.write_subclass(marker)?,
                DxfMapEntry::Property(prop) => {
                    if let Some(value) = prop.emitted_value(obj, version) {
                        value.write_to(prop.code, writer)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Fluent builder for [`DxfClassMap`].
///
/// `since` and `default_value` refine the most recently added property.
pub struct DxfClassMapBuilder<T> {
    name: &'static str,
    entries: Vec<DxfMapEntry<T>>,
}

impl<T> DxfClassMapBuilder<T> {
    /// Add a subclass marker
    pub fn subclass(mut self, marker: &'static str) -> Self {
        self.entries.push(DxfMapEntry::Subclass(marker));
        self
    }

    /// Add an attribute available in every version, never suppressed
    pub fn property(mut self, code: i32, name: &'static str, getter: fn(&T) -> DxfValue) -> Self {
        self.entries.push(DxfMapEntry::Property(DxfProperty {
            code,
            name,
            min_version: DxfVersion::AC1009,
            default: None,
            getter,
        }));
        self
    }

    /// Restrict the last attribute to `version` and later
    pub fn since(mut self, version: DxfVersion) -> Self {
        if let Some(prop) = self.last_property() {
            prop.min_version = version;
        }
        self
    }

    /// Skip the last attribute while it equals `default`
    pub fn default_value(mut self, default: impl Into<DxfValue>) -> Self {
        let default = default.into();
        if let Some(prop) = self.last_property() {
            prop.default = Some(default);
        }
        self
    }

    fn last_property(&mut self) -> Option<&mut DxfProperty<T>> {
        match self.entries.last_mut() {
            Some(DxfMapEntry::Property(p)) => Some(p),
            _ => None,
        }
    }

    pub fn build(self) -> DxfClassMap<T> {
        DxfClassMap {
            name: self.name,
            entries: self.entries,
        }
    }
}

/// Types that describe their DXF layout through a class map
pub trait DxfMapped: Sized + 'static {
    fn build_class_map() -> DxfClassMap<Self>;
}

type Registry = RwLock<AHashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

static REGISTRY: Lazy<Registry> = Lazy::new(|| RwLock::new(AHashMap::new()));

/// Class map of `T`, built on first request and cached process-wide.
pub fn class_map<T: DxfMapped>() -> Arc<DxfClassMap<T>> {
    let id = TypeId::of::<T>();

    let cached = REGISTRY
        .read()
        .ok()
        .and_then(|registry| registry.get(&id).cloned());
    if let Some(map) = cached.and_then(|m| m.downcast::<DxfClassMap<T>>().ok()) {
        return map;
    }

    let built = Arc::new(T::build_class_map());
    tracing::trace!(name = built.name, "class map built");

    match REGISTRY.write() {
        Ok(mut registry) => {
            // A concurrent caller may have won the race; keep its table.
            let shared = registry
                .entry(id)
                .or_insert_with(|| built.clone() as Arc<dyn Any + Send + Sync>)
                .clone();
            shared.downcast::<DxfClassMap<T>>().unwrap_or(built)
        }
        Err(_) => built,
    }
}
