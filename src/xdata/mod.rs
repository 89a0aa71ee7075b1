//! Extended data (XDATA)
//!
//! Values attached to an object on behalf of registered applications, grouped
//! by the handle of the application's APPID entry. The model carries them
//! but the writer does not encode the 1000-1071 range; it only reports that a
//! payload was dropped.

use indexmap::IndexMap;

use crate::types::{Handle, Vector3};

/// One extended data value
#[derive(Debug, Clone, PartialEq)]
pub enum XDataValue {
    String(String),
    /// `{` or `}`
    ControlString(String),
    LayerName(String),
    BinaryData(Vec<u8>),
    Handle(Handle),
    Point3D(Vector3),
    Position3D(Vector3),
    Displacement3D(Vector3),
    Direction3D(Vector3),
    Real(f64),
    Distance(f64),
    ScaleFactor(f64),
    Integer16(i16),
    Integer32(i32),
}

impl XDataValue {
    /// Group code the value would be written under
    pub fn code(&self) -> i32 {
        match self {
            XDataValue::String(_) => 1000,
            XDataValue::ControlString(_) => 1002,
            XDataValue::LayerName(_) => 1003,
            XDataValue::BinaryData(_) => 1004,
            XDataValue::Handle(_) => 1005,
            XDataValue::Point3D(_) => 1010,
            XDataValue::Position3D(_) => 1011,
            XDataValue::Displacement3D(_) => 1012,
            XDataValue::Direction3D(_) => 1013,
            XDataValue::Real(_) => 1040,
            XDataValue::Distance(_) => 1041,
            XDataValue::ScaleFactor(_) => 1042,
            XDataValue::Integer16(_) => 1070,
            XDataValue::Integer32(_) => 1071,
        }
    }
}

/// Extended data of one object, keyed by APPID handle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedData {
    records: IndexMap<Handle, Vec<XDataValue>>,
}

impl ExtendedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the record of `app`, creating the record if needed
    pub fn push(&mut self, app: Handle, value: XDataValue) {
        self.records.entry(app).or_default().push(value);
    }

    /// Replace the whole record of `app`
    pub fn insert(&mut self, app: Handle, values: Vec<XDataValue>) -> Option<Vec<XDataValue>> {
        self.records.insert(app, values)
    }

    pub fn get(&self, app: Handle) -> Option<&[XDataValue]> {
        self.records.get(&app).map(Vec::as_slice)
    }

    /// Applications with a record, in insertion order
    pub fn applications(&self) -> impl Iterator<Item = Handle> + '_ {
        self.records.keys().copied()
    }

    /// Total number of values across all applications
    pub fn value_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Number of applications with a record
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no application carries a value
    pub fn is_empty(&self) -> bool {
        self.value_count() == 0
    }
}
