//! XRecord object - arbitrary code/value storage, usually hung off a
//! dictionary

use super::{CadObject, ObjectCommon};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue};
use crate::types::{DxfVersion, Handle};

/// Dictionary cloning behavior flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionaryCloningFlags {
    /// Not applicable
    NotApplicable = 0,
    /// Keep existing record
    #[default]
    KeepExisting = 1,
    /// Use clone
    UseClone = 2,
    /// XRef name-based cloning
    XrefName = 3,
    /// Name-based cloning
    Name = 4,
    /// Unmangle name
    UnmangleName = 5,
}

impl DictionaryCloningFlags {
    /// Create from DXF value
    pub fn from_value(value: i16) -> Self {
        match value {
            1 => DictionaryCloningFlags::KeepExisting,
            2 => DictionaryCloningFlags::UseClone,
            3 => DictionaryCloningFlags::XrefName,
            4 => DictionaryCloningFlags::Name,
            5 => DictionaryCloningFlags::UnmangleName,
            _ => DictionaryCloningFlags::NotApplicable,
        }
    }

    /// Convert to DXF value
    pub fn to_value(&self) -> i16 {
        *self as i16
    }
}

/// XRecord object
///
/// Entries are written verbatim after the mapped fields; a value whose kind
/// does not match its code fails the write with an encoding error.
#[derive(Debug, Clone, Default)]
pub struct XRecord {
    pub common: ObjectCommon,
    /// Cloning behaviour (code 280)
    pub cloning_flags: DictionaryCloningFlags,
    /// Data in write order
    pub entries: Vec<(i32, DxfValue)>,
}

impl XRecord {
    /// Create an empty record owned by `owner`
    pub fn new(owner: Handle) -> Self {
        Self {
            common: ObjectCommon::owned_by(owner),
            ..Default::default()
        }
    }

    /// Append an entry
    pub fn push(&mut self, code: i32, value: impl Into<DxfValue>) {
        self.entries.push((code, value.into()));
    }

    /// First value stored under `code`
    pub fn get(&self, code: i32) -> Option<&DxfValue> {
        self.entries.iter().find(|(c, _)| *c == code).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CadObject for XRecord {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn object_name(&self) -> &'static str {
        "XRECORD"
    }
}

impl DxfMapped for XRecord {
    fn build_class_map() -> DxfClassMap<Self> {
        DxfClassMap::<Self>::builder("XRECORD")
            .subclass("AcDbXrecord")
            .property(280, "cloning_flags", |x| {
                DxfValue::Byte(x.cloning_flags.to_value() as u8)
            })
            .since(DxfVersion::AC1015)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut x = XRecord::new(Handle::new(0x1A));
        x.push(1, "payload");
        x.push(40, 2.5);
        x.push(70, 3i16);

        assert_eq!(x.len(), 3);
        assert_eq!(x.get(40), Some(&DxfValue::Double(2.5)));
        assert_eq!(x.get(1), Some(&DxfValue::String("payload".into())));
        assert_eq!(x.owner(), Some(Handle::new(0x1A)));
    }

    #[test]
    fn test_cloning_flags() {
        assert_eq!(DictionaryCloningFlags::from_value(3), DictionaryCloningFlags::XrefName);
        assert_eq!(DictionaryCloningFlags::default().to_value(), 1);
        assert_eq!(DictionaryCloningFlags::from_value(42), DictionaryCloningFlags::NotApplicable);
    }
}
