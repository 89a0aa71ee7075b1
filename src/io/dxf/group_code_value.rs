//! Value types declared by DXF group code ranges

use std::fmt;

/// The value kind a group code carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    None,
    String,
    Point3D,
    Double,
    Byte,
    Int16,
    Int32,
    Int64,
    Handle,
    ObjectId,
    Bool,
    Chunk,
    Comment,
    ExtendedDataString,
    ExtendedDataChunk,
    ExtendedDataHandle,
    ExtendedDataDouble,
    ExtendedDataInt16,
    ExtendedDataInt32,
}

impl GroupCodeValueType {
    /// Value type declared for a group code
    pub fn from_code(code: i32) -> Self {
        use GroupCodeValueType::*;
        match code {
            0..=4 | 6..=9 => String,
            5 | 105 => Handle,
            10..=39 => Point3D,
            40..=59 => Double,
            60..=79 => Int16,
            90..=99 => Int32,
            100..=102 => String,
            110..=149 => Double,
            160..=169 => Int64,
            170..=179 => Int16,
            210..=239 => Double,
            270..=279 => Int16,
            280..=289 => Byte,
            290..=299 => Bool,
            300..=309 => String,
            310..=319 => Chunk,
            320..=369 => ObjectId,
            370..=389 => Int16,
            390..=399 => ObjectId,
            400..=409 => Int16,
            410..=419 => String,
            420..=429 => Int32,
            430..=439 => String,
            440..=459 => Int32,
            460..=469 => Double,
            470..=479 => String,
            480..=481 => ObjectId,
            999 => Comment,
            1000..=1003 => ExtendedDataString,
            1004 => ExtendedDataChunk,
            1005 => ExtendedDataHandle,
            1010..=1059 => ExtendedDataDouble,
            1060..=1070 => ExtendedDataInt16,
            1071 => ExtendedDataInt32,
            _ => None,
        }
    }

    /// Whether a string value may be written under this type
    pub fn accepts_string(self) -> bool {
        matches!(
            self,
            Self::String | Self::Comment | Self::ExtendedDataString
        )
    }

    /// Whether a floating point value may be written under this type
    pub fn accepts_double(self) -> bool {
        matches!(
            self,
            Self::Point3D | Self::Double | Self::ExtendedDataDouble
        )
    }

    /// Whether a handle may be written under this type
    pub fn accepts_handle(self) -> bool {
        matches!(
            self,
            Self::Handle | Self::ObjectId | Self::ExtendedDataHandle
        )
    }

    /// Whether a binary chunk may be written under this type
    pub fn accepts_chunk(self) -> bool {
        matches!(self, Self::Chunk | Self::ExtendedDataChunk)
    }

    /// Whether an integer of the given width (in bytes) fits this type.
    ///
    /// Narrower integers widen into wider slots; a wider value never narrows.
    pub fn accepts_integer(self, width: u8) -> bool {
        match self {
            Self::Byte => width == 1,
            Self::Int16 | Self::ExtendedDataInt16 => width <= 2,
            Self::Int32 | Self::ExtendedDataInt32 => width <= 4,
            Self::Int64 => width <= 8,
            _ => false,
        }
    }

    /// Whether a boolean may be written under this type
    pub fn accepts_bool(self) -> bool {
        matches!(self, Self::Bool | Self::Byte | Self::Int16)
    }
}

impl fmt::Display for GroupCodeValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(GroupCodeValueType::from_code(0), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(5), GroupCodeValueType::Handle);
        assert_eq!(GroupCodeValueType::from_code(105), GroupCodeValueType::Handle);
        assert_eq!(GroupCodeValueType::from_code(20), GroupCodeValueType::Point3D);
        assert_eq!(GroupCodeValueType::from_code(48), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_code(62), GroupCodeValueType::Int16);
        assert_eq!(GroupCodeValueType::from_code(330), GroupCodeValueType::ObjectId);
        assert_eq!(GroupCodeValueType::from_code(420), GroupCodeValueType::Int32);
        assert_eq!(GroupCodeValueType::from_code(430), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(440), GroupCodeValueType::Int32);
        assert_eq!(GroupCodeValueType::from_code(80), GroupCodeValueType::None);
    }

    #[test]
    fn test_integer_widening() {
        let t = GroupCodeValueType::from_code(90);
        assert!(t.accepts_integer(2));
        assert!(t.accepts_integer(4));
        assert!(!t.accepts_integer(8));
        assert!(!GroupCodeValueType::from_code(62).accepts_integer(4));
        assert!(GroupCodeValueType::from_code(281).accepts_integer(1));
    }
}
