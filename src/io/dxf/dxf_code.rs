//! DXF group codes
//!
//! Group codes define the type of data that follows in a DXF file.
//! Only the codes the common encoders refer to by name are listed here;
//! type-specific fields use their numeric code directly in the field maps.

/// Named DXF group codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DxfCode {
    /// Invalid code
    Invalid = -9999,

    /// Text string indicating the entity type / structural marker
    Start = 0,
    /// Primary text value
    Text = 1,
    /// Name (section name, table name, entry name)
    Name = 2,
    /// Other text or name values (dictionary keys)
    OtherName = 3,
    /// Object handle
    Handle = 5,
    /// Linetype name
    LinetypeName = 6,
    /// Layer name
    LayerName = 8,
    /// Header variable name
    CLShapeText = 9,

    /// Primary X coordinate
    XCoordinate = 10,

    /// Linetype scale
    LinetypeScale = 48,
    /// Visibility (0 = visible, 1 = invisible)
    Visibility = 60,
    /// Color number
    Color = 62,
    /// Model/paper space indicator
    PaperSpace = 67,
    /// Integer flags / table entry count
    Int70 = 70,

    /// Subclass data marker
    SubclassMarker = 100,
    /// Control string (`{NAME` / `}`)
    ControlString = 102,
    /// Dimension-style handle
    DimVarHandle = 105,

    /// Soft pointer to the owner
    SoftPointerId = 330,
    /// Soft owner (dictionary entries)
    SoftOwnerId = 350,
    /// Hard owner (extended dictionary)
    HardOwnerId = 360,

    /// Line weight
    Lineweight = 370,
    /// 24-bit true color
    TrueColor = 420,
    /// Color name (book color)
    ColorName = 430,
    /// Transparency (alpha value)
    Transparency = 440,

    /// Comment
    Comment = 999,
}

impl DxfCode {
    /// Convert an i32 to a named DxfCode, `Invalid` when the code has no name here
    pub fn from_i32(code: i32) -> Self {
        match code {
            0 => DxfCode::Start,
            1 => DxfCode::Text,
            2 => DxfCode::Name,
            3 => DxfCode::OtherName,
            5 => DxfCode::Handle,
            6 => DxfCode::LinetypeName,
            8 => DxfCode::LayerName,
            9 => DxfCode::CLShapeText,
            10 => DxfCode::XCoordinate,
            48 => DxfCode::LinetypeScale,
            60 => DxfCode::Visibility,
            62 => DxfCode::Color,
            67 => DxfCode::PaperSpace,
            70 => DxfCode::Int70,
            100 => DxfCode::SubclassMarker,
            102 => DxfCode::ControlString,
            105 => DxfCode::DimVarHandle,
            330 => DxfCode::SoftPointerId,
            350 => DxfCode::SoftOwnerId,
            360 => DxfCode::HardOwnerId,
            370 => DxfCode::Lineweight,
            420 => DxfCode::TrueColor,
            430 => DxfCode::ColorName,
            440 => DxfCode::Transparency,
            999 => DxfCode::Comment,
            _ => DxfCode::Invalid,
        }
    }

    /// Convert DxfCode to i32
    pub const fn to_i32(self) -> i32 {
        self as i32
    }
}

impl From<DxfCode> for i32 {
    fn from(code: DxfCode) -> i32 {
        code.to_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_codes_roundtrip() {
        for code in [0, 5, 8, 62, 102, 105, 330, 360, 370, 420, 430, 440] {
            assert_eq!(DxfCode::from_i32(code).to_i32(), code);
        }
    }

    #[test]
    fn test_unnamed_code_is_invalid() {
        assert_eq!(DxfCode::from_i32(41), DxfCode::Invalid);
        assert_eq!(i32::from(DxfCode::Lineweight), 370);
    }
}
