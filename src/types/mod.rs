//! Value types shared by the document model and the writers

mod color;
mod handle;
mod line_weight;
mod transparency;
mod vector;

pub use color::{BookColor, Color};
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use transparency::Transparency;
pub use vector::{Vector2, Vector3};

use std::fmt;

/// DXF format versions, ordered oldest to newest.
///
/// The ordering is what the field-map registry compares against when it
/// decides whether a property exists in the target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxfVersion {
    /// Unrecognized version string
    Unknown,
    /// Release 12
    AC1009,
    /// Release 13
    AC1012,
    /// Release 14
    AC1014,
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018
    AC1032,
}

impl DxfVersion {
    /// The `$ACADVER` string for this version
    pub fn to_dxf_string(&self) -> &'static str {
        match self {
            DxfVersion::Unknown => "UNKNOWN",
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Parse an `$ACADVER` string
    pub fn from_version_string(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "AC1009" => DxfVersion::AC1009,
            "AC1012" => DxfVersion::AC1012,
            "AC1014" => DxfVersion::AC1014,
            "AC1015" => DxfVersion::AC1015,
            "AC1018" => DxfVersion::AC1018,
            "AC1021" => DxfVersion::AC1021,
            "AC1024" => DxfVersion::AC1024,
            "AC1027" => DxfVersion::AC1027,
            "AC1032" => DxfVersion::AC1032,
            _ => DxfVersion::Unknown,
        }
    }

    /// AutoCAD 2007 and later store text as UTF-8; earlier releases use the
    /// `$DWGCODEPAGE` encoding.
    pub fn is_unicode(&self) -> bool {
        *self >= DxfVersion::AC1021
    }

    /// R12 binary DXF writes group codes as single bytes
    pub fn has_single_byte_binary_codes(&self) -> bool {
        *self < DxfVersion::AC1012
    }
}

impl Default for DxfVersion {
    fn default() -> Self {
        DxfVersion::AC1032
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_dxf_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(DxfVersion::AC1009 < DxfVersion::AC1012);
        assert!(DxfVersion::AC1015 < DxfVersion::AC1018);
        assert!(DxfVersion::AC1032 > DxfVersion::AC1027);
        assert!(DxfVersion::Unknown < DxfVersion::AC1009);
    }

    #[test]
    fn test_version_strings() {
        assert_eq!(DxfVersion::from_version_string("ac1015"), DxfVersion::AC1015);
        assert_eq!(DxfVersion::from_version_string("AC9999"), DxfVersion::Unknown);
        assert_eq!(DxfVersion::AC1024.to_string(), "AC1024");
    }

    #[test]
    fn test_unicode_versions() {
        assert!(!DxfVersion::AC1018.is_unicode());
        assert!(DxfVersion::AC1021.is_unicode());
    }
}
