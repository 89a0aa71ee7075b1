//! Transparency representation for CAD entities

use std::fmt;

/// Entity transparency.
///
/// The raw value is a percentage (0 = opaque, 90 = most transparent) or one
/// of two special values:
/// - `BY_LAYER` (-1): not set on the entity; nothing is written for it
/// - `BY_BLOCK` (100): inherit from the enclosing block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transparency(i16);

impl Transparency {
    /// Transparency is not set; the layer's value applies
    pub const BY_LAYER: Transparency = Transparency(-1);

    /// Transparency is taken from the enclosing block
    pub const BY_BLOCK: Transparency = Transparency(100);

    /// Fully opaque
    pub const OPAQUE: Transparency = Transparency(0);

    /// Largest percentage AutoCAD accepts
    pub const MAX_PERCENT: i16 = 90;

    /// Create a transparency from a percentage, clamped to `0..=90`
    pub fn from_percent(percent: i16) -> Self {
        Transparency(percent.clamp(0, Self::MAX_PERCENT))
    }

    /// Raw value (-1, 0..=90 or 100)
    pub const fn value(&self) -> i16 {
        self.0
    }

    /// Whether this is the "unset" sentinel
    pub const fn is_by_layer(&self) -> bool {
        self.0 < 0
    }

    /// Whether the value is inherited from the block
    pub const fn is_by_block(&self) -> bool {
        self.0 == 100
    }

    /// Encode as the 32-bit alpha value written under group code 440.
    ///
    /// The high byte is the transparency type (1 = by block, 2 = explicit),
    /// the low byte the alpha (255 = opaque). The "unset" sentinel encodes
    /// as type 0.
    pub fn to_alpha_value(self) -> i32 {
        if self.is_by_layer() {
            return 0;
        }
        if self.is_by_block() {
            return 0x0100_0000;
        }
        let alpha = (255.0 * (100 - self.0) as f64 / 100.0) as u8;
        0x0200_0000 | alpha as i32
    }

    /// Decode a 32-bit alpha value
    pub fn from_alpha_value(value: i32) -> Self {
        match (value >> 24) & 0xFF {
            1 => Transparency::BY_BLOCK,
            2 => {
                let alpha = (value & 0xFF) as f64;
                let percent = 100.0 - (alpha / 255.0 * 100.0).round();
                Transparency::from_percent(percent as i16)
            }
            _ => Transparency::BY_LAYER,
        }
    }
}

impl Default for Transparency {
    fn default() -> Self {
        Transparency::BY_LAYER
    }
}

impl fmt::Display for Transparency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_by_layer() {
            write!(f, "ByLayer")
        } else if self.is_by_block() {
            write!(f, "ByBlock")
        } else {
            write!(f, "{}%", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert!(Transparency::default().is_by_layer());
        assert_eq!(Transparency::default().to_string(), "ByLayer");
    }

    #[test]
    fn test_from_percent_clamps() {
        assert_eq!(Transparency::from_percent(120).value(), 90);
        assert_eq!(Transparency::from_percent(-5).value(), 0);
    }

    #[test]
    fn test_alpha_values() {
        assert_eq!(Transparency::OPAQUE.to_alpha_value(), 0x0200_00FF);
        assert_eq!(Transparency::from_percent(50).to_alpha_value(), 0x0200_007F);
        assert_eq!(Transparency::BY_BLOCK.to_alpha_value(), 0x0100_0000);
        assert_eq!(Transparency::BY_LAYER.to_alpha_value(), 0);
    }

    #[test]
    fn test_alpha_value_decode() {
        let t = Transparency::from_percent(30);
        assert_eq!(Transparency::from_alpha_value(t.to_alpha_value()), t);
        assert_eq!(Transparency::from_alpha_value(0x0100_0000), Transparency::BY_BLOCK);
        assert_eq!(Transparency::from_alpha_value(0), Transparency::BY_LAYER);
    }
}
