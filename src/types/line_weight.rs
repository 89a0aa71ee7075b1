//! Line weight representation for CAD entities

use std::fmt;

/// Line weight as written under group code 370.
///
/// Explicit weights are in 1/100 mm; the special values are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the layer's line weight (-1)
    #[default]
    ByLayer,
    /// Use the block's line weight (-2)
    ByBlock,
    /// Drawing default line weight (-3)
    Default,
    /// Specific line weight in 1/100 mm (0..=211)
    Value(i16),
}

impl LineWeight {
    /// Create a line weight from its raw code 370 value
    pub fn from_value(value: i16) -> Self {
        match value {
            -1 => LineWeight::ByLayer,
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Default,
            v => LineWeight::Value(v),
        }
    }

    /// Raw code 370 value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }

    pub const W0_25: LineWeight = LineWeight::Value(25);
    pub const W0_50: LineWeight = LineWeight::Value(50);
    pub const W1_00: LineWeight = LineWeight::Value(100);
}

impl fmt::Display for LineWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineWeight::ByLayer => write!(f, "ByLayer"),
            LineWeight::ByBlock => write!(f, "ByBlock"),
            LineWeight::Default => write!(f, "Default"),
            LineWeight::Value(v) => write!(f, "{:.2}mm", *v as f64 / 100.0),
        }
    }
}
