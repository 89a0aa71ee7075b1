//! Color representation for CAD entities

use std::fmt;

/// Represents a color in AutoCAD
///
/// - By index (1-255): AutoCAD Color Index (ACI), group code 62
/// - By RGB values: true color, group code 420
/// - By layer (index 256) / by block (index 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

/// RGB value of every ACI index; entry 0 (by block) is unused.
///
/// 10-249 step through 24 hues, each at five brightness levels in a full
/// and a pale variant; 250-255 are a gray ramp.
#[rustfmt::skip]
const ACI_RGB: [(u8, u8, u8); 256] = [
    (0, 0, 0), (255, 0, 0), (255, 255, 0), (0, 255, 0),
    (0, 255, 255), (0, 0, 255), (255, 0, 255), (255, 255, 255),
    (128, 128, 128), (192, 192, 192), (255, 0, 0), (255, 127, 127),
    (165, 0, 0), (165, 82, 82), (127, 0, 0), (127, 63, 63),
    (76, 0, 0), (76, 38, 38), (38, 0, 0), (38, 19, 19),
    (255, 63, 0), (255, 159, 127), (165, 41, 0), (165, 103, 82),
    (127, 31, 0), (127, 79, 63), (76, 19, 0), (76, 47, 38),
    (38, 9, 0), (38, 23, 19), (255, 127, 0), (255, 191, 127),
    (165, 82, 0), (165, 123, 82), (127, 63, 0), (127, 95, 63),
    (76, 38, 0), (76, 57, 38), (38, 19, 0), (38, 28, 19),
    (255, 191, 0), (255, 223, 127), (165, 123, 0), (165, 144, 82),
    (127, 95, 0), (127, 111, 63), (76, 57, 0), (76, 66, 38),
    (38, 28, 0), (38, 33, 19), (255, 255, 0), (255, 255, 127),
    (165, 165, 0), (165, 165, 82), (127, 127, 0), (127, 127, 63),
    (76, 76, 0), (76, 76, 38), (38, 38, 0), (38, 38, 19),
    (191, 255, 0), (223, 255, 127), (123, 165, 0), (144, 165, 82),
    (95, 127, 0), (111, 127, 63), (57, 76, 0), (66, 76, 38),
    (28, 38, 0), (33, 38, 19), (127, 255, 0), (191, 255, 127),
    (82, 165, 0), (123, 165, 82), (63, 127, 0), (95, 127, 63),
    (38, 76, 0), (57, 76, 38), (19, 38, 0), (28, 38, 19),
    (63, 255, 0), (159, 255, 127), (41, 165, 0), (103, 165, 82),
    (31, 127, 0), (79, 127, 63), (19, 76, 0), (47, 76, 38),
    (9, 38, 0), (23, 38, 19), (0, 255, 0), (127, 255, 127),
    (0, 165, 0), (82, 165, 82), (0, 127, 0), (63, 127, 63),
    (0, 76, 0), (38, 76, 38), (0, 38, 0), (19, 38, 19),
    (0, 255, 63), (127, 255, 159), (0, 165, 41), (82, 165, 103),
    (0, 127, 31), (63, 127, 79), (0, 76, 19), (38, 76, 47),
    (0, 38, 9), (19, 38, 23), (0, 255, 127), (127, 255, 191),
    (0, 165, 82), (82, 165, 123), (0, 127, 63), (63, 127, 95),
    (0, 76, 38), (38, 76, 57), (0, 38, 19), (19, 38, 28),
    (0, 255, 191), (127, 255, 223), (0, 165, 123), (82, 165, 144),
    (0, 127, 95), (63, 127, 111), (0, 76, 57), (38, 76, 66),
    (0, 38, 28), (19, 38, 33), (0, 255, 255), (127, 255, 255),
    (0, 165, 165), (82, 165, 165), (0, 127, 127), (63, 127, 127),
    (0, 76, 76), (38, 76, 76), (0, 38, 38), (19, 38, 38),
    (0, 191, 255), (127, 223, 255), (0, 123, 165), (82, 144, 165),
    (0, 95, 127), (63, 111, 127), (0, 57, 76), (38, 66, 76),
    (0, 28, 38), (19, 33, 38), (0, 127, 255), (127, 191, 255),
    (0, 82, 165), (82, 123, 165), (0, 63, 127), (63, 95, 127),
    (0, 38, 76), (38, 57, 76), (0, 19, 38), (19, 28, 38),
    (0, 63, 255), (127, 159, 255), (0, 41, 165), (82, 103, 165),
    (0, 31, 127), (63, 79, 127), (0, 19, 76), (38, 47, 76),
    (0, 9, 38), (19, 23, 38), (0, 0, 255), (127, 127, 255),
    (0, 0, 165), (82, 82, 165), (0, 0, 127), (63, 63, 127),
    (0, 0, 76), (38, 38, 76), (0, 0, 38), (19, 19, 38),
    (63, 0, 255), (159, 127, 255), (41, 0, 165), (103, 82, 165),
    (31, 0, 127), (79, 63, 127), (19, 0, 76), (47, 38, 76),
    (9, 0, 38), (23, 19, 38), (127, 0, 255), (191, 127, 255),
    (82, 0, 165), (123, 82, 165), (63, 0, 127), (95, 63, 127),
    (38, 0, 76), (57, 38, 76), (19, 0, 38), (28, 19, 38),
    (191, 0, 255), (223, 127, 255), (123, 0, 165), (144, 82, 165),
    (95, 0, 127), (111, 63, 127), (57, 0, 76), (66, 38, 76),
    (28, 0, 38), (33, 19, 38), (255, 0, 255), (255, 127, 255),
    (165, 0, 165), (165, 82, 165), (127, 0, 127), (127, 63, 127),
    (76, 0, 76), (76, 38, 76), (38, 0, 38), (38, 19, 38),
    (255, 0, 191), (255, 127, 223), (165, 0, 123), (165, 82, 144),
    (127, 0, 95), (127, 63, 111), (76, 0, 57), (76, 38, 66),
    (38, 0, 28), (38, 19, 33), (255, 0, 127), (255, 127, 191),
    (165, 0, 82), (165, 82, 123), (127, 0, 63), (127, 63, 95),
    (76, 0, 38), (76, 38, 57), (38, 0, 19), (38, 19, 28),
    (255, 0, 63), (255, 127, 159), (165, 0, 41), (165, 82, 103),
    (127, 0, 31), (127, 63, 79), (76, 0, 19), (76, 38, 47),
    (38, 0, 9), (38, 19, 23), (51, 51, 51), (91, 91, 91),
    (132, 132, 132), (173, 173, 173), (214, 214, 214), (255, 255, 255),
];

impl Color {
    /// Create a color from an AutoCAD Color Index.
    ///
    /// Negative indices (a layer switched off) keep their magnitude; any
    /// magnitude past 255 other than 256 clamps to 255.
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            _ => Color::Index(index.unsigned_abs().min(255) as u8),
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Whether this color must be encoded as a true color (code 420)
    pub fn is_true_color(&self) -> bool {
        matches!(self, Color::Rgb { .. })
    }

    /// The ACI index written under code 62; `None` for true colors
    pub fn index(&self) -> Option<i16> {
        match self {
            Color::ByBlock => Some(0),
            Color::Index(i) => Some(*i as i16),
            Color::ByLayer => Some(256),
            Color::Rgb { .. } => None,
        }
    }

    /// Get RGB values (if applicable)
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        }
    }

    /// The 24-bit value written under code 420: `0x00RRGGBB`
    pub fn true_color_value(&self) -> Option<i32> {
        self.rgb()
            .map(|(r, g, b)| ((r as i32) << 16) | ((g as i32) << 8) | (b as i32))
    }

    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Nearest ACI index for this color.
    ///
    /// Index colors map to themselves; true colors pick the closest of
    /// indices 1-255 by squared RGB distance, the lowest index on a tie.
    pub fn approximate_index(&self) -> i16 {
        let (r, g, b) = match self {
            Color::Rgb { r, g, b } => (i32::from(*r), i32::from(*g), i32::from(*b)),
            other => return other.index().unwrap_or(7),
        };

        let distance = |&(pr, pg, pb): &(u8, u8, u8)| {
            let (dr, dg, db) = (r - i32::from(pr), g - i32::from(pg), b - i32::from(pb));
            dr * dr + dg * dg + db * db
        };
        (1i16..=255)
            .zip(&ACI_RGB[1..])
            .min_by_key(|(_, rgb)| distance(rgb))
            .map_or(7, |(index, _)| index)
    }

    /// RGB value of an index color; `None` for by-layer, by-block and true
    /// colors
    pub fn index_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Index(i) if *i > 0 => Some(ACI_RGB[usize::from(*i)]),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}

/// A named color from a color book (e.g. `"PANTONE$PANTONE 185 C"`).
///
/// When present on an entity it overrides [`Color`] and is written as the
/// approximate index, the true color and the name, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookColor {
    /// Full book color name (code 430)
    pub name: String,
    /// The RGB value of the book entry
    pub color: Color,
}

impl BookColor {
    /// Create a book color from its name and RGB value
    pub fn new(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        BookColor {
            name: name.into(),
            color: Color::from_rgb(r, g, b),
        }
    }
}
