//! The Nord color table.
//!
//! A fixed mapping from palette-role name to one 24-bit RGB value. The
//! table is immutable and built at compile time; looking up a name that
//! is not in the table is an error, never a silent fallback.

use crate::error::{DeckError, Result};
use phf::phf_map;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Render as the uppercase six-digit hex form used by `a:srgbClr`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// The Nord palette, keyed by role name.
static NORD: phf::Map<&'static str, Rgb> = phf_map! {
    "polar1" => Rgb::new(46, 52, 64),      // Darkest background
    "polar2" => Rgb::new(59, 66, 82),      // Dark background
    "polar3" => Rgb::new(67, 76, 94),      // Medium dark
    "polar4" => Rgb::new(76, 86, 106),     // Lighter dark
    "snow1" => Rgb::new(216, 222, 233),    // Body text
    "snow2" => Rgb::new(229, 233, 240),    // Light text
    "snow3" => Rgb::new(236, 239, 244),    // Lightest text
    "frost1" => Rgb::new(143, 188, 187),   // Teal
    "frost2" => Rgb::new(136, 192, 208),   // Cyan
    "frost3" => Rgb::new(129, 161, 193),   // Light blue
    "frost4" => Rgb::new(94, 129, 172),    // Blue
    "aurora_red" => Rgb::new(191, 97, 106),
    "aurora_orange" => Rgb::new(208, 135, 112),
    "aurora_yellow" => Rgb::new(235, 203, 139),
    "aurora_green" => Rgb::new(163, 190, 140),
    "aurora_purple" => Rgb::new(180, 142, 173),
};

/// The Frost role names, in table order.
pub const FROST: [&str; 4] = ["frost1", "frost2", "frost3", "frost4"];

/// The Aurora role names, in table order.
pub const AURORA: [&str; 5] = [
    "aurora_red",
    "aurora_orange",
    "aurora_yellow",
    "aurora_green",
    "aurora_purple",
];

/// Look up a palette role by name.
///
/// # Errors
/// Returns [`DeckError::UnknownColor`] when the name has no table entry.
pub fn lookup(name: &str) -> Result<Rgb> {
    NORD.get(name)
        .copied()
        .ok_or_else(|| DeckError::UnknownColor(name.to_string()))
}

/// Number of entries in the color table.
pub fn len() -> usize {
    NORD.len()
}

/// Whether the given color value appears anywhere in the table.
pub fn contains(color: Rgb) -> bool {
    NORD.values().any(|entry| *entry == color)
}
