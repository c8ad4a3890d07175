//! Palette generation module
//!
//! Derives harmonious palettes from a seed color by rotating hue or
//! adjusting value in HSV space.

pub mod generator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ColorSchemeError;

pub use generator::{generate_palette, PaletteGenerator};

/// Harmony rule used to derive a palette from its seed color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    /// Brightness ramp of the seed hue
    #[default]
    Monochromatic,
    /// Neighbouring hues around the seed
    Analogous,
    /// Seed hue and its opposite
    Complementary,
    /// Three hues 120 degrees apart
    Triadic,
    /// Four hues 90 degrees apart
    Tetradic,
}

impl PaletteType {
    /// Every palette type, in declaration order
    pub const ALL: [PaletteType; 5] = [
        PaletteType::Monochromatic,
        PaletteType::Analogous,
        PaletteType::Complementary,
        PaletteType::Triadic,
        PaletteType::Tetradic,
    ];

    /// Lowercase name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Analogous => "analogous",
            PaletteType::Complementary => "complementary",
            PaletteType::Triadic => "triadic",
            PaletteType::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteType {
    type Err = ColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaletteType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorSchemeError::invalid_argument("palette_type", wanted))
    }
}
