//! The color record shared by extraction and palette generation
//!
//! A [`Color`] is built from one canonical RGB triple. Its normalized RGB and
//! HSV views are computed once at construction, the HEX view is formatted on
//! demand. Nothing can mutate a color after it is built, so the views never
//! disagree.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::color::conversion::{hsv_to_rgb, rgb_to_hsv};
use crate::{ColorSchemeError, Result};

/// One color with RGB, normalized RGB, HEX and HSV views
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(from = "RgbRecord")]
pub struct Color {
    rgb: [u8; 3],
    rgb_normalized: [f32; 3],
    hsv: [f32; 3],
}

/// Wire shape accepted when deserializing; every other view is recomputed.
#[derive(Deserialize)]
struct RgbRecord {
    rgb: [u8; 3],
}

impl From<RgbRecord> for Color {
    fn from(record: RgbRecord) -> Self {
        Color::from(record.rgb)
    }
}

impl Color {
    /// Create a color from 8-bit RGB channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let rgb = [r, g, b];
        Self {
            rgb,
            rgb_normalized: rgb.map(|c| f32::from(c) / 255.0),
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Create a color from HSV components
    ///
    /// `hue` is a fraction of a full turn and wraps modulo 1.0. Saturation and
    /// value are clamped to [0.0, 1.0]. Channels are rounded to the nearest
    /// 8-bit value, so the resulting [`Color::hsv`] may differ from the
    /// arguments by the rounding error.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        Self::from(hsv_to_rgb(hue, saturation, value))
    }

    /// Parse a `#rrggbb` or `rrggbb` hex string (either case)
    ///
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidInput` if the string is not six hex
    /// digits with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorSchemeError::invalid_input(format!(
                "Invalid hex color {hex:?}: expected 6 hex digits"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                ColorSchemeError::invalid_input(format!("Invalid hex color {hex:?}: {e}"))
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// RGB channels in [0, 255]
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// RGB channels divided by 255
    pub fn rgb_normalized(&self) -> [f32; 3] {
        self.rgb_normalized
    }

    /// Lowercase `#rrggbb` representation
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `[hue, saturation, value]`, hue as a fraction of a turn in [0.0, 1.0)
    pub fn hsv(&self) -> [f32; 3] {
        self.hsv
    }

    pub fn hue(&self) -> f32 {
        self.hsv[0]
    }

    pub fn saturation(&self) -> f32 {
        self.hsv[1]
    }

    pub fn value(&self) -> f32 {
        self.hsv[2]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.rgb
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

impl FromStr for Color {
    type Err = ColorSchemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "Color(rgb=({r}, {g}, {b}), hex={})", self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Color", 4)?;
        state.serialize_field("rgb", &self.rgb)?;
        state.serialize_field("rgb_normalized", &self.rgb_normalized)?;
        state.serialize_field("hex", &self.hex())?;
        state.serialize_field("hsv", &self.hsv)?;
        state.end()
    }
}
