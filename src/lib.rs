//! # Image Color Scheme
//!
//! A lightweight library to extract dominant colors from images and create
//! color palettes.
//!
//! This library provides:
//! - Dominant color extraction from decoded RGB8 pixel buffers
//! - A [`Color`] record with RGB, normalized RGB, HEX and HSV views
//! - Monochromatic, analogous, complementary, triadic and tetradic palettes
//!
//! Decoding image files is left to the caller; any RGB8 buffer works.
//!
//! ## Example
//!
//! ```rust
//! use image_color_scheme::{extract_dominant_colors, generate_palette, PaletteType, PixelBuffer};
//!
//! // 2x2 image: three red pixels and one blue one
//! let data = [255, 0, 0, 255, 0, 0, 0, 0, 255, 255, 0, 0];
//! let pixels = PixelBuffer::new(2, 2, &data)?;
//!
//! let colors = extract_dominant_colors(&pixels, 5, true, 200)?;
//! assert_eq!(colors[0].hex(), "#ff0000");
//!
//! let palette = generate_palette(&colors, PaletteType::Triadic, 3)?;
//! assert_eq!(palette.len(), 3);
//! # Ok::<(), image_color_scheme::ColorSchemeError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod harmony;

pub use color::{extract_dominant_colors, Color, ColorExtractor, DominantColor, PixelBuffer};
pub use config::{ExtractionConfig, PaletteConfig, SchemeConfig};
pub use error::{ColorSchemeError, Result};
pub use harmony::{generate_palette, PaletteGenerator, PaletteType};

/// Color scheme derived from one image
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ColorScheme {
    /// Dominant colors, most frequent first
    pub dominant: Vec<Color>,
    /// Palette derived from the most dominant color
    pub palette: Vec<Color>,
    /// Palette rule used
    pub palette_type: PaletteType,
}

/// Extract dominant colors and derive a palette in one call
///
/// # Errors
///
/// Returns `ColorSchemeError` if either configuration section is invalid or
/// the pixel buffer yields no colors.
pub fn analyze_pixels(pixels: &PixelBuffer<'_>, config: &SchemeConfig) -> Result<ColorScheme> {
    let dominant = ColorExtractor::with_config(config.extraction.clone())?.extract(pixels)?;
    let palette = PaletteGenerator::with_config(config.palette.clone())?.generate(&dominant)?;

    Ok(ColorScheme {
        dominant,
        palette,
        palette_type: config.palette.palette_type,
    })
}
