//! Color representation, conversion and extraction module
//!
//! This module holds the [`Color`] record, RGB/HSV conversions and the
//! dominant color extractor that reduces a pixel buffer to a few colors.

pub mod conversion;
pub mod extraction;
pub mod model;

pub use extraction::{extract_dominant_colors, ColorExtractor, DominantColor, PixelBuffer};
pub use model::Color;
