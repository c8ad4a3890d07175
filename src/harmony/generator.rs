//! Hue-rotation palette rules
//!
//! The seed is the first (most dominant) input color. Every rule works on
//! the seed's HSV triple and rounds the results back to 8-bit RGB. Hue
//! arithmetic always wraps modulo one turn.
//!
//! Triadic and tetradic palettes cycle through their anchors in order. A
//! palette shorter than the anchor count is truncated; each additional pass
//! over the anchors darkens the value a step, so repeated hues stay
//! distinguishable.

use tracing::debug;

use crate::color::conversion::rotate_hue;
use crate::color::Color;
use crate::config::PaletteConfig;
use crate::constants::harmony::{
    ANALOGOUS_STEP, COMPLEMENTARY_SHADE_SPAN, COMPLEMENT_OFFSET, FILL_MIN_SCALE, FILL_SHADE_STEP,
    MONOCHROMATIC_MIN_SCALE, TETRADIC_OFFSETS, TRIADIC_OFFSETS,
};
use crate::harmony::PaletteType;
use crate::{ColorSchemeError, Result};

/// Palette generator bound to one palette type and length
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    config: PaletteConfig,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    /// Create a generator with default parameters (monochromatic, 5 colors)
    pub fn new() -> Self {
        Self {
            config: PaletteConfig::default(),
        }
    }

    /// Create a generator with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidArgument` if `num_colors` is zero.
    pub fn with_config(config: PaletteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Derive a palette from the first of `colors`
    ///
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidInput` if `colors` is empty.
    pub fn generate(&self, colors: &[Color]) -> Result<Vec<Color>> {
        let seed = colors
            .first()
            .ok_or_else(|| ColorSchemeError::invalid_input("No colors provided"))?;

        let n = self.config.num_colors;
        debug!(
            palette_type = %self.config.palette_type,
            seed = %seed.hex(),
            num_colors = n,
            "Generating palette"
        );

        let hsv = seed.hsv();
        let palette = match self.config.palette_type {
            PaletteType::Monochromatic => monochromatic(hsv, n),
            PaletteType::Analogous => analogous(hsv, n),
            PaletteType::Complementary => complementary(hsv, n),
            PaletteType::Triadic => cycle_anchors(hsv, &TRIADIC_OFFSETS, n),
            PaletteType::Tetradic => cycle_anchors(hsv, &TETRADIC_OFFSETS, n),
        };
        Ok(palette)
    }
}

/// Generate a palette of `num_colors` colors from the first of `colors`
///
/// # Arguments
///
/// * `colors` - Seed colors, most dominant first (at least one)
/// * `palette_type` - Harmony rule
/// * `num_colors` - Palette length (at least 1), independent of `colors.len()`
///
/// # Errors
///
/// Returns `ColorSchemeError::InvalidInput` for an empty `colors` slice and
/// `ColorSchemeError::InvalidArgument` for a zero `num_colors`.
pub fn generate_palette(
    colors: &[Color],
    palette_type: PaletteType,
    num_colors: usize,
) -> Result<Vec<Color>> {
    PaletteGenerator::with_config(PaletteConfig {
        palette_type,
        num_colors,
    })?
    .generate(colors)
}

/// Value ramp from `MONOCHROMATIC_MIN_SCALE * v` up to `v`, hue and saturation fixed
fn monochromatic([h, s, v]: [f32; 3], n: usize) -> Vec<Color> {
    if n == 1 {
        return vec![Color::from_hsv(h, s, v)];
    }

    let last = (n - 1) as f32;
    (0..n)
        .map(|i| {
            let scale = MONOCHROMATIC_MIN_SCALE + (1.0 - MONOCHROMATIC_MIN_SCALE) * i as f32 / last;
            Color::from_hsv(h, s, v * scale)
        })
        .collect()
}

/// Hues stepping by `ANALOGOUS_STEP` around the seed, seed at index `n / 2`
fn analogous([h, s, v]: [f32; 3], n: usize) -> Vec<Color> {
    let center = (n / 2) as f32;
    (0..n)
        .map(|i| Color::from_hsv(rotate_hue(h, (i as f32 - center) * ANALOGOUS_STEP), s, v))
        .collect()
}

/// Seed hue group followed by complement group, each fading in value
fn complementary([h, s, v]: [f32; 3], n: usize) -> Vec<Color> {
    let complement_len = n / 2;
    let groups = [
        (h, n - complement_len),
        (rotate_hue(h, COMPLEMENT_OFFSET), complement_len),
    ];

    groups
        .into_iter()
        .flat_map(|(hue, len)| {
            (0..len).map(move |j| {
                let scale = 1.0 - COMPLEMENTARY_SHADE_SPAN * j as f32 / len as f32;
                Color::from_hsv(hue, s, v * scale)
            })
        })
        .collect()
}

/// Anchors in order, darkening one step per extra pass
fn cycle_anchors([h, s, v]: [f32; 3], offsets: &[f32], n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| {
            let anchor = offsets[i % offsets.len()];
            let round = (i / offsets.len()) as f32;
            let scale = (1.0 - FILL_SHADE_STEP * round).max(FILL_MIN_SCALE);
            Color::from_hsv(rotate_hue(h, anchor), s, v * scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::conversion::hue_distance;

    const RED: [f32; 3] = [0.0, 1.0, 1.0];

    fn rgbs(colors: &[Color]) -> Vec<[u8; 3]> {
        colors.iter().map(Color::rgb).collect()
    }

    #[test]
    fn test_monochromatic_ramp() {
        let palette = monochromatic(RED, 5);
        assert_eq!(
            rgbs(&palette),
            vec![[77, 0, 0], [121, 0, 0], [166, 0, 0], [210, 0, 0], [255, 0, 0]]
        );
    }

    #[test]
    fn test_monochromatic_single_color_is_seed() {
        assert_eq!(rgbs(&monochromatic(RED, 1)), vec![[255, 0, 0]]);
    }

    #[test]
    fn test_analogous_centered_on_seed() {
        let palette = analogous(RED, 5);
        let hues: Vec<f32> = palette.iter().map(Color::hue).collect();
        let expected = [10.0 / 12.0, 11.0 / 12.0, 0.0, 1.0 / 12.0, 2.0 / 12.0];
        for (hue, want) in hues.iter().zip(expected) {
            assert!(hue_distance(*hue, want) < 0.01, "{hues:?}");
            assert!((0.0..1.0).contains(hue));
        }
        assert_eq!(palette[2], Color::new(255, 0, 0));
    }

    #[test]
    fn test_complementary_groups() {
        let palette = complementary(RED, 5);
        assert_eq!(palette.len(), 5);
        for color in &palette[..3] {
            assert!(hue_distance(color.hue(), 0.0) < 1e-3);
        }
        for color in &palette[3..] {
            assert!(hue_distance(color.hue(), 0.5) < 1e-3);
        }
        assert_eq!(palette[0], Color::new(255, 0, 0));
        assert_eq!(palette[3], Color::new(0, 255, 255));
        assert!(palette[1].value() < palette[0].value());
        assert!(palette[4].value() < palette[3].value());
    }

    #[test]
    fn test_complementary_pair() {
        assert_eq!(
            rgbs(&complementary(RED, 2)),
            vec![[255, 0, 0], [0, 255, 255]]
        );
        assert_eq!(rgbs(&complementary(RED, 1)), vec![[255, 0, 0]]);
    }

    #[test]
    fn test_triadic_cycles_and_darkens() {
        let palette = cycle_anchors(RED, &TRIADIC_OFFSETS, 5);
        assert_eq!(
            rgbs(&palette),
            vec![
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [217, 0, 0],
                [0, 217, 0],
            ]
        );
    }

    #[test]
    fn test_triadic_truncates() {
        let palette = cycle_anchors(RED, &TRIADIC_OFFSETS, 2);
        assert_eq!(rgbs(&palette), vec![[255, 0, 0], [0, 255, 0]]);
    }

    #[test]
    fn test_tetradic_anchor_order() {
        let palette = cycle_anchors(RED, &TETRADIC_OFFSETS, 6);
        let expected = [0.0, 0.25, 0.5, 0.75, 0.0, 0.25];
        for (color, want) in palette.iter().zip(expected) {
            assert!(hue_distance(color.hue(), want) < 0.01);
        }
        assert!(palette[4].value() < palette[0].value());
        assert!(palette[5].value() < palette[1].value());
    }

    #[test]
    fn test_fill_scale_floor() {
        let palette = cycle_anchors(RED, &[0.0], 10);
        let last = palette.last().unwrap();
        assert!((last.value() - FILL_MIN_SCALE).abs() < 0.01);
    }

    #[test]
    fn test_generate_errors() {
        assert!(matches!(
            generate_palette(&[], PaletteType::Analogous, 5),
            Err(ColorSchemeError::InvalidInput { .. })
        ));
        assert!(matches!(
            generate_palette(&[Color::new(1, 2, 3)], PaletteType::Analogous, 0),
            Err(ColorSchemeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_generate_uses_first_color_as_seed() {
        let colors = [Color::new(255, 0, 0), Color::new(0, 0, 255)];
        let palette = generate_palette(&colors, PaletteType::Complementary, 2).unwrap();
        assert_eq!(palette, vec![Color::new(255, 0, 0), Color::new(0, 255, 255)]);
    }

    #[test]
    fn test_default_generator() {
        let generator = PaletteGenerator::default();
        assert_eq!(generator.config().palette_type, PaletteType::Monochromatic);
        let palette = generator.generate(&[Color::new(10, 100, 200)]).unwrap();
        assert_eq!(palette.len(), 5);
    }
}
