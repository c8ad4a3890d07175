//! Tunable constants and defaults for extraction and palette generation
//!
//! Kept as compile-time values; none of them is part of the public
//! configuration surface except the defaults in [`defaults`].

/// Default values of the recognized configuration options
pub mod defaults {
    /// Number of colors extracted or generated when not specified
    pub const NUM_COLORS: usize = 5;

    /// Downsample images before extraction
    pub const RESIZE: bool = true;

    /// Longest image side after downsampling
    pub const MAX_SIZE: u32 = 200;
}

/// Quantization parameters for dominant color clustering
pub mod quantization {
    /// Bits dropped per channel; buckets are `1 << SHIFT` units wide
    pub const SHIFT: u32 = 4;

    /// Width of one bucket per channel
    pub const BUCKET_WIDTH: u32 = 1 << SHIFT;

    /// Buckets per channel
    pub const LEVELS: usize = 256 >> SHIFT;

    /// Total number of buckets across the RGB cube
    pub const BUCKET_COUNT: usize = LEVELS * LEVELS * LEVELS;
}

/// Hue offsets and shading factors used by the palette rules
///
/// Hues are fractions of a full turn.
pub mod harmony {
    /// Lowest value of the monochromatic ramp, as a fraction of the seed value
    pub const MONOCHROMATIC_MIN_SCALE: f32 = 0.3;

    /// Hue step between neighbouring analogous colors (30 degrees)
    pub const ANALOGOUS_STEP: f32 = 1.0 / 12.0;

    /// Offset of the complementary anchor
    pub const COMPLEMENT_OFFSET: f32 = 0.5;

    /// Value drop across one complementary group
    pub const COMPLEMENTARY_SHADE_SPAN: f32 = 0.5;

    /// Anchor offsets of a triadic scheme
    pub const TRIADIC_OFFSETS: [f32; 3] = [0.0, 1.0 / 3.0, 2.0 / 3.0];

    /// Anchor offsets of a tetradic scheme
    pub const TETRADIC_OFFSETS: [f32; 4] = [0.0, 0.25, 0.5, 0.75];

    /// Value drop per extra pass over triadic/tetradic anchors
    pub const FILL_SHADE_STEP: f32 = 0.15;

    /// Floor of the value scale for extra passes
    pub const FILL_MIN_SCALE: f32 = 0.25;
}
