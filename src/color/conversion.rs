//! RGB and HSV conversion utilities
//!
//! Hue is expressed as a fraction of a full turn in [0.0, 1.0) rather than in
//! degrees. Saturation and value are in [0.0, 1.0].

use palette::{FromColor, Hsv, Srgb};

/// Convert 8-bit RGB channels to HSV
///
/// # Arguments
///
/// * `rgb` - RGB values in range [0, 255]
///
/// # Returns
///
/// `[hue, saturation, value]` with hue in [0.0, 1.0). Achromatic colors
/// report hue 0.0.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [f32; 3] {
    let srgb: Srgb<f32> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let hsv: Hsv = Hsv::from_color(srgb);
    [
        wrap_hue(hsv.hue.into_positive_degrees() / 360.0),
        hsv.saturation,
        hsv.value,
    ]
}

/// Convert HSV to 8-bit RGB channels
///
/// Hue wraps modulo 1.0; saturation and value are clamped to [0.0, 1.0].
/// Channels are rounded to the nearest integer.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let hsv: Hsv = Hsv::new(
        wrap_hue(hue) * 360.0,
        saturation.clamp(0.0, 1.0),
        value.clamp(0.0, 1.0),
    );
    let srgb: Srgb = Srgb::from_color(hsv);
    [
        channel_to_u8(srgb.red),
        channel_to_u8(srgb.green),
        channel_to_u8(srgb.blue),
    ]
}

/// Normalize a hue into [0.0, 1.0)
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Rotate a hue by `offset` turns, wrapping at the circle boundary
///
/// `rotate_hue(0.9, 0.2)` is 0.1, never 1.1.
pub fn rotate_hue(hue: f32, offset: f32) -> f32 {
    wrap_hue(hue + offset)
}

/// Shortest distance between two hues on the circle, in [0.0, 0.5]
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = wrap_hue(a - b);
    d.min(1.0 - d)
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv([255, 0, 0]);
        assert_close(red[0], 0.0);
        assert_close(red[1], 1.0);
        assert_close(red[2], 1.0);

        let green = rgb_to_hsv([0, 255, 0]);
        assert_close(green[0], 1.0 / 3.0);

        let blue = rgb_to_hsv([0, 0, 255]);
        assert_close(blue[0], 2.0 / 3.0);
    }

    #[test]
    fn test_rgb_to_hsv_achromatic() {
        let gray = rgb_to_hsv([128, 128, 128]);
        assert_close(gray[0], 0.0);
        assert_close(gray[1], 0.0);
        assert_close(gray[2], 128.0 / 255.0);

        let black = rgb_to_hsv([0, 0, 0]);
        assert_eq!(black, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), [0, 255, 255]);
    }

    #[test]
    fn test_hsv_to_rgb_clamps_and_wraps() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(-0.5, 2.0, 1.5), [0, 255, 255]);
        assert_eq!(hsv_to_rgb(0.25, 0.0, -1.0), [0, 0, 0]);
    }

    #[test]
    fn test_hsv_roundtrip_sampled_cube() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let [h, s, v] = rgb_to_hsv(rgb);
                    let back = hsv_to_rgb(h, s, v);
                    for c in 0..3 {
                        let diff = (i16::from(rgb[c]) - i16::from(back[c])).abs();
                        assert!(diff <= 1, "{rgb:?} came back as {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_wrap_hue() {
        assert_close(wrap_hue(1.25), 0.25);
        assert_close(wrap_hue(-0.25), 0.75);
        assert_eq!(wrap_hue(1.0), 0.0);
        assert!(wrap_hue(-1e-9) < 1.0);
    }

    #[test]
    fn test_rotate_hue_wraps_past_one() {
        assert_close(rotate_hue(0.9, 0.2), 0.1);
        assert_close(rotate_hue(0.1, -0.2), 0.9);
    }

    #[test]
    fn test_hue_distance() {
        assert_close(hue_distance(0.9, 0.1), 0.2);
        assert_close(hue_distance(0.0, 0.5), 0.5);
        assert_close(hue_distance(0.3, 0.3), 0.0);
    }
}
