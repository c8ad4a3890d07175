//! Dominant color extraction
//!
//! Reduces an RGB pixel buffer to a handful of representative colors:
//! - Optional nearest-neighbor downsampling of large images
//! - Per-channel quantization into fixed-width buckets
//! - Frequency ranking with first-seen tie-breaking
//! - Mean color of each selected bucket
//!
//! Quantization is a deliberate precision trade-off: pixels whose channels
//! fall into the same 16-unit bucket are treated as one color.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb};
use tracing::{debug, trace};

use crate::color::Color;
use crate::config::ExtractionConfig;
use crate::constants::quantization::{BUCKET_COUNT, LEVELS, SHIFT};
use crate::{ColorSchemeError, Result};

/// Read-only view over a caller-owned RGB8 pixel buffer
///
/// Pixels are row-major `(r, g, b)` triples without alpha.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGB bytes
    ///
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidInput` if the buffer is empty, either
    /// dimension is zero, or `data.len()` is not `width * height * 3`.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        if data.is_empty() || width == 0 || height == 0 {
            return Err(ColorSchemeError::invalid_input(format!(
                "Pixel buffer is empty ({width}x{height}, {} bytes)",
                data.len()
            )));
        }

        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ColorSchemeError::invalid_input(format!(
                "Pixel buffer of {width}x{height} must hold {expected} bytes (3 channels), got {}",
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap the raw bytes of a decoded `image::RgbImage`
    pub fn from_rgb_image(image: &'a image::RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the buffer
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    /// Always false for a constructed buffer
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + 'a {
        let data: &'a [u8] = self.data;
        data.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }
}

/// One dominant color together with how much of the image it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantColor {
    /// Mean color of the bucket
    pub color: Color,
    /// Number of sampled pixels in the bucket
    pub pixel_count: usize,
    /// Share of sampled pixels (0.0-1.0)
    pub proportion: f32,
}

/// Running totals for one quantization bucket
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
    first_seen: usize,
}

impl Bucket {
    fn mean(&self) -> Color {
        let mean = |sum: u64| ((sum + self.count / 2) / self.count) as u8;
        Color::new(mean(self.sum[0]), mean(self.sum[1]), mean(self.sum[2]))
    }
}

/// Frequency-based dominant color extractor
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    config: ExtractionConfig,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorExtractor {
    /// Create an extractor with default parameters (5 colors, resize to 200)
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidArgument` if `num_colors` is zero, or
    /// if resizing is enabled with a zero `max_size`.
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract dominant colors, most frequent first
    ///
    /// Returns at most `num_colors` colors; fewer when the image has fewer
    /// distinct quantized buckets.
    pub fn extract(&self, pixels: &PixelBuffer<'_>) -> Result<Vec<Color>> {
        Ok(self
            .extract_with_counts(pixels)?
            .into_iter()
            .map(|dominant| dominant.color)
            .collect())
    }

    /// Extract dominant colors with their pixel counts and proportions
    pub fn extract_with_counts(&self, pixels: &PixelBuffer<'_>) -> Result<Vec<DominantColor>> {
        if pixels.is_empty() {
            return Err(ColorSchemeError::invalid_input("Pixel buffer is empty"));
        }

        let resized = self.downsample(pixels)?;
        let sample = match resized.as_ref() {
            Some(image) => PixelBuffer::from_rgb_image(image)?,
            None => *pixels,
        };

        let buckets = count_buckets(&sample);
        let total = sample.len();
        debug!(
            width = sample.width(),
            height = sample.height(),
            buckets = buckets.len(),
            "Quantized pixel buffer"
        );

        let dominant: Vec<DominantColor> = buckets
            .iter()
            .take(self.config.num_colors)
            .map(|bucket| DominantColor {
                color: bucket.mean(),
                pixel_count: bucket.count as usize,
                proportion: bucket.count as f32 / total as f32,
            })
            .collect();

        for entry in &dominant {
            trace!(hex = %entry.color.hex(), pixels = entry.pixel_count, "Dominant color");
        }

        Ok(dominant)
    }

    /// Downsample so the longer side is at most `max_size`
    ///
    /// Returns `None` when resizing is off or the image is already small
    /// enough. Nearest-neighbor sampling never invents new colors.
    fn downsample(&self, pixels: &PixelBuffer<'_>) -> Result<Option<image::RgbImage>> {
        if !self.config.resize {
            return Ok(None);
        }

        let (width, height) = (pixels.width(), pixels.height());
        let Some((new_width, new_height)) = target_size(width, height, self.config.max_size)
        else {
            return Ok(None);
        };

        let view: ImageBuffer<Rgb<u8>, &[u8]> = ImageBuffer::from_raw(width, height, pixels.data)
            .ok_or_else(|| {
                ColorSchemeError::invalid_input(format!(
                    "Pixel buffer does not match {width}x{height} RGB image"
                ))
            })?;

        debug!(width, height, new_width, new_height, "Downsampling image");
        Ok(Some(imageops::resize(
            &view,
            new_width,
            new_height,
            FilterType::Nearest,
        )))
    }
}

/// Extract the dominant colors of a pixel buffer
///
/// # Arguments
///
/// * `pixels` - RGB8 pixel buffer
/// * `num_colors` - Maximum number of colors to return (at least 1)
/// * `resize` - Downsample large images before clustering
/// * `max_size` - Longest side after downsampling
///
/// # Returns
///
/// Colors ordered by descending frequency, most dominant first
///
/// # Errors
///
/// Returns `ColorSchemeError::InvalidArgument` if `num_colors` is zero or
/// `max_size` is zero while resizing, and `ColorSchemeError::InvalidInput`
/// for an empty buffer.
pub fn extract_dominant_colors(
    pixels: &PixelBuffer<'_>,
    num_colors: usize,
    resize: bool,
    max_size: u32,
) -> Result<Vec<Color>> {
    ColorExtractor::with_config(ExtractionConfig {
        num_colors,
        resize,
        max_size,
    })?
    .extract(pixels)
}

/// Dimensions after fitting the longer side into `max_size`, if shrinking is needed
fn target_size(width: u32, height: u32, max_size: u32) -> Option<(u32, u32)> {
    if width <= max_size && height <= max_size {
        return None;
    }

    let scale = |side: u32, longer: u32| {
        let scaled = u64::from(side) * u64::from(max_size) / u64::from(longer);
        (scaled as u32).max(1)
    };

    Some(if width > height {
        (max_size, scale(height, width))
    } else {
        (scale(width, height), max_size)
    })
}

/// Bucket index of a pixel; 4 bits per channel
fn bucket_index(pixel: [u8; 3]) -> usize {
    let level = |c: u8| usize::from(c >> SHIFT);
    (level(pixel[0]) * LEVELS + level(pixel[1])) * LEVELS + level(pixel[2])
}

/// Count pixels per bucket, returning non-empty buckets by descending count
///
/// Equal counts keep first-seen order.
fn count_buckets(pixels: &PixelBuffer<'_>) -> Vec<Bucket> {
    let mut buckets = vec![Bucket::default(); BUCKET_COUNT];

    for (position, pixel) in pixels.pixels().enumerate() {
        let bucket = &mut buckets[bucket_index(pixel)];
        if bucket.count == 0 {
            bucket.first_seen = position;
        }
        bucket.count += 1;
        for (sum, channel) in bucket.sum.iter_mut().zip(pixel) {
            *sum += u64::from(channel);
        }
    }

    let mut occupied: Vec<Bucket> = buckets.into_iter().filter(|b| b.count > 0).collect();
    occupied.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });
    occupied
}
