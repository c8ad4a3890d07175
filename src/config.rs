//! Configuration structures for color extraction and palette generation.
//!
//! All options have defaults matching the library's documented behavior, so a
//! configuration file only needs the values it changes.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use image_color_scheme::SchemeConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SchemeConfig::from_json_file(Path::new("scheme.json"))?;
//!
//! // Or use defaults
//! let config = SchemeConfig::default();
//! # Ok::<(), image_color_scheme::ColorSchemeError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: number of dominant colors and downsampling
//! - [`PaletteConfig`]: palette type and length

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::harmony::PaletteType;
use crate::{ColorSchemeError, Result};

/// Complete configuration for one extraction plus palette run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    /// Dominant color extraction settings
    pub extraction: ExtractionConfig,

    /// Palette generation settings
    pub palette: PaletteConfig,
}

/// Dominant color extraction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of dominant colors (at least 1)
    pub num_colors: usize,

    /// Downsample images whose longer side exceeds `max_size`
    pub resize: bool,

    /// Longest side after downsampling (greater than 0)
    pub max_size: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            num_colors: defaults::NUM_COLORS,
            resize: defaults::RESIZE,
            max_size: defaults::MAX_SIZE,
        }
    }
}

impl ExtractionConfig {
    /// Check argument domains without clamping anything
    ///
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidArgument` for a zero `num_colors`, or
    /// a zero `max_size` while resizing is enabled.
    pub fn validate(&self) -> Result<()> {
        if self.num_colors == 0 {
            return Err(ColorSchemeError::invalid_argument(
                "num_colors",
                self.num_colors,
            ));
        }
        if self.resize && self.max_size == 0 {
            return Err(ColorSchemeError::invalid_argument("max_size", self.max_size));
        }
        Ok(())
    }
}

/// Palette generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Harmony rule used to derive the palette
    pub palette_type: PaletteType,

    /// Palette length (at least 1)
    pub num_colors: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            palette_type: PaletteType::default(),
            num_colors: defaults::NUM_COLORS,
        }
    }
}

impl PaletteConfig {
    /// # Errors
    ///
    /// Returns `ColorSchemeError::InvalidArgument` for a zero `num_colors`.
    pub fn validate(&self) -> Result<()> {
        if self.num_colors == 0 {
            return Err(ColorSchemeError::invalid_argument(
                "num_colors",
                self.num_colors,
            ));
        }
        Ok(())
    }
}

impl SchemeConfig {
    /// Validate both sections
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        self.palette.validate()
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorSchemeError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ColorSchemeError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorSchemeError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ColorSchemeError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchemeConfig::default();
        assert_eq!(config.extraction.num_colors, 5);
        assert!(config.extraction.resize);
        assert_eq!(config.extraction.max_size, 200);
        assert_eq!(config.palette.palette_type, PaletteType::Monochromatic);
        assert_eq!(config.palette.num_colors, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let extraction = ExtractionConfig {
            num_colors: 0,
            ..ExtractionConfig::default()
        };
        assert!(matches!(
            extraction.validate(),
            Err(ColorSchemeError::InvalidArgument { .. })
        ));

        let palette = PaletteConfig {
            num_colors: 0,
            ..PaletteConfig::default()
        };
        assert!(palette.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SchemeConfig =
            serde_json::from_str(r#"{"palette": {"palette_type": "triadic"}}"#).unwrap();
        assert_eq!(config.palette.palette_type, PaletteType::Triadic);
        assert_eq!(config.palette.num_colors, 5);
        assert_eq!(config.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_unknown_palette_type_is_rejected() {
        let result: std::result::Result<SchemeConfig, _> =
            serde_json::from_str(r#"{"palette": {"palette_type": "rainbow"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scheme.json");

        let config = SchemeConfig {
            extraction: ExtractionConfig {
                num_colors: 8,
                resize: false,
                max_size: 64,
            },
            palette: PaletteConfig {
                palette_type: PaletteType::Tetradic,
                num_colors: 6,
            },
        };
        config.to_json_file(&path).unwrap();

        let loaded = SchemeConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = SchemeConfig::from_json_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ColorSchemeError::Config { .. })));

        let invalid_path = dir.path().join("invalid.json");
        std::fs::write(&invalid_path, "{ not json").unwrap();
        let invalid = SchemeConfig::from_json_file(&invalid_path);
        assert!(matches!(invalid, Err(ColorSchemeError::Config { .. })));

        let zero_path = dir.path().join("zero.json");
        std::fs::write(&zero_path, r#"{"extraction": {"num_colors": 0}}"#).unwrap();
        let zero = SchemeConfig::from_json_file(&zero_path);
        assert!(matches!(zero, Err(ColorSchemeError::InvalidArgument { .. })));
    }
}
