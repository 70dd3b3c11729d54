//! Configuration file support for drawpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/drawpad/config.toml`. Settings include pen defaults, brush
//! presets, surface size and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{BrushSize, ColorSpec};
pub use types::{BrushSizesConfig, DrawingConfig, ExportConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_brush = "medium"
/// density = 2.0
///
/// [drawing.brush_sizes]
/// small = 10.0
/// medium = 20.0
/// large = 30.0
///
/// [surface]
/// width = 1080
/// height = 1920
///
/// [export]
/// filename_prefix = "DrawingApp_"
/// background = "white"
/// notify = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen defaults (color, brush presets, density)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawable area size
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export destination and appearance
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// their default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - brush sizes: 1.0 - 100.0 dp
    /// - `density`: 0.5 - 4.0
    /// - colors must parse; otherwise the default is used
    fn validate_and_clamp(&mut self) {
        let sizes = &mut self.drawing.brush_sizes;
        for (name, size) in [
            ("small", &mut sizes.small),
            ("medium", &mut sizes.medium),
            ("large", &mut sizes.large),
        ] {
            if !(1.0..=100.0).contains(&*size) {
                warn!(
                    "Invalid {} brush size {:.1}, clamping to 1.0-100.0 range",
                    name, size
                );
                *size = (*size).clamp(1.0, 100.0);
            }
        }

        if !(0.5..=4.0).contains(&self.drawing.density) {
            warn!(
                "Invalid density {:.2}, clamping to 0.5-4.0 range",
                self.drawing.density
            );
            self.drawing.density = self.drawing.density.clamp(0.5, 4.0);
        }

        if let Err(err) = self.drawing.default_color.to_color() {
            warn!("{} in drawing.default_color, falling back to 'black'", err);
            self.drawing.default_color = DrawingConfig::default().default_color;
        }

        if let Err(err) = self.export.background.to_color() {
            warn!("{} in export.background, falling back to 'white'", err);
            self.export.background = ExportConfig::default().background;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config path cannot be determined, or the file exists but
    /// cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
