//! Configuration type definitions.

use super::enums::{BrushSize, ColorSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen state when the surface is first created. Hosts can change
/// color and brush at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color - a name (black, red, lightgray, ...), a hex string
    /// (`#RRGGBB` or `#AARRGGBB`) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Brush preset selected on start (small, medium, large)
    #[serde(default = "default_brush")]
    pub default_brush: BrushSize,

    /// Sizes of the brush presets in device-independent units
    #[serde(default)]
    pub brush_sizes: BrushSizesConfig,

    /// Display density used to convert brush sizes to pixels (valid range: 0.5 - 4.0)
    #[serde(default = "default_density")]
    pub density: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush: default_brush(),
            brush_sizes: BrushSizesConfig::default(),
            density: default_density(),
        }
    }
}

impl DrawingConfig {
    /// Size of a brush preset in device-independent units.
    pub fn brush_size_dp(&self, brush: BrushSize) -> f64 {
        match brush {
            BrushSize::Small => self.brush_sizes.small,
            BrushSize::Medium => self.brush_sizes.medium,
            BrushSize::Large => self.brush_sizes.large,
        }
    }
}

/// Brush preset sizes in device-independent units (valid range: 1.0 - 100.0).
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BrushSizesConfig {
    #[serde(default = "default_small_brush")]
    pub small: f64,
    #[serde(default = "default_medium_brush")]
    pub medium: f64,
    #[serde(default = "default_large_brush")]
    pub large: f64,
}

impl Default for BrushSizesConfig {
    fn default() -> Self {
        Self {
            small: default_small_brush(),
            medium: default_medium_brush(),
            large: default_large_brush(),
        }
    }
}

/// Drawable area settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for exported images (`~` is expanded). Defaults to the user
    /// cache directory, e.g. `~/.cache/drawpad`
    #[serde(default)]
    pub directory: Option<String>,

    /// File name prefix; the Unix timestamp and `.png` are appended
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Color painted beneath the strokes in exported images
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Send a desktop notification when an export finishes
    #[serde(default = "default_notify")]
    pub notify: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_prefix: default_filename_prefix(),
            background: default_background(),
            notify: default_notify(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush() -> BrushSize {
    BrushSize::Medium
}

fn default_density() -> f64 {
    1.0
}

fn default_small_brush() -> f64 {
    10.0
}

fn default_medium_brush() -> f64 {
    20.0
}

fn default_large_brush() -> f64 {
    30.0
}

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    1920
}

fn default_filename_prefix() -> String {
    "DrawingApp_".to_string()
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_notify() -> bool {
    true
}
