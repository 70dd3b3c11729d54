//! Configuration enum types.

use crate::draw::{Color, InvalidColorError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush size presets offered by the brush picker.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BrushSize {
    Small,
    Medium,
    Large,
}

/// Color specification - either a named/hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex color, optionally with a leading alpha byte
/// default_color = "#FF8800"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color or `#RRGGBB` / `#AARRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    pub fn to_color(&self) -> Result<Color, InvalidColorError> {
        match self {
            ColorSpec::Name(name) => Color::parse(name),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }
}
