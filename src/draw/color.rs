//! RGBA color type, predefined color constants and color-spec parsing.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use drawpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// A color specification that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color specification '{spec}'")]
pub struct InvalidColorError {
    /// The rejected input, as given by the caller
    pub spec: String,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(0xFF, r, g, b)
    }

    /// Builds a color from 8-bit channels, alpha first.
    pub fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parses a named or hex-coded color.
    ///
    /// Accepted forms:
    /// - `#RRGGBB` (opaque)
    /// - `#AARRGGBB`
    /// - a color name such as `black`, `red`, `lightgray` (case-insensitive)
    ///
    /// # Errors
    /// Returns [`InvalidColorError`] for anything else, including hex strings of
    /// the wrong length or with non-hex digits.
    pub fn parse(spec: &str) -> Result<Self, InvalidColorError> {
        let invalid = || InvalidColorError {
            spec: spec.to_string(),
        };

        if let Some(hex) = spec.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            let [a, r, g, b] = value.to_be_bytes();
            return match hex.len() {
                6 => Ok(Self::from_rgb8(r, g, b)),
                8 => Ok(Self::from_argb8(a, r, g, b)),
                _ => Err(invalid()),
            };
        }

        name_to_color(spec).ok_or_else(invalid)
    }

    /// Returns the color as 8-bit channels in `[a, r, g, b]` order.
    pub fn to_argb8(&self) -> [u8; 4] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.a), channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl std::str::FromStr for Color {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Maps color names to Color values (case-insensitive).
fn name_to_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => BLACK,
        "darkgray" | "darkgrey" => Color::from_rgb8(0x44, 0x44, 0x44),
        "gray" | "grey" => Color::from_rgb8(0x88, 0x88, 0x88),
        "lightgray" | "lightgrey" => Color::from_rgb8(0xCC, 0xCC, 0xCC),
        "white" => WHITE,
        "red" => RED,
        "green" | "lime" => GREEN,
        "blue" => BLUE,
        "yellow" => YELLOW,
        "cyan" | "aqua" => Color::from_rgb8(0x00, 0xFF, 0xFF),
        "magenta" | "fuchsia" => Color::from_rgb8(0xFF, 0x00, 0xFF),
        "maroon" => Color::from_rgb8(0x80, 0x00, 0x00),
        "navy" => Color::from_rgb8(0x00, 0x00, 0x80),
        "olive" => Color::from_rgb8(0x80, 0x80, 0x00),
        "purple" => Color::from_rgb8(0x80, 0x00, 0x80),
        "silver" => Color::from_rgb8(0xC0, 0xC0, 0xC0),
        "teal" => Color::from_rgb8(0x00, 0x80, 0x80),
        "orange" => ORANGE,
        "pink" => PINK,
        _ => return None,
    };
    Some(color)
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color, used for the blank backing store
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
