//! Host-agnostic events that drive a drawing surface.

use serde::{Deserialize, Serialize};

/// One input or configuration event forwarded by a host to the surface.
///
/// Hosts translate their native pointer callbacks and UI controls into these
/// values. The serde form (tagged by `"type"`) doubles as the gesture-script
/// format read by the `drawpad` binary:
///
/// ```json
/// [
///   { "type": "brush", "size": 20 },
///   { "type": "color", "spec": "#FF0000" },
///   { "type": "down", "x": 10, "y": 10 },
///   { "type": "move", "x": 50, "y": 50 },
///   { "type": "up" },
///   { "type": "undo" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SurfaceEvent {
    /// Pointer touched the surface (gesture start)
    Down { x: f64, y: f64 },
    /// Pointer dragged while touching
    Move { x: f64, y: f64 },
    /// Pointer lifted (gesture end)
    Up,
    /// Undo the most recent stroke
    Undo,
    /// Change the color for the next gesture
    Color { spec: String },
    /// Change the brush size for the next gesture, in device-independent units
    Brush { size: f64 },
    /// Drawable area changed size
    Resize { width: u32, height: u32 },
}

/// Parses a JSON array of events.
pub fn parse_script(json: &str) -> Result<Vec<SurfaceEvent>, serde_json::Error> {
    serde_json::from_str(json)
}
