//! Rendering primitives and stroke definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the drawing surface:
//! - [`Color`]: RGBA color representation with parsing and predefined constants
//! - [`StrokePath`]: Geometry of one freehand gesture, tagged with color and thickness
//! - [`Frame`]: Finalized strokes plus the undo discard list
//! - [`FrameSnapshot`]: Owned raster copy of a composed frame
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod path;
pub mod render;
pub mod snapshot;

// Re-export commonly used types at module level
pub use color::{Color, InvalidColorError};
pub use frame::Frame;
pub use path::{Point, StrokePath};
pub use render::{fill_background, render_backing_store, render_stroke, render_strokes};
pub use snapshot::{FrameSnapshot, RenderError};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
