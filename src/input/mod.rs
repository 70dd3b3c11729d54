//! Pointer input handling and the drawing surface state machine.
//!
//! This module turns host pointer events into strokes. It maintains the current
//! drawing parameters (color, thickness), the gesture state machine and the
//! finalized/discarded stroke lists, and composes frames on request.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{SurfaceEvent, parse_script};
pub use state::{DrawingSurface, GestureState, SurfaceError};
