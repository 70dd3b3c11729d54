//! Freehand drawing surface with undo and PNG export.
//!
//! The [`input::DrawingSurface`] turns pointer events into strokes and composes
//! frames with Cairo; [`export::ExportManager`] encodes composed frames on a
//! background task. Configuration lives in [`config`].

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod notification;
pub mod util;

pub use config::Config;
