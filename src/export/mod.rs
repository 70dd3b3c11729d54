//! Image export for drawing surfaces.
//!
//! This module provides:
//! - PNG encoding of composed frame snapshots (optionally flattened over a background)
//! - File saving to `<cache-dir>/DrawingApp_<unix-seconds>.png`
//! - A background worker that receives snapshots by value, so encoding never
//!   races with pointer input on the drawing thread
//! - Desktop notifications reporting success or failure

pub mod dependencies;
pub mod encode;
pub mod file;
pub mod manager;
pub mod pipeline;
pub mod types;


pub use dependencies::{ExportDependencies, ExportFileSaver, ExportNotifier};
pub use encode::encode_png;
pub use file::ExportFileConfig;
pub use manager::ExportManager;
pub use pipeline::ExportRequest;
pub use types::{EncodingError, ExportOutcome, ExportStatus};
