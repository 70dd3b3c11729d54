//! Data types for image export.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draw::RenderError;

/// Outcome of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Image written; holds the absolute path of the file
    Success(PathBuf),
    /// Export failed; holds the error message
    Failed(String),
}

impl ExportOutcome {
    /// Path of the written file, or `None` when the export failed.
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Success(path) => Some(path),
            ExportOutcome::Failed(_) => None,
        }
    }
}

/// Errors that can occur while encoding or writing an exported image.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Failed to prepare frame: {0}")]
    Render(#[from] RenderError),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Write(#[from] std::io::Error),

    #[error("Export worker error: {0}")]
    Worker(String),
}

/// Status of the export worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// No export has run yet.
    Idle,
    /// An export is being encoded or written.
    InProgress,
    /// The last export completed successfully.
    Success,
    /// The last export failed.
    Failed(String),
}
