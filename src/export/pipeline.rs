use std::{fmt, path::PathBuf, sync::Arc};

use crate::draw::{Color, FrameSnapshot};
use crate::export::{
    dependencies::ExportDependencies, encode::encode_png, file::ExportFileConfig,
    types::EncodingError,
};
use tokio::task;

/// Everything the worker needs to write one image.
#[derive(Clone)]
pub struct ExportRequest {
    /// Composed frame, owned by the request from here on
    pub frame: FrameSnapshot,
    /// Color painted beneath the frame, or `None` to keep transparency
    pub background: Option<Color>,
    pub file_config: ExportFileConfig,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("width", &self.frame.width())
            .field("height", &self.frame.height())
            .field("background", &self.background)
            .field("directory", &self.file_config.directory)
            .finish()
    }
}

/// Encodes and saves one request on the blocking thread pool.
pub(crate) async fn perform_export(
    request: ExportRequest,
    dependencies: Arc<ExportDependencies>,
) -> Result<PathBuf, EncodingError> {
    log::info!(
        "Starting export: {}x{}",
        request.frame.width(),
        request.frame.height()
    );

    let saver = Arc::clone(&dependencies.saver);
    task::spawn_blocking(move || {
        let ExportRequest {
            frame,
            background,
            file_config,
        } = request;
        let png = encode_png(frame, background)?;
        log::debug!("Encoded PNG: {} bytes", png.len());
        saver.save(&png, &file_config)
    })
    .await
    .map_err(|e| EncodingError::Worker(format!("Export task failed: {}", e)))?
}
