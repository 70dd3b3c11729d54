use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::export::{
    file::{self, ExportFileConfig},
    types::{EncodingError, ExportOutcome},
};
use crate::notification;

/// Abstraction over writing encoded images to disk.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, image_data: &[u8], config: &ExportFileConfig) -> Result<PathBuf, EncodingError>;
}

/// Abstraction over telling the user how an export went.
#[async_trait]
pub trait ExportNotifier: Send + Sync {
    async fn notify(&self, outcome: &ExportOutcome);
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub saver: Arc<dyn ExportFileSaver>,
    pub notifier: Arc<dyn ExportNotifier>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            saver: Arc::new(DefaultFileSaver),
            notifier: Arc::new(DesktopNotifier),
        }
    }
}

impl ExportDependencies {
    /// Default saver with notifications switched off.
    pub fn without_notifications() -> Self {
        Self {
            notifier: Arc::new(SilentNotifier),
            ..Self::default()
        }
    }
}

struct DefaultFileSaver;
struct DesktopNotifier;
struct SilentNotifier;

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, image_data: &[u8], config: &ExportFileConfig) -> Result<PathBuf, EncodingError> {
        file::save_png(image_data, config)
    }
}

#[async_trait]
impl ExportNotifier for DesktopNotifier {
    async fn notify(&self, outcome: &ExportOutcome) {
        let (summary, body, icon) = match outcome {
            ExportOutcome::Success(path) => (
                "Drawing saved",
                format!("File saved successfully: {}", path.display()),
                "image-x-generic",
            ),
            ExportOutcome::Failed(_) => (
                "Export failed",
                "Something went wrong while saving the file.".to_string(),
                "dialog-error",
            ),
        };
        if let Err(e) = notification::send_notification(summary, &body, Some(icon)).await {
            log::warn!("Failed to send notification: {}", e);
        }
    }
}

#[async_trait]
impl ExportNotifier for SilentNotifier {
    async fn notify(&self, _outcome: &ExportOutcome) {}
}
