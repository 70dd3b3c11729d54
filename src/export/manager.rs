use std::{path::PathBuf, sync::Arc};

use tokio::sync::{Mutex, mpsc, oneshot};

use crate::export::{
    dependencies::ExportDependencies,
    pipeline::{ExportRequest, perform_export},
    types::{EncodingError, ExportOutcome, ExportStatus},
};

struct QueuedExport {
    request: ExportRequest,
    reply: oneshot::Sender<ExportOutcome>,
}

/// Background export worker.
///
/// The UI thread composes a [`FrameSnapshot`](crate::draw::FrameSnapshot), wraps it in an
/// [`ExportRequest`] and hands it over through a channel; encoding and file I/O
/// then run on the runtime without touching the drawing surface.
#[derive(Clone)]
pub struct ExportManager {
    /// Channel for sending export requests.
    request_tx: mpsc::UnboundedSender<QueuedExport>,
    /// Shared status of the current export.
    status: Arc<Mutex<ExportStatus>>,
    /// Shared result of the last export (if any).
    last_result: Arc<Mutex<Option<ExportOutcome>>>,
}

impl ExportManager {
    /// Create a new export manager with the default saver and desktop notifications.
    ///
    /// This spawns a background task that processes requests in order.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_dependencies(runtime_handle, ExportDependencies::default())
    }

    /// Create an export manager with custom dependencies (useful for testing).
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: ExportDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<QueuedExport>();
        let status = Arc::new(Mutex::new(ExportStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let result_clone = last_result.clone();

        runtime_handle.spawn(async move {
            while let Some(QueuedExport { request, reply }) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", request);

                *status_clone.lock().await = ExportStatus::InProgress;

                let outcome = match perform_export(request, dependencies.clone()).await {
                    Ok(path) => {
                        log::info!("Export successful: {}", path.display());
                        *status_clone.lock().await = ExportStatus::Success;
                        ExportOutcome::Success(path)
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        *status_clone.lock().await = ExportStatus::Failed(error_message.clone());
                        ExportOutcome::Failed(error_message)
                    }
                };

                *result_clone.lock().await = Some(outcome.clone());
                dependencies.notifier.notify(&outcome).await;

                if reply.send(outcome).is_err() {
                    log::debug!("Export requester went away before the result arrived");
                }
            }
        });

        Self {
            request_tx,
            status,
            last_result,
        }
    }

    /// Queue an export.
    ///
    /// Non-blocking: returns a receiver that resolves once the image has been
    /// written or the export has failed.
    pub fn request_export(
        &self,
        request: ExportRequest,
    ) -> Result<oneshot::Receiver<ExportOutcome>, EncodingError> {
        let (reply, receiver) = oneshot::channel();
        self.request_tx
            .send(QueuedExport { request, reply })
            .map_err(|_| EncodingError::Worker("Export manager not running".to_string()))?;
        Ok(receiver)
    }

    /// Export and wait for the result.
    ///
    /// Returns the absolute path of the written file, or `None` when the export
    /// failed (the error has already been logged and reported).
    pub async fn export(&self, request: ExportRequest) -> Option<PathBuf> {
        let receiver = match self.request_export(request) {
            Ok(receiver) => receiver,
            Err(e) => {
                log::error!("Failed to queue export: {}", e);
                return None;
            }
        };
        match receiver.await {
            Ok(outcome) => outcome.saved_path().map(|path| path.to_path_buf()),
            Err(_) => {
                log::error!("Export worker stopped before reporting a result");
                None
            }
        }
    }

    /// Get the current export status.
    pub async fn get_status(&self) -> ExportStatus {
        self.status.lock().await.clone()
    }

    /// Get the result of the last export and clear it.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.last_result.lock().await.take()
    }

    /// Try to get the result without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<ExportOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }
}

#[cfg(test)]
impl ExportManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<QueuedExport>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(ExportStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
        }
    }
}
