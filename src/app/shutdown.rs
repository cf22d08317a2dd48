//! Graceful shutdown handling.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Stops the saver's background task and waits for its final flush.
///
/// Cancelling the token makes the task flush whatever is still buffered and exit;
/// awaiting the handle guarantees that flush has finished before returning.
pub async fn shutdown_gracefully(cancel: CancellationToken, saver_task: JoinHandle<()>) {
    cancel.cancel();
    if let Err(e) = saver_task.await {
        log::error!("Saver background task did not shut down cleanly: {}", e);
    }
}
