//! Flush triggers: retry loop and the background timer task.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::MAX_FLUSH_INTERVAL;
use crate::error_handling::SaverError;
use crate::models::Method;
use crate::storage::batch::flusher::Flusher;

use super::Shared;

impl<F: Flusher> Shared<F> {
    /// Drives `buffer` to empty, making at most `max_flush_retries` flush attempts.
    ///
    /// Each attempt hands the whole buffer to the flusher and keeps only what it
    /// reports as unflushed. An empty buffer succeeds without touching the backend.
    /// Records still unflushed after the last attempt remain in `buffer`.
    ///
    /// Callers must hold the buffer lock for the whole call.
    pub(super) async fn flush_with_retry(
        &self,
        buffer: &mut Vec<Method>,
    ) -> Result<(), SaverError> {
        if buffer.is_empty() {
            return Ok(());
        }

        for attempt in 1..=self.max_flush_retries {
            let before = buffer.len();
            let unflushed = self.flusher.flush(&buffer[..]).await;
            *buffer = unflushed;

            if buffer.is_empty() {
                log::debug!("Flushed {} buffered records (attempt {})", before, attempt);
                return Ok(());
            }

            log::warn!(
                "Flush attempt {}/{} left {} of {} records unflushed",
                attempt,
                self.max_flush_retries,
                buffer.len(),
                before
            );
        }

        Err(SaverError::FlushFailed {
            remaining: buffer.len(),
        })
    }

    /// Takes the buffer lock and flushes with retries.
    pub(super) async fn flush_locked(&self) -> Result<(), SaverError> {
        let mut buffer = self.buffer.lock().await;
        self.flush_with_retry(&mut buffer).await
    }
}

/// Background task: flushes every `delay` until `cancel` fires, then flushes once more and exits.
///
/// Failures are logged only; unflushed records stay buffered for the next trigger.
pub(super) async fn run_auto_flush<F: Flusher>(
    shared: Arc<Shared<F>>,
    delay: Duration,
    cancel: CancellationToken,
) {
    if delay > MAX_FLUSH_INTERVAL {
        log::debug!(
            "Flush interval {:?} clamped to {:?}",
            delay,
            MAX_FLUSH_INTERVAL
        );
    }
    let delay = delay.min(MAX_FLUSH_INTERVAL);

    // First tick one full interval after start, not immediately
    let mut ticker = interval_at(Instant::now() + delay, delay);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                log::info!("Saver cancelled, flushing remaining records...");
                if let Err(e) = shared.flush_locked().await {
                    log::error!("Error flushing final batch: {}", e);
                }
                log::info!("Saver background task stopped");
                return;
            }
            _ = ticker.tick() => {
                if let Err(e) = shared.flush_locked().await {
                    log::warn!("Error during periodic flush: {}", e);
                }
            }
        }
    }
}
