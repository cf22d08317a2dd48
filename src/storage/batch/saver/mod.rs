//! Write buffer.
//!
//! This module provides the `Saver`, which collects individually saved records
//! in a bounded in-memory buffer and hands them to a `Flusher` in batches.
//! A flush happens when:
//! - a save finds the buffer full
//! - the periodic timer fires
//! - `close` is called
//! - the cancellation token fires (one final flush, then the timer task exits)
//!
//! All of these take the same lock, so flushes never overlap and each save is
//! atomic with respect to the buffer.

mod flush;

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error_handling::SaverError;
use crate::models::Method;
use crate::storage::method::MethodRepo;

use super::flusher::{ChunkFlusher, Flusher};
use super::types::SaverConfig;

/// State shared between the `Saver` handles and the background task.
struct Shared<F> {
    buffer: Mutex<Vec<Method>>,
    capacity: usize,
    max_flush_retries: u32,
    flusher: F,
}

/// Buffers records in memory and commits them in batches.
///
/// Cloning is cheap; clones share the same buffer. Records still buffered when
/// the process exits without `close` (or cancellation) are lost.
pub struct Saver<F> {
    shared: Arc<Shared<F>>,
}

impl<F> Clone for Saver<F> {
    fn clone(&self) -> Self {
        Saver {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<F: Flusher + 'static> Saver<F> {
    /// Creates a saver and spawns its periodic flush task.
    ///
    /// The task runs until `cancel` fires, flushes one last time, then exits;
    /// await the returned handle to wait for that final flush.
    ///
    /// # Errors
    ///
    /// Returns `SaverError::InvalidCapacity` or `SaverError::InvalidFlushInterval`
    /// if `config` cannot be used.
    pub fn start(
        flusher: F,
        config: &SaverConfig,
        cancel: CancellationToken,
    ) -> Result<(Self, JoinHandle<()>), SaverError> {
        config.validate()?;

        let shared = Arc::new(Shared {
            buffer: Mutex::new(Vec::new()),
            capacity: config.capacity,
            max_flush_retries: config.max_flush_retries,
            flusher,
        });

        let handle = tokio::spawn(flush::run_auto_flush(
            Arc::clone(&shared),
            config.flush_interval,
            cancel,
        ));

        log::info!(
            "Saver started (capacity {}, chunk size {}, {} flush retries, flush every {:?})",
            config.capacity,
            config.chunk_size,
            config.max_flush_retries,
            config.flush_interval
        );

        Ok((Saver { shared }, handle))
    }

    /// Adds a record to the buffer, flushing first if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns `SaverError::FlushFailed` if the buffer was full and could not be
    /// drained. The record is not buffered in that case.
    pub async fn save(&self, method: Method) -> Result<(), SaverError> {
        let mut buffer = self.shared.buffer.lock().await;

        if buffer.len() + 1 > self.shared.capacity {
            self.shared.flush_with_retry(&mut buffer).await?;
        }

        buffer.push(method);
        Ok(())
    }

    /// Flushes whatever is buffered.
    ///
    /// On success the buffer is empty. The saver stays usable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SaverError::FlushFailed` if records remain after all retries.
    pub async fn close(&self) -> Result<(), SaverError> {
        self.shared.flush_locked().await
    }

    /// Number of records currently buffered.
    pub async fn buffered(&self) -> usize {
        self.shared.buffer.lock().await.len()
    }
}

/// Starts a saver that commits through `repo` in chunks of `config.chunk_size`.
///
/// Returns the saver and the handle of its background flush task.
pub fn start_saver<R: MethodRepo + 'static>(
    repo: R,
    config: &SaverConfig,
    cancel: CancellationToken,
) -> Result<(Saver<ChunkFlusher<R>>, JoinHandle<()>), SaverError> {
    Saver::start(ChunkFlusher::new(config.chunk_size, repo), config, cancel)
}
