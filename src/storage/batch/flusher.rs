//! Chunked commits of buffered records.

use std::future::Future;

use crate::models::Method;
use crate::storage::method::MethodRepo;
use crate::utils::chunk_slice;

/// Commits a batch of records and reports which ones did not make it.
pub trait Flusher: Send + Sync {
    /// Commits `items` and returns the records that failed, in their original order.
    ///
    /// Never fails as a whole: backend errors are turned into unflushed records.
    fn flush(&self, items: &[Method]) -> impl Future<Output = Vec<Method>> + Send;
}

/// Flusher that splits a batch into fixed-size chunks and commits them one by one.
///
/// Chunks are committed in order with one `MethodRepo::add` call each. A failed
/// chunk contributes all of its records to the result; there are no retries here.
pub struct ChunkFlusher<R> {
    chunk_size: i64,
    repo: R,
}

impl<R: MethodRepo> ChunkFlusher<R> {
    /// Creates a flusher committing through `repo` in chunks of `chunk_size`.
    pub fn new(chunk_size: i64, repo: R) -> Self {
        ChunkFlusher { chunk_size, repo }
    }
}

impl<R: MethodRepo> Flusher for ChunkFlusher<R> {
    async fn flush(&self, items: &[Method]) -> Vec<Method> {
        let chunks = match chunk_slice(items, self.chunk_size) {
            Ok(chunks) => chunks,
            Err(e) => {
                log::error!(
                    "Cannot split {} records into chunks, keeping all of them unflushed: {}",
                    items.len(),
                    e
                );
                return items.to_vec();
            }
        };

        let mut unflushed = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            if let Err(e) = self.repo.add(chunk).await {
                log::warn!(
                    "Failed to commit chunk {} of {} ({} records): {}",
                    index + 1,
                    chunks.len(),
                    chunk.len(),
                    e
                );
                unflushed.extend_from_slice(chunk);
            }
        }

        if unflushed.is_empty() {
            log::debug!(
                "Committed {} records in {} chunk(s)",
                items.len(),
                chunks.len()
            );
        } else {
            log::warn!(
                "Flush completed: {} committed, {} unflushed out of {} total",
                items.len() - unflushed.len(),
                unflushed.len(),
                items.len()
            );
        }

        unflushed
    }
}
