//! Method persistence.
//!
//! The write buffer only needs one capability from storage: commit a chunk of
//! records and report whether it worked. That capability is the [`MethodRepo`]
//! trait. [`SqliteMethodRepo`] implements it on top of SQLite and also provides
//! the read/update/delete operations used by the CLI.

mod sqlite;

use std::future::Future;
use std::sync::Arc;

use crate::error_handling::DatabaseError;
use crate::models::Method;

pub use sqlite::SqliteMethodRepo;

/// Commits chunks of method records to persistent storage.
pub trait MethodRepo: Send + Sync {
    /// Inserts `items` as one unit of work.
    ///
    /// On success returns the committed records with their assigned `id` and
    /// `created_at`. On error the caller must treat the whole chunk as
    /// uncommitted; whether a backend may have written part of it before
    /// failing is backend-specific, so retries are at-least-once.
    fn add(
        &self,
        items: &[Method],
    ) -> impl Future<Output = Result<Vec<Method>, DatabaseError>> + Send;
}

impl<R: MethodRepo> MethodRepo for Arc<R> {
    fn add(
        &self,
        items: &[Method],
    ) -> impl Future<Output = Result<Vec<Method>, DatabaseError>> + Send {
        (**self).add(items)
    }
}
