//! method_store library: batched persistence of method records
//!
//! Records are saved one at a time into a bounded in-memory buffer and committed
//! to SQLite in fixed-size chunks. A flush happens when the buffer is full, when
//! the periodic timer fires, when the saver is closed, and once more when its
//! cancellation token fires. Chunks that fail to commit stay buffered and are
//! retried up to a configured budget.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use method_store::{open_repo, start_saver, Method, SaverConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = open_repo(Path::new("./methods.db")).await?;
//! let cancel = CancellationToken::new();
//! let (saver, task) = start_saver(repo, &SaverConfig::default(), cancel.clone())?;
//!
//! saver.save(Method::new(1, "GET /users")).await?;
//! saver.close().await?;
//!
//! cancel.cancel();
//! task.await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. `start_saver` spawns a background task
//! and must be called from within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod run;
pub mod storage;
pub mod utils;

// Re-export public API
pub use config::{Cli, Command, LoadArgs, LoadMode, LogFormat, LogLevel};
pub use error_handling::{ChunkError, DatabaseError, InputError, SaverError};
pub use models::Method;
pub use run::{open_repo, run_load, LoadReport};
pub use storage::{
    run_migrations, start_saver, ChunkFlusher, Flusher, MethodRepo, Saver, SaverConfig,
    SqliteMethodRepo,
};
pub use utils::chunk_slice;
