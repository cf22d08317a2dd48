//! Database operations.
//!
//! SQLite pool setup, migrations, the method repository, and the batching write buffer.

pub mod batch;
pub mod method;
pub mod migrations;
pub mod pool;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use batch::{start_saver, ChunkFlusher, Flusher, Saver, SaverConfig};
pub use method::{MethodRepo, SqliteMethodRepo};
pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;
