//! Error handling.
//!
//! Error types are grouped by where they originate:
//! - **Initialization**: logger setup
//! - **Chunking**: invalid chunk sizes handed to the partitioning helper
//! - **Saver**: write buffer construction and flush failures
//! - **Database**: SQL and row-level failures
//! - **Input**: rejected input lines

mod types;

// Re-export public API
pub use types::{ChunkError, DatabaseError, InitializationError, InputError, SaverError};
