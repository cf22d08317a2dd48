//! Configuration constants.
//!
//! Defaults used by the CLI and by `SaverConfig::default()`.

use std::time::Duration;

/// Default SQLite database path
pub const DEFAULT_DB_PATH: &str = "./methods.db";

/// Records held in memory before a save forces a flush
pub const DEFAULT_BUFFER_CAPACITY: usize = 100;

/// Records committed per backend call
pub const DEFAULT_CHUNK_SIZE: i64 = 10;

/// Flush attempts before a flush is reported as failed
pub const DEFAULT_FLUSH_RETRIES: u32 = 2;

/// Seconds between automatic flushes
pub const DEFAULT_FLUSH_INTERVAL_SECS: u64 = 5;

/// Longest timer period the saver schedules; longer intervals are clamped to it
pub const MAX_FLUSH_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Page size for `list` when none is given
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Log progress every N accepted input records
pub const LOGGING_INTERVAL: usize = 1000;
