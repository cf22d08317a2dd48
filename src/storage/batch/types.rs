//! Write buffer configuration.

use std::time::Duration;

use crate::config::{
    DEFAULT_BUFFER_CAPACITY, DEFAULT_CHUNK_SIZE, DEFAULT_FLUSH_INTERVAL_SECS,
    DEFAULT_FLUSH_RETRIES,
};
use crate::error_handling::SaverError;

/// Configuration for the write buffer.
#[derive(Debug, Clone)]
pub struct SaverConfig {
    /// Maximum number of records held in memory before a save forces a flush
    pub capacity: usize,
    /// Number of records committed per backend call
    pub chunk_size: i64,
    /// Flush attempts made before reporting `FlushFailed`
    pub max_flush_retries: u32,
    /// Interval between automatic flushes
    pub flush_interval: Duration,
}

impl Default for SaverConfig {
    fn default() -> Self {
        SaverConfig {
            capacity: DEFAULT_BUFFER_CAPACITY,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_flush_retries: DEFAULT_FLUSH_RETRIES,
            flush_interval: Duration::from_secs(DEFAULT_FLUSH_INTERVAL_SECS),
        }
    }
}

impl SaverConfig {
    /// Checks the settings the saver itself depends on.
    ///
    /// `chunk_size` is deliberately not checked here: the flusher handles a bad
    /// chunk size by keeping every record unflushed.
    pub fn validate(&self) -> Result<(), SaverError> {
        if self.capacity == 0 {
            return Err(SaverError::InvalidCapacity);
        }
        if self.flush_interval.is_zero() {
            return Err(SaverError::InvalidFlushInterval);
        }
        Ok(())
    }
}
