//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error returned when a sequence cannot be partitioned into chunks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    /// The requested chunk size is zero or negative.
    #[error("Invalid chunk size: {0} (must be greater than zero)")]
    InvalidChunkSize(i64),
}

/// Error types for the write buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaverError {
    /// The buffer could not be drained within the retry budget.
    ///
    /// The unflushed records stay buffered and are retried by the next flush trigger.
    #[error("Failed to flush buffer: {remaining} record(s) left unflushed after retries")]
    FlushFailed {
        /// Number of records still held in the buffer.
        remaining: usize,
    },

    /// Buffer capacity must hold at least one record.
    #[error("Invalid buffer capacity: must be at least 1")]
    InvalidCapacity,

    /// The periodic flush interval must be non-zero.
    #[error("Invalid flush interval: must be greater than zero")]
    InvalidFlushInterval,
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// No row exists with the requested id.
    #[error("Method {0} not found")]
    NotFound(i64),

    /// An update or delete matched no rows.
    #[error("No rows affected for method {0}")]
    NoRowsAffected(i64),

    /// A value does not fit the column type.
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// A batch insert was requested with an unusable chunk size.
    #[error(transparent)]
    InvalidChunkSize(#[from] ChunkError),
}

/// Reasons an input line is rejected before it reaches the buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line is not of the form `user_id,value`.
    #[error("Malformed line (expected `user_id,value`): {0}")]
    Malformed(String),

    /// The user id is missing, zero, or not a number.
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),

    /// The value is empty.
    #[error("Value cannot be empty")]
    EmptyValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_failed_message_includes_remaining() {
        let err = SaverError::FlushFailed { remaining: 3 };
        assert_eq!(
            err.to_string(),
            "Failed to flush buffer: 3 record(s) left unflushed after retries"
        );
    }

    #[test]
    fn test_chunk_error_converts_to_database_error() {
        let err: DatabaseError = ChunkError::InvalidChunkSize(0).into();
        assert!(matches!(
            err,
            DatabaseError::InvalidChunkSize(ChunkError::InvalidChunkSize(0))
        ));
        // Transparent: the message is the chunk error's message
        assert_eq!(
            err.to_string(),
            "Invalid chunk size: 0 (must be greater than zero)"
        );
    }

    #[test]
    fn test_sql_error_conversion() {
        let err: DatabaseError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DatabaseError::SqlError(_)));
        assert!(err.to_string().starts_with("SQL error:"));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::EmptyValue.to_string(), "Value cannot be empty");
        assert_eq!(
            InputError::InvalidUserId("abc".to_string()).to_string(),
            "Invalid user id: \"abc\""
        );
    }
}
