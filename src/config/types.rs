//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BUFFER_CAPACITY, DEFAULT_CHUNK_SIZE, DEFAULT_DB_PATH, DEFAULT_FLUSH_INTERVAL_SECS,
    DEFAULT_FLUSH_RETRIES, DEFAULT_LIST_LIMIT,
};
use crate::storage::SaverConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How `load` writes records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LoadMode {
    /// Save records one by one through the write buffer
    Buffered,
    /// Insert all records in one transaction, chunk by chunk
    Bulk,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Load records through the write buffer
/// method_store load methods.csv
///
/// # Bigger buffer, smaller chunks, custom database
/// method_store --db-path ./custom.db load methods.csv --capacity 500 --chunk-size 50
///
/// # Inspect what was stored
/// method_store list --limit 20
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "method_store",
    about = "Stores method records in SQLite through a batching write buffer."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Database path (SQLite file)
    #[arg(long, global = true, value_parser, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load `user_id,value` lines from a file (or `-` for stdin)
    Load(LoadArgs),

    /// List stored methods ordered by id
    List {
        /// Maximum number of methods to print
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,

        /// Number of methods to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Show a single method
    Describe {
        /// Method id
        id: i64,
    },

    /// Replace the value of a method
    Update {
        /// Method id
        id: i64,
        /// New value
        value: String,
    },

    /// Delete a method
    Remove {
        /// Method id
        id: i64,
    },
}

/// Options for the `load` subcommand.
#[derive(Debug, Clone, Args)]
pub struct LoadArgs {
    /// File to read (`-` reads stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Write mode: buffered|bulk
    #[arg(long, value_enum, default_value_t = LoadMode::Buffered)]
    pub mode: LoadMode,

    /// Records held in memory before a save forces a flush
    #[arg(long, default_value_t = DEFAULT_BUFFER_CAPACITY)]
    pub capacity: usize,

    /// Records committed per database call
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, allow_negative_numbers = true)]
    pub chunk_size: i64,

    /// Flush attempts before giving up on a flush
    #[arg(long, default_value_t = DEFAULT_FLUSH_RETRIES)]
    pub flush_retries: u32,

    /// Seconds between automatic flushes
    #[arg(long, default_value_t = DEFAULT_FLUSH_INTERVAL_SECS)]
    pub flush_interval_secs: u64,
}

impl LoadArgs {
    /// Write buffer settings described by these options.
    pub fn saver_config(&self) -> SaverConfig {
        SaverConfig {
            capacity: self.capacity,
            chunk_size: self.chunk_size,
            max_flush_retries: self.flush_retries,
            flush_interval: Duration::from_secs(self.flush_interval_secs),
        }
    }
}
