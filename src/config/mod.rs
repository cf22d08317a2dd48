//! Application configuration and constants.
//!
//! This module provides:
//! - Default values (buffer capacity, chunk size, retries, etc.)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, LoadArgs, LoadMode, LogFormat, LogLevel};
