//! Main application modules.
//!
//! This module provides input parsing, progress logging, and shutdown handling
//! used by the load pipeline.

pub mod input;
pub mod logging;
pub mod shutdown;

// Re-export public API
pub use input::{is_skippable, parse_method_line};
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
