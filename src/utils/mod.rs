//! Utility functions.
//!
//! This module provides:
//! - Fixed-size slice partitioning used by the flusher and batch inserts

mod chunk;

pub use chunk::chunk_slice;
