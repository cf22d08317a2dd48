//! Batched writes.
//!
//! Records saved one at a time are collected by the [`Saver`] and committed
//! in chunks by a [`Flusher`].

mod flusher;
mod saver;
mod types;

pub use flusher::{ChunkFlusher, Flusher};
pub use saver::{start_saver, Saver};
pub use types::SaverConfig;
