//! # Demo Errors
//!
//! Top-level error for a demo run. Module errors convert in through `#[from]`, so the
//! lifecycle code can use `?` throughout.

use crate::buffer::BufferError;
use crate::counter::CounterError;

/// Errors that can end a demo run.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Startup failed: {0}")]
    Buffer(#[from] BufferError),
    #[error("Worker failed: {0}")]
    Counter(#[from] CounterError),
    #[error("Worker {id} did not complete: {source}")]
    WorkerPanicked {
        id: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}
