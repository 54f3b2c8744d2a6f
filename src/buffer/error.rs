//! Error types for the buffer owner.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while constructing a [`BufferOwner`](super::BufferOwner).
#[derive(Debug, Error)]
pub enum BufferError {
    /// A zero-length buffer was requested.
    #[error("Buffer size must be greater than zero")]
    EmptySize,

    /// The last element `(size - 1) * 2` would not fit in an `i32`.
    #[error("Buffer size {0} is too large for i32 elements")]
    TooLarge(usize),

    /// The allocator refused the request.
    #[error("Buffer allocation of {size} elements failed: {source}")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },
}
