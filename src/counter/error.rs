//! Error types for the shared counter.

use thiserror::Error;

/// Errors that can occur while touching a [`SharedCounter`](super::SharedCounter).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CounterError {
    /// Another thread panicked while holding the lock.
    #[error("Counter lock poisoned")]
    Poisoned,

    /// Incrementing would exceed `u64::MAX`.
    #[error("Counter overflow at {0}")]
    Overflow(u64),
}
