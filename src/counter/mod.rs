//! # Shared Counter
//!
//! A `u64` behind a single `Mutex`. Workers receive an `Arc<SharedCounter>` instead of
//! reaching for a global, so every test can start from a fresh counter.
//!
//! All mutation goes through [`SharedCounter::increment_with`], which holds the guard for
//! the duration of the caller's closure and drops it on every exit path. Increments are
//! therefore totally ordered across threads.

pub mod error;

pub use error::*;

use std::sync::{Mutex, MutexGuard};

/// Lock-serialized counter shared between workers.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: Mutex<u64>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(value: u64) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// Adds one and runs `under_lock` with the new value before the lock is released.
    ///
    /// Overflow is checked: at `u64::MAX` the counter is left unchanged and
    /// [`CounterError::Overflow`] is returned without calling `under_lock`.
    pub fn increment_with<R>(
        &self,
        under_lock: impl FnOnce(u64) -> R,
    ) -> Result<(u64, R), CounterError> {
        let mut guard = self.lock()?;
        let next = guard
            .checked_add(1)
            .ok_or(CounterError::Overflow(*guard))?;
        *guard = next;
        let output = under_lock(next);
        Ok((next, output))
    }

    /// Adds one and returns the new value.
    pub fn increment(&self) -> Result<u64, CounterError> {
        self.increment_with(|_| ()).map(|(value, ())| value)
    }

    pub fn get(&self) -> Result<u64, CounterError> {
        Ok(*self.lock()?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, u64>, CounterError> {
        self.value.lock().map_err(|_| CounterError::Poisoned)
    }
}
