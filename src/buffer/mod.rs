//! # Buffer Owner
//!
//! [`BufferOwner`] allocates a fixed-length integer sequence once, fills element `i` with
//! `i * 2`, and then only hands out reads. The storage is a boxed slice: it cannot grow,
//! it is fully initialized before the constructor returns, and it is freed exactly once
//! when the owner is dropped.
//!
//! Because nothing can write to the slice after construction, the owner is `Sync` and
//! workers read it through an `Arc` without any lock.

pub mod error;

pub use error::*;

use crate::report::{Event, Reporter};
use tracing::debug;

/// Largest size whose last element `(size - 1) * 2` still fits in an `i32`.
const MAX_LEN: usize = (i32::MAX as usize) / 2 + 1;

/// Owning, read-only integer sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferOwner {
    values: Box<[i32]>,
}

impl BufferOwner {
    /// Allocates `size` elements and initializes element `i` to `i * 2`.
    ///
    /// # Errors
    /// - [`BufferError::EmptySize`] when `size == 0`
    /// - [`BufferError::TooLarge`] when the values would overflow `i32`
    /// - [`BufferError::Allocation`] when the allocator refuses the request
    pub fn create(size: usize) -> Result<Self, BufferError> {
        if size == 0 {
            return Err(BufferError::EmptySize);
        }
        if size > MAX_LEN {
            return Err(BufferError::TooLarge(size));
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|source| BufferError::Allocation { size, source })?;
        // MAX_LEN keeps every index inside i32 range
        values.extend((0..size).map(|i| i as i32 * 2));

        debug!(size, "Buffer allocated");
        Ok(Self {
            values: values.into_boxed_slice(),
        })
    }

    /// Iterates the stored values without touching them.
    ///
    /// Each call starts a fresh pass.
    pub fn enumerate(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty buffers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Emits one `Val: <v>` line per element.
    pub fn report(&self, reporter: &dyn Reporter) {
        for value in self.enumerate() {
            reporter.emit(Event::BufferValue(value));
        }
    }
}
