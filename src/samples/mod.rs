//! Small sample data the demo logs at startup.

pub mod color;

pub use color::*;

use std::collections::BTreeMap;

/// Tag value reported alongside the buffer contents.
pub const MODULE_TAG: i32 = 5;

/// Step between consecutive entries of [`multiples_of_three`].
pub const MULTIPLE_STEP: i32 = 3;

/// Number of entries in the default multiples sample.
pub const MULTIPLES_LEN: usize = 20;

/// `x * x`, widened so no `i32` input can overflow.
pub fn square(x: i32) -> i64 {
    let x = i64::from(x);
    x * x
}

/// `[0, 3, 6, ...]` with `count` entries. Entries that would overflow are dropped.
pub fn multiples_of_three(count: usize) -> Vec<i32> {
    let mut values = Vec::with_capacity(count);
    values.extend(
        (0..count)
            .map_while(|i| i32::try_from(i).ok()?.checked_mul(MULTIPLE_STEP)),
    );
    values
}

/// Name to score lookup, ordered by name.
pub fn score_table() -> BTreeMap<String, u32> {
    BTreeMap::from([("alice".to_string(), 90), ("bob".to_string(), 75)])
}
