//! # Total Calculator
//!
//! Sums four integers. Addition saturates at the `i32` bounds instead of wrapping, so an
//! extreme input reports `i32::MAX` (or `i32::MIN`) rather than a value with the wrong sign.

use crate::report::{Event, Reporter};

/// Adds four integers and reports the sum when it exceeds a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalCalculator {
    threshold: i32,
}

impl Default for TotalCalculator {
    fn default() -> Self {
        Self::new(crate::config::LARGE_TOTAL_THRESHOLD)
    }
}

impl TotalCalculator {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Returns `a + b + c + d`, emitting [`Event::LargeTotal`] when it is above the
    /// threshold. The report is a side effect only; the return value is the same either way.
    pub fn total(&self, a: i32, b: i32, c: i32, d: i32, reporter: &dyn Reporter) -> i32 {
        let total = sum4(a, b, c, d);
        if total > self.threshold {
            reporter.emit(Event::LargeTotal(total));
        }
        total
    }
}

/// Saturating sum of four values.
pub fn sum4(a: i32, b: i32, c: i32, d: i32) -> i32 {
    a.saturating_add(b).saturating_add(c).saturating_add(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;

    #[test]
    fn test_small_total_is_not_reported() {
        let reporter = RecordingReporter::new();
        let total = TotalCalculator::default().total(1, 2, 3, 4, &reporter);
        assert_eq!(total, 10);
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_large_total_is_reported() {
        let reporter = RecordingReporter::new();
        let total = TotalCalculator::default().total(30, 30, 30, 30, &reporter);
        assert_eq!(total, 120);
        assert_eq!(reporter.events(), vec![Event::LargeTotal(120)]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let reporter = RecordingReporter::new();
        let total = TotalCalculator::default().total(25, 25, 25, 25, &reporter);
        assert_eq!(total, 100);
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(sum4(i32::MAX, 1, 1, 1), i32::MAX);
        assert_eq!(sum4(i32::MIN, -1, 0, 0), i32::MIN);
        assert_eq!(sum4(i32::MAX, 1, -10, 0), i32::MAX - 10);
    }

    #[test]
    fn test_custom_threshold() {
        let reporter = RecordingReporter::new();
        let calculator = TotalCalculator::new(5);
        assert_eq!(calculator.total(1, 2, 3, 4, &reporter), 10);
        assert_eq!(reporter.events(), vec![Event::LargeTotal(10)]);
    }
}
