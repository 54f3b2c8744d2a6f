//! # Console Reporting
//!
//! Everything the demo prints goes through the [`Reporter`] trait as a typed [`Event`].
//! The `Display` impl of `Event` is the console text, so the wording lives in one place.
//!
//! Two reporters ship with the crate:
//! - [`ConsoleReporter`] writes each event as one line on stdout.
//! - [`RecordingReporter`] keeps events in memory so tests can assert on them.
//!
//! `RecordingReporter` is public rather than `#[cfg(test)]` so integration tests under
//! `tests/` can use it too.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// One line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Program banner.
    Started,
    /// A single buffer element.
    BufferValue(i32),
    /// The module tag constant.
    ModuleTag(i32),
    /// Result of the total calculator.
    Total(i32),
    /// Emitted when a total exceeds its threshold.
    LargeTotal(i32),
    /// One worker iteration, emitted while the counter lock is held.
    Iteration {
        worker: usize,
        iteration: usize,
        host: String,
        port: u16,
        use_ssl: bool,
    },
    /// Emitted after the lock is released when the counter passed its threshold.
    HighLoad { worker: usize, count: u64 },
    /// Counter value after every worker joined.
    FinalCount(u64),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Started => write!(f, "Starting shared-counter demo..."),
            Event::BufferValue(value) => write!(f, "Val: {}", value),
            Event::ModuleTag(tag) => write!(f, "Module tag: {}", tag),
            Event::Total(total) => write!(f, "Total: {}", total),
            Event::LargeTotal(total) => write!(f, "Large total: {}", total),
            Event::Iteration {
                worker,
                iteration,
                host,
                port,
                use_ssl,
            } => write!(
                f,
                "Worker {} iteration {} host={} port={} use_ssl={}",
                worker, iteration, host, port, use_ssl
            ),
            Event::HighLoad { worker, count } => {
                write!(f, "High load warning! worker={} count={}", worker, count)
            }
            Event::FinalCount(count) => write!(f, "Final count = {}", count),
        }
    }
}

/// Sink for console events.
///
/// Implementations must be shareable across worker threads.
pub trait Reporter: Send + Sync {
    fn emit(&self, event: Event);
}

/// Prints every event on its own stdout line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, event: Event) {
        println!("{}", event);
    }
}

/// Collects events in emission order.
///
/// # Example
/// ```
/// use shared_counter_demo::report::{Event, RecordingReporter, Reporter};
///
/// let reporter = RecordingReporter::new();
/// reporter.emit(Event::Total(10));
/// assert_eq!(reporter.events(), vec![Event::Total(10)]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|&event| predicate(event))
            .count()
    }
}

impl Reporter for RecordingReporter {
    fn emit(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_line_format() {
        let event = Event::Iteration {
            worker: 1,
            iteration: 3,
            host: "localhost".into(),
            port: 8080,
            use_ssl: true,
        };
        assert_eq!(
            event.to_string(),
            "Worker 1 iteration 3 host=localhost port=8080 use_ssl=true"
        );
    }

    #[test]
    fn test_simple_line_formats() {
        assert_eq!(Event::BufferValue(4).to_string(), "Val: 4");
        assert_eq!(Event::LargeTotal(120).to_string(), "Large total: 120");
        assert_eq!(Event::FinalCount(20).to_string(), "Final count = 20");
    }

    #[test]
    fn test_recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        reporter.emit(Event::Started);
        reporter.emit(Event::Total(10));
        reporter.emit(Event::FinalCount(20));

        assert_eq!(
            reporter.events(),
            vec![Event::Started, Event::Total(10), Event::FinalCount(20)]
        );
        assert_eq!(
            reporter.count_where(|e| matches!(e, Event::Total(_))),
            1
        );
    }
}
