//! # Worker Routine
//!
//! A [`Worker`] owns its own [`Config`] snapshot and walks a small state machine:
//!
//! ```text
//! Idle -> Running { next: 0 } -> ... -> Running { next: N - 1 } -> Done
//! ```
//!
//! Each [`Worker::step`] performs exactly one iteration:
//! 1. Lock the [`SharedCounter`] and increment it.
//! 2. While still holding the lock, emit an [`Event::Iteration`] built from the snapshot.
//! 3. Release the lock.
//! 4. If the value seen in step 1 is above the high-load threshold, emit
//!    [`Event::HighLoad`].
//!
//! The warning is emitted outside the lock to keep the critical section short.

use crate::buffer::BufferOwner;
use crate::config::{Config, Limits};
use crate::counter::{CounterError, SharedCounter};
use crate::report::{Event, Reporter};
use tracing::{debug, info, info_span};

/// Where a worker is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Idle,
    /// `next` is the index of the iteration the following step will perform.
    Running { next: usize },
    Done,
}

/// What a finished worker observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSummary {
    pub id: usize,
    pub iterations: usize,
    pub high_load_warnings: usize,
    /// Sum of the shared buffer, read without a lock.
    pub buffer_sum: i64,
}

/// One unit of concurrent work.
#[derive(Debug, Clone)]
pub struct Worker {
    id: usize,
    config: Config,
    state: WorkerState,
    completed: usize,
    high_load_warnings: usize,
}

impl Worker {
    /// Creates an idle worker holding its own copy of `config`.
    pub fn new(id: usize, config: Config) -> Self {
        Self {
            id,
            config,
            state: WorkerState::Idle,
            completed: 0,
            high_load_warnings: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to this worker's snapshot. Other workers are unaffected.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Performs one iteration and returns the new state.
    ///
    /// Calling `step` on a `Done` worker does nothing.
    pub fn step(
        &mut self,
        counter: &SharedCounter,
        limits: &Limits,
        reporter: &dyn Reporter,
    ) -> Result<WorkerState, CounterError> {
        let iteration = match self.state {
            WorkerState::Idle => 0,
            WorkerState::Running { next } => next,
            WorkerState::Done => return Ok(WorkerState::Done),
        };

        if iteration >= limits.iterations {
            self.state = WorkerState::Done;
            return Ok(self.state);
        }

        let (count, ()) = counter.increment_with(|_| {
            reporter.emit(Event::Iteration {
                worker: self.id,
                iteration,
                host: self.config.host_name.clone(),
                port: self.config.port,
                use_ssl: self.config.use_ssl,
            });
        })?;

        if count > limits.high_load_threshold {
            self.high_load_warnings += 1;
            reporter.emit(Event::HighLoad {
                worker: self.id,
                count,
            });
        }

        self.completed += 1;
        let next = iteration + 1;
        self.state = if next < limits.iterations {
            WorkerState::Running { next }
        } else {
            WorkerState::Done
        };
        Ok(self.state)
    }

    /// Runs every remaining iteration and reports what happened.
    pub fn run(
        mut self,
        buffer: &BufferOwner,
        counter: &SharedCounter,
        limits: &Limits,
        reporter: &dyn Reporter,
    ) -> Result<WorkerSummary, CounterError> {
        let span = info_span!("worker", id = self.id);
        let _entered = span.enter();

        let buffer_sum: i64 = buffer.enumerate().map(i64::from).sum();
        debug!(buffer_len = buffer.len(), buffer_sum, "Worker started");

        while self.step(counter, limits, reporter)? != WorkerState::Done {}

        info!(
            iterations = self.completed,
            warnings = self.high_load_warnings,
            "Worker finished"
        );
        Ok(WorkerSummary {
            id: self.id,
            iterations: self.completed,
            high_load_warnings: self.high_load_warnings,
            buffer_sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;

    fn limits(iterations: usize, high_load_threshold: u64) -> Limits {
        Limits {
            iterations,
            high_load_threshold,
            ..Limits::default()
        }
    }

    #[test]
    fn test_state_machine_walks_every_iteration() {
        let counter = SharedCounter::new();
        let reporter = RecordingReporter::new();
        let limits = limits(3, 50);
        let mut worker = Worker::new(1, Config::default());

        assert_eq!(worker.state(), WorkerState::Idle);
        assert_eq!(
            worker.step(&counter, &limits, &reporter),
            Ok(WorkerState::Running { next: 1 })
        );
        assert_eq!(
            worker.step(&counter, &limits, &reporter),
            Ok(WorkerState::Running { next: 2 })
        );
        assert_eq!(
            worker.step(&counter, &limits, &reporter),
            Ok(WorkerState::Done)
        );
        // no-op once done
        assert_eq!(
            worker.step(&counter, &limits, &reporter),
            Ok(WorkerState::Done)
        );
        assert_eq!(counter.get(), Ok(3));
    }

    #[test]
    fn test_zero_iterations_goes_straight_to_done() {
        let counter = SharedCounter::new();
        let reporter = RecordingReporter::new();
        let mut worker = Worker::new(1, Config::default());

        assert_eq!(
            worker.step(&counter, &limits(0, 50), &reporter),
            Ok(WorkerState::Done)
        );
        assert_eq!(counter.get(), Ok(0));
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_iteration_line_uses_snapshot() {
        let counter = SharedCounter::new();
        let reporter = RecordingReporter::new();
        let mut worker = Worker::new(7, Config::default());
        worker.config_mut().host_name = "example.org".into();

        worker.step(&counter, &limits(1, 50), &reporter).unwrap();

        assert_eq!(
            reporter.events(),
            vec![Event::Iteration {
                worker: 7,
                iteration: 0,
                host: "example.org".into(),
                port: 8080,
                use_ssl: true,
            }]
        );
    }

    #[test]
    fn test_high_load_warning_follows_iteration_line() {
        let counter = SharedCounter::starting_at(50);
        let reporter = RecordingReporter::new();
        let buffer = BufferOwner::create(4).unwrap();

        let summary = Worker::new(2, Config::default())
            .run(&buffer, &counter, &limits(2, 50), &reporter)
            .unwrap();

        assert_eq!(summary.high_load_warnings, 2);
        assert_eq!(summary.buffer_sum, 12);
        let events = reporter.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], Event::Iteration { iteration: 0, .. }));
        assert_eq!(events[1], Event::HighLoad { worker: 2, count: 51 });
        assert!(matches!(events[2], Event::Iteration { iteration: 1, .. }));
        assert_eq!(events[3], Event::HighLoad { worker: 2, count: 52 });
    }

    #[test]
    fn test_no_warning_at_threshold() {
        let counter = SharedCounter::starting_at(49);
        let reporter = RecordingReporter::new();
        let mut worker = Worker::new(1, Config::default());

        worker.step(&counter, &limits(1, 50), &reporter).unwrap();

        assert_eq!(counter.get(), Ok(50));
        assert_eq!(
            reporter.count_where(|e| matches!(e, Event::HighLoad { .. })),
            0
        );
    }

    #[test]
    fn test_overflow_stops_the_worker() {
        let counter = SharedCounter::starting_at(u64::MAX);
        let reporter = RecordingReporter::new();
        let buffer = BufferOwner::create(1).unwrap();

        let result = Worker::new(1, Config::default()).run(
            &buffer,
            &counter,
            &limits(3, 50),
            &reporter,
        );

        assert_eq!(result, Err(CounterError::Overflow(u64::MAX)));
        assert!(reporter.events().is_empty());
    }
}
