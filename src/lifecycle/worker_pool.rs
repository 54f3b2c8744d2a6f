use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::buffer::BufferOwner;
use crate::config::{Config, Limits};
use crate::counter::{CounterError, SharedCounter};
use crate::error::DemoError;
use crate::report::Reporter;
use crate::worker::{Worker, WorkerSummary};

/// Runs a fixed set of workers against one shared counter.
///
/// `WorkerPool` is responsible for:
/// - **Spawning**: one blocking thread per worker, after all shared state exists
/// - **Ownership**: each worker gets its own `Config` clone and an `Arc` to the
///   read-only buffer, the counter and the reporter
/// - **Joining**: [`shutdown`](WorkerPool::shutdown) waits for every worker
///
/// # Example
///
/// ```ignore
/// let pool = WorkerPool::start(&config, buffer, counter, limits, reporter);
/// let report = pool.shutdown().await?;
/// assert_eq!(report.final_count, 20);
/// ```
pub struct WorkerPool {
    counter: Arc<SharedCounter>,

    /// Worker id paired with its thread handle
    handles: Vec<(usize, JoinHandle<Result<WorkerSummary, CounterError>>)>,
}

/// Outcome of a joined pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolReport {
    pub final_count: u64,
    /// Summaries ordered by worker id.
    pub workers: Vec<WorkerSummary>,
}

impl WorkerPool {
    /// Spawns `limits.worker_count` workers, numbered from 1.
    ///
    /// Workers run on Tokio's blocking pool since they hold a `std::sync::Mutex` and
    /// never yield. Must be called from within a Tokio runtime.
    pub fn start(
        config: &Config,
        buffer: Arc<BufferOwner>,
        counter: Arc<SharedCounter>,
        limits: Limits,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let handles = (1..=limits.worker_count)
            .map(|id| {
                let worker = Worker::new(id, config.clone());
                let buffer = buffer.clone();
                let counter = counter.clone();
                let reporter = reporter.clone();
                let handle = tokio::task::spawn_blocking(move || {
                    worker.run(&buffer, &counter, &limits, reporter.as_ref())
                });
                (id, handle)
            })
            .collect::<Vec<_>>();

        info!(workers = handles.len(), "Worker pool started");
        Self { counter, handles }
    }

    pub fn counter(&self) -> &Arc<SharedCounter> {
        &self.counter
    }

    /// Waits for every worker and reads the final counter value.
    ///
    /// All workers are joined even when one fails; the first failure is returned.
    ///
    /// # Returns
    ///
    /// - `Ok(PoolReport)` if every worker finished its iterations
    /// - `Err(DemoError::WorkerPanicked)` if a worker thread panicked
    /// - `Err(DemoError::Counter)` if a worker hit a counter error
    pub async fn shutdown(self) -> Result<PoolReport, DemoError> {
        let mut workers = Vec::with_capacity(self.handles.len());
        let mut first_error = None;

        for (id, handle) in self.handles {
            let outcome = match handle.await {
                Ok(Ok(summary)) => Ok(summary),
                Ok(Err(e)) => Err(DemoError::from(e)),
                Err(source) => Err(DemoError::WorkerPanicked { id, source }),
            };
            match outcome {
                Ok(summary) => workers.push(summary),
                Err(e) => {
                    error!(worker = id, error = %e, "Worker failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let final_count = self.counter.get()?;
        info!(final_count, "Worker pool joined");
        Ok(PoolReport {
            final_count,
            workers,
        })
    }
}
