use std::sync::Arc;
use tracing::debug;

use super::worker_pool::{PoolReport, WorkerPool};
use crate::buffer::BufferOwner;
use crate::config::{Config, Limits};
use crate::counter::SharedCounter;
use crate::error::DemoError;
use crate::report::{Event, Reporter};
use crate::samples::{self, ColorMode, MODULE_TAG, MULTIPLES_LEN};
use crate::total::TotalCalculator;

/// Addends of the sample total printed before the workers start.
pub const SAMPLE_ADDENDS: [i32; 4] = [1, 2, 3, 4];

/// Runs the whole demo and returns the joined pool report.
///
/// Order of events:
/// 1. Banner, buffer contents and module tag
/// 2. Sample total
/// 3. Worker iterations and warnings (interleaved across workers)
/// 4. Final count
///
/// A buffer that cannot be created ends the run before any worker is spawned.
pub async fn run_demo(
    config: Config,
    limits: Limits,
    reporter: Arc<dyn Reporter>,
) -> Result<PoolReport, DemoError> {
    reporter.emit(Event::Started);

    let buffer = Arc::new(BufferOwner::create(limits.buffer_len)?);
    buffer.report(reporter.as_ref());
    reporter.emit(Event::ModuleTag(MODULE_TAG));

    let multiples = samples::multiples_of_three(MULTIPLES_LEN);
    debug!(
        multiples = ?multiples,
        scores = ?samples::score_table(),
        color = %ColorMode::Green,
        "Sample data"
    );

    let [a, b, c, d] = SAMPLE_ADDENDS;
    let calculator = TotalCalculator::new(limits.large_total_threshold);
    let total = calculator.total(a, b, c, d, reporter.as_ref());
    reporter.emit(Event::Total(total));

    let counter = Arc::new(SharedCounter::new());
    let pool = WorkerPool::start(&config, buffer, counter, limits, reporter.clone());
    let report = pool.shutdown().await?;

    reporter.emit(Event::FinalCount(report.final_count));
    Ok(report)
}
