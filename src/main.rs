//! # Shared Counter Demo
//!
//! Entry point. Builds the default [`Config`] and [`Limits`], runs the demo with a
//! console reporter, and maps failures to a non-zero exit code.
//!
//! No arguments or environment variables are read, apart from `RUST_LOG` for
//! diagnostics.

use shared_counter_demo::config::{Config, Limits};
use shared_counter_demo::lifecycle::{run_demo, setup_tracing};
use shared_counter_demo::report::ConsoleReporter;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = Config::default();
    let limits = Limits::default();
    info!(?config, ?limits, "Starting demo");

    match run_demo(config, limits, Arc::new(ConsoleReporter)).await {
        Ok(report) => {
            if report.final_count != limits.expected_final_count() {
                error!(
                    final_count = report.final_count,
                    expected = limits.expected_final_count(),
                    "Counter does not match the number of iterations"
                );
                return ExitCode::FAILURE;
            }
            info!("Demo completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Demo failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
