//! # Observability & Tracing
//!
//! Diagnostic logging for the demo, built on the `tracing` crate.
//!
//! Stdout belongs to the console lines produced by
//! [`ConsoleReporter`](crate::report::ConsoleReporter), so the subscriber writes to stderr.
//! Nothing is logged unless `RUST_LOG` asks for it.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Demo output only
//! cargo run
//!
//! # Worker start/finish and pool lifecycle
//! RUST_LOG=info cargo run
//!
//! # Buffer allocation, sample data and per-worker buffer sums
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Pool lifecycle**: spawn, join, final count
//! - **Workers**: each runs inside a `worker` span carrying its `id`
//! - **Startup failures**: logged at `error` before the process exits non-zero
//!
//! With `RUST_LOG=info` the worker span shows inline:
//!
//! ```text
//! INFO worker{id=1}: Worker finished iterations=10 warnings=0
//! INFO worker{id=2}: Worker finished iterations=10 warnings=0
//! INFO Worker pool joined final_count=20
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
