//! # Shared Counter Demo
//!
//! > **A small recipe for owned buffers and lock-serialized counters in Rust.**
//!
//! Two worker threads loop a fixed number of times, each iteration incrementing one
//! shared counter under a mutex and printing a status line, while both read an owned
//! integer buffer that nobody writes to after construction.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Ownership instead of bookkeeping
//! - The buffer is a boxed slice owned by [`BufferOwner`](buffer::BufferOwner). It is
//!   freed once, on drop, and is never resized.
//! - The counter is an explicit [`SharedCounter`](counter::SharedCounter) handed to each
//!   worker through an `Arc`. There are no globals, so tests run side by side.
//! - Constants are typed (`u16` port, `u64` counter threshold) and live in [`config`].
//!
//! ### Scoped locking
//! [`SharedCounter::increment_with`](counter::SharedCounter::increment_with) runs the
//! caller's closure while the guard is held and drops the guard on every exit path,
//! including panics and early returns.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each fallible module defines its own `thiserror` enum ([`BufferError`](buffer::BufferError),
//! [`CounterError`](counter::CounterError)). [`DemoError`](error::DemoError) wraps them via
//! `#[from]` so orchestration code can use `?`.
//!
//! ### 2. Overflow Policy
//! - The total calculator saturates at the `i32` bounds.
//! - The counter uses checked addition and reports [`CounterError::Overflow`](counter::CounterError::Overflow).
//!
//! ### 3. Concurrency Model
//! Workers are plain blocking code on Tokio's blocking pool. One mutex orders all
//! increments, so two workers of ten iterations always end at exactly 20.
//!
//! ### 4. Observability
//! Console lines go through the [`report::Reporter`] trait to stdout. Diagnostics use
//! `tracing` on stderr; see [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`config`] - `Config`, `Limits` and every named constant
//! - [`buffer`] - the owning, read-only integer sequence
//! - [`counter`] - the mutex-guarded counter
//! - [`worker`] - the per-thread state machine
//! - [`total`] - the four-value total calculator
//! - [`report`] - console events and reporters
//! - [`samples`] - small sample data and [`ColorMode`](samples::ColorMode)
//! - [`lifecycle`] - the worker pool and the full demo run
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Demo output only
//! cargo run
//!
//! # With lifecycle logs on stderr
//! RUST_LOG=info cargo run
//! ```

pub mod buffer;
pub mod config;
pub mod counter;
pub mod error;
pub mod lifecycle;
pub mod report;
pub mod samples;
pub mod total;
pub mod worker;
