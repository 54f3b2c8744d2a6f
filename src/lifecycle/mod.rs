//! # Lifecycle & Orchestration
//!
//! Wiring for a demo run: build the shared state, start the workers, join them.
//!
//! ## Startup Order
//!
//! 1. **Buffer** - allocated and filled before anything else; failure aborts the run
//! 2. **Console preamble** - buffer values, module tag, sample total
//! 3. **Workers** - [`WorkerPool::start`] spawns one thread per worker
//! 4. **Join** - [`WorkerPool::shutdown`] waits for every worker and reads the counter
//!
//! ## Shared State
//!
//! | State            | Shared as                  | Synchronization |
//! |------------------|----------------------------|-----------------|
//! | `Config`         | cloned into each worker    | none needed     |
//! | `BufferOwner`    | `Arc<BufferOwner>`         | none, read-only |
//! | `SharedCounter`  | `Arc<SharedCounter>`       | one `Mutex`     |
//! | `Reporter`       | `Arc<dyn Reporter>`        | implementation  |
//!
//! No globals: a test can run as many independent demos as it likes.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the diagnostic subscriber. See the [`tracing`] module.

pub mod demo;
pub mod tracing;
pub mod worker_pool;

pub use self::demo::*;
pub use self::tracing::*;
pub use self::worker_pool::*;
