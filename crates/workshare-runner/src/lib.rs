//! Fork-join task runner with dynamic scheduling and wall/CPU timing
//!
//! A [`TaskRunner`] owns a half-open task-index range, a fixed-size thread
//! team, and a [`TimingSample`]. Calling [`TaskRunner::run`] drives any
//! [`ParallelTask`] implementation through a fixed sequence:
//!
//! 1. capture begin timestamps, run the optional `initialize` hook;
//! 2. form the thread team; every worker runs `init_local`, claims task
//!    indices one at a time from a shared atomic counter, runs `task` per
//!    index followed by the conditional merge hooks, then `finish_local`;
//! 3. join the team, run the optional `finish` hook, capture end
//!    timestamps.
//!
//! # Design Philosophy
//!
//! - **Capability trait, not inheritance**: the runner is generic over any
//!   type implementing [`ParallelTask`]
//! - **Explicit merge policy**: shared accumulation happens only in the
//!   merge hooks, under synchronization the implementation chooses
//! - **Explicit configuration**: the team size is a constructor argument
//!   with a documented default, not an ambient global
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use workshare_runner::{ParallelTask, TaskRunner, WorkerContext};
//!
//! struct CountTask {
//!     hits: AtomicU64,
//! }
//!
//! impl ParallelTask for CountTask {
//!     type Local = u64;
//!
//!     fn init_local(&self, _ctx: &WorkerContext<'_>) -> u64 {
//!         0
//!     }
//!
//!     fn task(&self, _index: u64, local: &mut u64, _ctx: &WorkerContext<'_>) {
//!         *local += 1;
//!     }
//!
//!     fn merge(&self, _local: &mut u64) {}
//!
//!     fn merge_force(&self, local: &mut u64) {
//!         // fold the local tally into the shared counter after every task
//!         self.hits.fetch_add(*local, Ordering::Relaxed);
//!         *local = 0;
//!     }
//!
//!     fn finish_local(&self, local: u64, _ctx: &WorkerContext<'_>) {
//!         self.hits.fetch_add(local, Ordering::Relaxed);
//!     }
//! }
//!
//! let mut runner = TaskRunner::with_threads(2).unwrap();
//! runner.set_begin_index(0);
//! runner.set_end_index(100);
//!
//! let task = CountTask { hits: AtomicU64::new(0) };
//! runner.run(&task);
//! assert_eq!(task.hits.load(Ordering::Relaxed), 100);
//! ```

pub mod runner;
pub mod task;
pub mod timing;

pub use runner::TaskRunner;
pub use task::{ParallelTask, WorkerContext};
pub use timing::TimingSample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
