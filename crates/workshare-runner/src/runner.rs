//! The fork-join task runner
//!
//! Drives a [`ParallelTask`] through a fixed sequence: capture begin
//! timestamps and run `initialize`, form the thread team, let every worker
//! set up, claim indices dynamically, merge, and tear down, then join the
//! team, run `finish`, and capture end timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use workshare_core::{Error, Result};

use crate::task::{ParallelTask, WorkerContext};
use crate::timing::TimingSample;

/// Fork-join runner over a half-open task-index range
///
/// The range defaults to empty; `begin > end` stays a no-op range rather
/// than an error. The thread count is fixed at construction.
pub struct TaskRunner {
    begin_index: u64,
    end_index: u64,
    num_threads: usize,
    pool: rayon::ThreadPool,
    timing: TimingSample,
}

impl TaskRunner {
    /// Create a runner sized to the machine's logical CPU count
    pub fn new() -> Result<Self> {
        Self::with_threads(num_cpus::get())
    }

    /// Create a runner with an explicit team size
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(Error::InvalidParameter(
                "thread count must be at least 1".to_string(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("workshare-worker-{i}"))
            .build()
            .map_err(|e| Error::Execution(format!("failed to create thread pool: {e}")))?;
        debug!("task runner ready with {num_threads} threads");

        Ok(Self {
            begin_index: 0,
            end_index: 0,
            num_threads,
            pool,
            timing: TimingSample::new(),
        })
    }

    /// Set the first task index of the half-open range
    pub fn set_begin_index(&mut self, index: u64) {
        self.begin_index = index;
    }

    /// Set the one-past-last task index of the half-open range
    pub fn set_end_index(&mut self, index: u64) {
        self.end_index = index;
    }

    /// First task index of the range
    pub fn begin_index(&self) -> u64 {
        self.begin_index
    }

    /// One-past-last task index of the range
    pub fn end_index(&self) -> u64 {
        self.end_index
    }

    /// Size of the thread team formed by each `run()`
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Execute the fixed run sequence over the configured range
    ///
    /// Every worker runs `init_local` and `finish_local` even when the
    /// range is empty. Task indices are claimed dynamically one at a time,
    /// so uneven per-task cost balances across the team; which worker
    /// executes which index is unspecified. Re-running is permitted and
    /// overwrites the timing sample.
    pub fn run<T: ParallelTask>(&mut self, task: &T) {
        self.timing.mark_total_begin();
        task.initialize();

        // clamp so an inverted range cannot wrap the claim counter
        let next = AtomicU64::new(self.begin_index.min(self.end_index));
        let end = self.end_index;
        let timing = &self.timing;

        self.pool.broadcast(|worker| {
            let ctx = WorkerContext::new(worker.index(), worker.num_threads(), timing);
            let mut local = task.init_local(&ctx);
            loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                if index >= end {
                    break;
                }
                task.task(index, &mut local, &ctx);
                if task.should_merge_force(&local) {
                    task.merge_force(&mut local);
                } else if task.should_merge(&local) {
                    task.merge(&mut local);
                }
            }
            task.finish_local(local, &ctx);
        });

        task.finish();
        self.timing.mark_total_end();
        debug!(
            "run over [{}, {}) took {:?} wall / {:?} cpu on {} threads",
            self.begin_index,
            self.end_index,
            self.timing.wall_total(),
            self.timing.cpu_total(),
            self.num_threads
        );
    }

    /// Timing sample of the most recent run
    pub fn timing(&self) -> &TimingSample {
        &self.timing
    }

    /// Wall time across the most recent run
    pub fn wall_time_total(&self) -> std::time::Duration {
        self.timing.wall_total()
    }

    /// Process CPU time across the most recent run
    pub fn cpu_time_total(&self) -> std::time::Duration {
        self.timing.cpu_total()
    }

    /// Wall time between the secondary interval marks
    pub fn wall_time_interval(&self) -> std::time::Duration {
        self.timing.wall_interval()
    }

    /// Process CPU time between the secondary interval marks
    pub fn cpu_time_interval(&self) -> std::time::Duration {
        self.timing.cpu_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    /// Counts every hook invocation; merges per-task sums into a shared
    /// total under a mutex
    struct SumTask {
        total: Mutex<u64>,
        local_inits: AtomicUsize,
        local_finishes: AtomicUsize,
    }

    impl SumTask {
        fn new() -> Self {
            Self {
                total: Mutex::new(0),
                local_inits: AtomicUsize::new(0),
                local_finishes: AtomicUsize::new(0),
            }
        }
    }

    impl ParallelTask for SumTask {
        type Local = u64;

        fn init_local(&self, _ctx: &WorkerContext<'_>) -> u64 {
            self.local_inits.fetch_add(1, Ordering::SeqCst);
            0
        }

        fn task(&self, index: u64, local: &mut u64, _ctx: &WorkerContext<'_>) {
            *local += index;
        }

        fn should_merge_force(&self, _local: &u64) -> bool {
            false
        }

        fn should_merge(&self, _local: &u64) -> bool {
            false
        }

        fn merge(&self, _local: &mut u64) {}

        fn merge_force(&self, _local: &mut u64) {}

        fn finish_local(&self, local: u64, _ctx: &WorkerContext<'_>) {
            self.local_finishes.fetch_add(1, Ordering::SeqCst);
            *self.total.lock().unwrap() += local;
        }
    }

    #[test]
    fn test_run_sums_range() {
        let mut runner = TaskRunner::with_threads(4).unwrap();
        runner.set_begin_index(0);
        runner.set_end_index(1000);

        let task = SumTask::new();
        runner.run(&task);

        assert_eq!(*task.total.lock().unwrap(), 499_500);
        assert_eq!(task.local_inits.load(Ordering::SeqCst), 4);
        assert_eq!(task.local_finishes.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_empty_range_still_runs_thread_hooks() {
        let mut runner = TaskRunner::with_threads(3).unwrap();
        runner.set_begin_index(10);
        runner.set_end_index(10);

        let task = SumTask::new();
        runner.run(&task);

        assert_eq!(*task.total.lock().unwrap(), 0);
        assert_eq!(task.local_inits.load(Ordering::SeqCst), 3);
        assert_eq!(task.local_finishes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_inverted_range_is_noop() {
        let mut runner = TaskRunner::with_threads(2).unwrap();
        runner.set_begin_index(20);
        runner.set_end_index(10);

        let task = SumTask::new();
        runner.run(&task);
        assert_eq!(*task.total.lock().unwrap(), 0);
    }

    #[test]
    fn test_rerun_accumulates_fresh_state() {
        let mut runner = TaskRunner::with_threads(2).unwrap();
        runner.set_begin_index(1);
        runner.set_end_index(4);

        let task = SumTask::new();
        runner.run(&task);
        runner.run(&task);

        // 1+2+3 summed twice; hooks ran once per thread per run
        assert_eq!(*task.total.lock().unwrap(), 12);
        assert_eq!(task.local_inits.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(TaskRunner::with_threads(0).is_err());
    }

    #[test]
    fn test_default_thread_count_is_positive() {
        let runner = TaskRunner::new().unwrap();
        assert!(runner.num_threads() >= 1);
    }
}
