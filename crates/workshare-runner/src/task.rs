//! The parallel-task capability trait
//!
//! A task describes one parallel computation over an index range: how each
//! worker thread sets up, what one task index does, when and how per-thread
//! partial results fold into shared state, and how each worker tears down.
//! The [`TaskRunner`](crate::TaskRunner) drives implementations of this
//! trait through its fixed run sequence.

use crate::timing::TimingSample;

/// Per-worker context handed to the thread-scoped hooks
///
/// Carries the worker's position in the team and access to the runner's
/// secondary timing interval.
pub struct WorkerContext<'a> {
    worker: usize,
    num_workers: usize,
    timing: &'a TimingSample,
}

impl<'a> WorkerContext<'a> {
    pub(crate) fn new(worker: usize, num_workers: usize, timing: &'a TimingSample) -> Self {
        Self {
            worker,
            num_workers,
            timing,
        }
    }

    /// Index of this worker within the team, in `0..num_workers`
    pub fn worker(&self) -> usize {
        self.worker
    }

    /// Number of workers in the team
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Open the runner's secondary timing interval
    ///
    /// The interval is shared across the team; last writer wins.
    pub fn mark_interval_begin(&self) {
        self.timing.mark_interval_begin();
    }

    /// Close the runner's secondary timing interval
    pub fn mark_interval_end(&self) {
        self.timing.mark_interval_end();
    }
}

/// Capability set for a parallel computation over an index range
///
/// Required operations: [`init_local`](Self::init_local),
/// [`task`](Self::task), [`merge`](Self::merge),
/// [`merge_force`](Self::merge_force), [`finish_local`](Self::finish_local).
/// The remaining operations have defaults.
///
/// # Shared state and merging
///
/// Every worker sees the same task instance through `&self`; per-thread
/// state lives in the associated [`Local`](Self::Local) value each worker
/// owns. The runner provides no locking around the merge hooks: an
/// implementation whose merges write overlapping shared accumulators must
/// serialize them itself (a mutex-guarded fold, atomic accumulation, or
/// per-thread partials reduced in `finish_local`).
///
/// # Panics
///
/// Hooks are expected not to panic. A panicking hook unwinds through the
/// thread team and aborts the run; no partial-completion state is reported.
pub trait ParallelTask: Sync {
    /// Per-thread state, created by `init_local` and consumed by
    /// `finish_local`
    type Local: Send;

    /// Runs once before the thread team starts; pairs with `finish`
    fn initialize(&self) {}

    /// Runs once after the thread team has joined
    fn finish(&self) {}

    /// Per-thread setup; runs once on every worker before it claims tasks
    fn init_local(&self, ctx: &WorkerContext<'_>) -> Self::Local;

    /// The unit of work for one task index
    fn task(&self, index: u64, local: &mut Self::Local, ctx: &WorkerContext<'_>);

    /// Whether to merge after the current task when no forced merge applies
    fn should_merge(&self, _local: &Self::Local) -> bool {
        true
    }

    /// Whether to force a merge after every task; checked first
    fn should_merge_force(&self, _local: &Self::Local) -> bool {
        true
    }

    /// Fold per-thread state into shared state
    fn merge(&self, local: &mut Self::Local);

    /// Fold per-thread state into shared state on the forced path
    fn merge_force(&self, local: &mut Self::Local);

    /// Per-thread teardown; consumes the worker's state after its share of
    /// the index range is done
    fn finish_local(&self, local: Self::Local, ctx: &WorkerContext<'_>);
}
