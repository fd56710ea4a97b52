//! Partition completeness and exclusivity
//!
//! For any range and team size, every index in `[begin, end)` must be
//! executed exactly once; inverted ranges execute nothing.

use proptest::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use workshare_runner::{ParallelTask, TaskRunner, WorkerContext};

/// Records how many times each index in the range was executed
struct TallyTask {
    begin: u64,
    counts: Vec<AtomicU32>,
}

impl TallyTask {
    fn new(begin: u64, len: usize) -> Self {
        Self {
            begin,
            counts: (0..len).map(|_| AtomicU32::new(0)).collect(),
        }
    }
}

impl ParallelTask for TallyTask {
    type Local = ();

    fn init_local(&self, _ctx: &WorkerContext<'_>) {}

    fn task(&self, index: u64, _local: &mut (), _ctx: &WorkerContext<'_>) {
        let slot = (index - self.begin) as usize;
        self.counts[slot].fetch_add(1, Ordering::SeqCst);
    }

    fn should_merge_force(&self, _local: &()) -> bool {
        false
    }

    fn should_merge(&self, _local: &()) -> bool {
        false
    }

    fn merge(&self, _local: &mut ()) {}

    fn merge_force(&self, _local: &mut ()) {}

    fn finish_local(&self, _local: (), _ctx: &WorkerContext<'_>) {}
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_index_executed_exactly_once(
        begin in 0u64..10_000,
        len in 0usize..400,
        threads in 1usize..9,
    ) {
        let mut runner = TaskRunner::with_threads(threads).unwrap();
        runner.set_begin_index(begin);
        runner.set_end_index(begin + len as u64);

        let task = TallyTask::new(begin, len);
        runner.run(&task);

        for (offset, count) in task.counts.iter().enumerate() {
            prop_assert_eq!(
                count.load(Ordering::SeqCst),
                1,
                "index {} executed wrong number of times",
                begin + offset as u64
            );
        }
    }
}

#[test]
fn inverted_range_executes_nothing() {
    let mut runner = TaskRunner::with_threads(4).unwrap();
    runner.set_begin_index(100);
    runner.set_end_index(50);

    let task = TallyTask::new(0, 0);
    runner.run(&task);
    // reaching here without touching counts is the assertion; an executed
    // task would have panicked on the empty counts vec
}

#[test]
fn beyond_u32_indices_are_supported() {
    let begin = (1u64 << 33) + 5;
    let len = 64usize;

    let mut runner = TaskRunner::with_threads(3).unwrap();
    runner.set_begin_index(begin);
    runner.set_end_index(begin + len as u64);

    let task = TallyTask::new(begin, len);
    runner.run(&task);

    for count in &task.counts {
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
