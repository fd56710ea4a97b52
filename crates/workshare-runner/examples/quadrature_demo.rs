//! Demonstrates the fork-join runner with a midpoint quadrature of pi

use std::sync::Mutex;
use workshare_runner::{ParallelTask, TaskRunner, WorkerContext};

const SLABS: u64 = 10_000_000;
const MERGE_EVERY: u64 = 100_000;

/// Integrates 4 / (1 + x^2) over [0, 1], one slab per task index
struct Quadrature {
    total: Mutex<f64>,
}

struct Partial {
    sum: f64,
    pending: u64,
}

impl ParallelTask for Quadrature {
    type Local = Partial;

    fn init_local(&self, _ctx: &WorkerContext<'_>) -> Partial {
        Partial {
            sum: 0.0,
            pending: 0,
        }
    }

    fn task(&self, index: u64, local: &mut Partial, _ctx: &WorkerContext<'_>) {
        let x = (index as f64 + 0.5) / SLABS as f64;
        local.sum += 4.0 / (1.0 + x * x);
        local.pending += 1;
    }

    fn should_merge_force(&self, _local: &Partial) -> bool {
        false
    }

    // fold into the shared total once enough slabs have accumulated locally
    fn should_merge(&self, local: &Partial) -> bool {
        local.pending >= MERGE_EVERY
    }

    fn merge(&self, local: &mut Partial) {
        *self.total.lock().unwrap() += local.sum;
        local.sum = 0.0;
        local.pending = 0;
    }

    fn merge_force(&self, local: &mut Partial) {
        self.merge(local);
    }

    fn finish_local(&self, mut local: Partial, _ctx: &WorkerContext<'_>) {
        self.merge(&mut local);
    }
}

fn main() {
    let threads = 4;
    let mut runner = TaskRunner::with_threads(threads).unwrap();
    runner.set_begin_index(0);
    runner.set_end_index(SLABS);

    let task = Quadrature {
        total: Mutex::new(0.0),
    };
    runner.run(&task);

    let pi = *task.total.lock().unwrap() / SLABS as f64;

    println!("=== Midpoint quadrature over {SLABS} slabs ===");
    println!("pi ~= {pi:.12}");
    println!("error: {:.3e}", (pi - std::f64::consts::PI).abs());
    println!(
        "wall: {:?}, cpu: {:?} on {} threads",
        runner.wall_time_total(),
        runner.cpu_time_total(),
        threads
    );
}
