//! Wall-clock and process-CPU timing for runner invocations
//!
//! A [`TimingSample`] holds two measurement pairs: the total pair, captured
//! by the runner around each `run()`, and a secondary interval pair that
//! task hooks may mark from any worker thread to bracket a sub-interval.
//! Values persist between runs and are overwritten by the next capture.

use cpu_time::ProcessTime;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Nanoseconds since an anchor, clamped to the `u64` range
fn nanos_since(anchor: Instant) -> u64 {
    let nanos = anchor.elapsed().as_nanos();
    nanos.min(u64::MAX as u128) as u64
}

/// CPU nanoseconds since an anchor; zero if the CPU clock is unavailable
fn cpu_nanos_since(anchor: &Option<ProcessTime>) -> u64 {
    anchor
        .as_ref()
        .and_then(|t| t.try_elapsed().ok())
        .map(|d| d.as_nanos().min(u64::MAX as u128) as u64)
        .unwrap_or(0)
}

/// Timing sample for one runner invocation
///
/// The interval marks use relaxed atomics so they can be set from inside
/// the parallel region; last writer wins, which matches the shared-sample
/// semantics of the sub-interval hooks.
#[derive(Debug)]
pub struct TimingSample {
    wall_anchor: Option<Instant>,
    cpu_anchor: Option<ProcessTime>,
    wall_total: Duration,
    cpu_total: Duration,
    wall_mark1: AtomicU64,
    wall_mark2: AtomicU64,
    cpu_mark1: AtomicU64,
    cpu_mark2: AtomicU64,
}

impl TimingSample {
    pub(crate) fn new() -> Self {
        Self {
            wall_anchor: None,
            cpu_anchor: None,
            wall_total: Duration::ZERO,
            cpu_total: Duration::ZERO,
            wall_mark1: AtomicU64::new(0),
            wall_mark2: AtomicU64::new(0),
            cpu_mark1: AtomicU64::new(0),
            cpu_mark2: AtomicU64::new(0),
        }
    }

    /// Anchor both clocks at the start of a run
    pub(crate) fn mark_total_begin(&mut self) {
        self.wall_anchor = Some(Instant::now());
        self.cpu_anchor = ProcessTime::try_now().ok();
    }

    /// Capture the total pair at the end of a run
    pub(crate) fn mark_total_end(&mut self) {
        self.wall_total = self
            .wall_anchor
            .map(|a| a.elapsed())
            .unwrap_or(Duration::ZERO);
        self.cpu_total = self
            .cpu_anchor
            .as_ref()
            .and_then(|t| t.try_elapsed().ok())
            .unwrap_or(Duration::ZERO);
    }

    /// Open the secondary interval; callable from any worker thread
    pub fn mark_interval_begin(&self) {
        if let Some(anchor) = self.wall_anchor {
            self.wall_mark1.store(nanos_since(anchor), Ordering::Relaxed);
        }
        self.cpu_mark1
            .store(cpu_nanos_since(&self.cpu_anchor), Ordering::Relaxed);
    }

    /// Close the secondary interval; callable from any worker thread
    pub fn mark_interval_end(&self) {
        if let Some(anchor) = self.wall_anchor {
            self.wall_mark2.store(nanos_since(anchor), Ordering::Relaxed);
        }
        self.cpu_mark2
            .store(cpu_nanos_since(&self.cpu_anchor), Ordering::Relaxed);
    }

    /// Wall time across the whole run
    pub fn wall_total(&self) -> Duration {
        self.wall_total
    }

    /// Process CPU time across the whole run, summed over all threads
    pub fn cpu_total(&self) -> Duration {
        self.cpu_total
    }

    /// Wall time between the two interval marks; zero if never marked
    pub fn wall_interval(&self) -> Duration {
        let begin = self.wall_mark1.load(Ordering::Relaxed);
        let end = self.wall_mark2.load(Ordering::Relaxed);
        Duration::from_nanos(end.saturating_sub(begin))
    }

    /// Process CPU time between the two interval marks; zero if never marked
    pub fn cpu_interval(&self) -> Duration {
        let begin = self.cpu_mark1.load(Ordering::Relaxed);
        let end = self.cpu_mark2.load(Ordering::Relaxed);
        Duration::from_nanos(end.saturating_sub(begin))
    }
}
