use core::{fmt, time::Duration};

use crate::{Delivery, Distribution, SearchRange, WorkerStats};

/// Aggregate outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub range: SearchRange,
    pub distribution: Distribution,
    pub delivery: Delivery,
    /// Per-worker statistics in worker id order.
    pub workers: Vec<WorkerStats>,
    /// Wall time from the first spawn to the last line of output.
    pub elapsed: Duration,
}

impl SearchReport {
    /// Total number of primes found by all workers.
    #[must_use]
    pub fn primes_found(&self) -> u64 {
        self.workers.iter().map(|w| w.primes).sum()
    }

    /// Total number of integers tested by all workers.
    #[must_use]
    pub fn candidates_tested(&self) -> u64 {
        self.workers.iter().map(|w| w.candidates).sum()
    }

    /// Workers whose work source produced nothing for them.
    pub fn idle_workers(&self) -> impl Iterator<Item = &WorkerStats> {
        self.workers.iter().filter(|w| w.candidates == 0)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} primes in {} ({} candidates, {} workers, {} / {}) in {:.3}s",
            self.primes_found(),
            self.range,
            self.candidates_tested(),
            self.workers.len(),
            self.distribution,
            self.delivery,
            self.elapsed.as_secs_f64()
        )
    }
}
