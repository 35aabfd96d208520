use crate::{Claim, Clock, PrimeFinding, Result, ResultSink, WorkSource, WorkerId, is_prime};

/// What one worker did during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerStats {
    pub worker_id: WorkerId,
    /// Integers claimed from the work source and tested.
    pub candidates: u64,
    /// Integers that turned out prime and were recorded.
    pub primes: u64,
}

impl WorkerStats {
    const fn new(worker_id: WorkerId) -> Self {
        Self {
            worker_id,
            candidates: 0,
            primes: 0,
        }
    }
}

/// Runs one worker to completion.
///
/// The loop claims an integer from `source`, tests it, and records it in
/// `sink` if it is prime, until the source reports [`Claim::Exhausted`]. The
/// worker's batch is then flushed exactly once. There is no retry: any sink
/// error ends the worker and is returned.
///
/// This function is designed to be the body of one pool thread. No lock is
/// held while [`is_prime`] runs.
///
/// # Arguments
///
/// - `worker_id`: Identifier stamped on every finding of this worker.
/// - `source`: Work source shared by the whole pool.
/// - `sink`: Result sink shared by the whole pool.
/// - `clock`: Source of the `found_at` timestamp.
///
/// # Errors
///
/// Propagates the first error returned by `sink`.
pub fn run_worker<S, K, C>(
    worker_id: WorkerId,
    source: &S,
    sink: &K,
    clock: &C,
) -> Result<WorkerStats>
where
    S: WorkSource + ?Sized,
    K: ResultSink + ?Sized,
    C: Clock + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} started");

    let mut stats = WorkerStats::new(worker_id);
    let mut lane = source.lane(worker_id);
    let mut batch = sink.batch(worker_id);

    while let Claim::Ready { value } = source.next(&mut lane) {
        stats.candidates += 1;
        if is_prime(value) {
            stats.primes += 1;
            sink.record(&mut batch, PrimeFinding::new(value, worker_id, clock.now()))?;
        }
    }

    sink.flush(batch)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        worker = %worker_id,
        candidates = stats.candidates,
        primes = stats.primes,
        "Worker {worker_id} exhausted its work source"
    );

    Ok(stats)
}
