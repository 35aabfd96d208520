use crate::{PrimeFinding, Result, WorkerId};

/// A minimal interface for receiving primes from workers.
///
/// One instance is shared by reference between every worker of a run. Each
/// worker obtains a private [`ResultSink::Batch`] up front, passes it to every
/// [`ResultSink::record`] call, and hands it back through
/// [`ResultSink::flush`] once its work source is exhausted. Implementations
/// decide whether `record` touches shared state at all.
///
/// Implementations must never lose a finding, and must not hold a shared lock
/// outside of `record` and `flush`.
pub trait ResultSink: Sync {
    /// Worker-private buffer, moved into the worker's thread.
    type Batch: Send;

    /// Creates the batch for `worker`.
    fn batch(&self, worker: WorkerId) -> Self::Batch;

    /// Accepts one finding.
    ///
    /// # Errors
    /// Fails if the output stream cannot be written or a lock is poisoned.
    fn record(&self, batch: &mut Self::Batch, finding: PrimeFinding) -> Result<()>;

    /// Publishes whatever `batch` still holds. Called exactly once per worker.
    ///
    /// # Errors
    /// Fails if a lock is poisoned.
    fn flush(&self, batch: Self::Batch) -> Result<()>;
}
