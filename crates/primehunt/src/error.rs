use std::io;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `primehunt` can emit.
///
/// Configuration *file* problems (missing file, malformed lines) are
/// recovered by the loader and never surface here. What does surface is
/// either a configuration that cannot be run at all, or a resource failure
/// during the run. None of them are retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The resolved configuration violates a precondition (for example a
    /// worker count of zero). Raised before any worker is spawned.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The requested search bounds are not a valid range.
    #[error("invalid search range [{low}, {high}]: {reason}")]
    InvalidRange {
        low: u64,
        high: u64,
        reason: &'static str,
    },

    /// Writing to the output stream or the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A shared lock was **poisoned** because a worker panicked while holding
    /// it. When the `parking-lot` feature is enabled, mutexes do not poison
    /// and this variant is never produced.
    #[error("lock poisoned")]
    LockPoisoned,

    /// The operating system refused to spawn a worker thread.
    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: io::Error,
    },

    /// A worker thread panicked before it finished its share of the range.
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },
}

#[cfg(not(feature = "parking-lot"))]
use crate::mutex::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
