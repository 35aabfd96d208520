use core::{fmt, num::NonZeroUsize};

use crate::Timestamp;

/// Identifies one worker of a run. Workers are numbered `1..=N` at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(NonZeroUsize);

impl WorkerId {
    /// The first worker of every run.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(id: usize) -> Option<Self> {
        match NonZeroUsize::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Worker id for the zero-based spawn index `index`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Zero-based position of this worker, e.g. into a partition table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }

    /// All ids of a pool of `count` workers, in spawn order.
    pub fn all(count: NonZeroUsize) -> impl Iterator<Item = Self> {
        (0..count.get()).map(Self::from_index)
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discovered prime.
///
/// Created exactly once by the worker that tested `value`, then moved into a
/// result sink. The [`fmt::Display`] impl renders the canonical result line:
///
/// ```text
/// [Timestamp: 2025-01-01 00:00:00.007] [Thread: 3] Found prime: 97
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeFinding {
    pub value: u64,
    pub worker_id: WorkerId,
    pub found_at: Timestamp,
}

impl PrimeFinding {
    #[must_use]
    pub const fn new(value: u64, worker_id: WorkerId, found_at: Timestamp) -> Self {
        Self {
            value,
            worker_id,
            found_at,
        }
    }
}

impl fmt::Display for PrimeFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Timestamp: {}] [Thread: {}] Found prime: {}",
            self.found_at, self.worker_id, self.value
        )
    }
}
