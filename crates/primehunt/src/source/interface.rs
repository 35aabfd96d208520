use crate::{Claim, SearchRange, WorkerId};

/// A minimal interface for handing out integers to workers.
///
/// One instance is shared by reference between every worker of a run. Each
/// worker first asks for its own [`WorkSource::Lane`], which holds whatever
/// per-worker state the strategy needs, and then calls [`WorkSource::next`]
/// until it sees [`Claim::Exhausted`].
///
/// Across all lanes of a run, implementations must yield every integer of
/// [`WorkSource::range`] exactly once.
pub trait WorkSource: Sync {
    /// Worker-private state, moved into the worker's thread.
    type Lane: Send;

    /// The full range this source distributes.
    fn range(&self) -> SearchRange;

    /// Creates the lane for `worker`. Called once per worker, before its loop.
    fn lane(&self, worker: WorkerId) -> Self::Lane;

    /// Returns the next integer for the lane's worker.
    fn next(&self, lane: &mut Self::Lane) -> Claim;
}
