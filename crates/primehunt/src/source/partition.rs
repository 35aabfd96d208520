use core::{num::NonZeroUsize, ops::RangeInclusive};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Claim, SearchRange, WorkSource, WorkerId};

/// One row of a partition table: the sub-range owned by a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    /// The owning worker.
    pub worker_id: WorkerId,
    /// The owned integers, or `None` when the worker gets no work at all.
    pub span: Option<SearchRange>,
}

impl Partition {
    /// Number of integers this worker will test.
    #[must_use]
    pub const fn len(&self) -> u64 {
        match self.span {
            Some(span) => span.len(),
            None => 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.span.is_none()
    }
}

/// A contention-free work source that splits the range into one contiguous
/// sub-range per worker ahead of time.
///
/// The table is computed once in [`StaticPartition::new`] and never changes,
/// so the worker-to-sub-range mapping is reproducible for a given range and
/// worker count. Workers iterate their own sub-range locally; there is no
/// shared mutable state.
///
/// ## Layout
/// With `len = high - low + 1` and `chunk = len / N`, worker `i` (zero-based)
/// owns `[low + i·chunk, low + (i+1)·chunk - 1]`, except the last worker, whose
/// sub-range runs to `high` and absorbs the division remainder. The first
/// sub-range therefore always begins at `low`. If there are more workers than
/// integers, `chunk` is zero: every worker but the last gets nothing and the
/// last one owns the whole range.
///
/// ## Recommended When
/// - Testing cost is roughly uniform across the range
/// - Reproducible attribution of primes to workers matters
///
/// ## See Also
/// - [`DynamicClaim`]
///
/// [`DynamicClaim`]: crate::DynamicClaim
#[derive(Debug, Clone)]
pub struct StaticPartition {
    range: SearchRange,
    table: Vec<Partition>,
}

impl StaticPartition {
    /// Computes the partition table of `range` over `workers` workers.
    ///
    /// # Example
    /// ```
    /// use core::num::NonZeroUsize;
    /// use primehunt::{SearchRange, StaticPartition};
    ///
    /// let range = SearchRange::up_to(100).unwrap();
    /// let partition = StaticPartition::new(range, NonZeroUsize::new(4).unwrap());
    ///
    /// let spans: Vec<_> = partition
    ///     .table()
    ///     .iter()
    ///     .map(|p| p.span.map(|s| (s.low(), s.high())))
    ///     .collect();
    /// assert_eq!(
    ///     spans,
    ///     vec![Some((2, 25)), Some((26, 49)), Some((50, 73)), Some((74, 100))]
    /// );
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(range), fields(range = %range)))]
    pub fn new(range: SearchRange, workers: NonZeroUsize) -> Self {
        let count = workers.get();
        // A usize always fits in a u64 on supported targets; saturating keeps
        // `chunk` at zero otherwise.
        let chunk = range.len() / u64::try_from(count).unwrap_or(u64::MAX);

        let table = WorkerId::all(workers)
            .map(|worker_id| {
                let index = worker_id.index() as u64;
                let start = range.low() + index * chunk;
                let span = if worker_id.get() == count {
                    Some(SearchRange::from_bounds(start, range.high()))
                } else if chunk == 0 {
                    None
                } else {
                    Some(SearchRange::from_bounds(start, start + chunk - 1))
                };
                Partition { worker_id, span }
            })
            .collect::<Vec<_>>();

        #[cfg(feature = "tracing")]
        for row in &table {
            tracing::debug!(worker = %row.worker_id, span = ?row.span, "partition assigned");
        }

        Self { range, table }
    }

    /// The partition table, one row per worker in [`WorkerId`] order.
    #[must_use]
    pub fn table(&self) -> &[Partition] {
        &self.table
    }

    /// The row owned by `worker`, if it belongs to this run.
    #[must_use]
    pub fn partition(&self, worker: WorkerId) -> Option<&Partition> {
        self.table.get(worker.index())
    }
}

/// A worker's cursor over its own sub-range.
#[derive(Debug, Clone)]
pub struct PartitionLane {
    remaining: RangeInclusive<u64>,
}

impl PartitionLane {
    #[allow(clippy::reversed_empty_ranges)]
    fn empty() -> Self {
        Self { remaining: 1..=0 }
    }
}

impl WorkSource for StaticPartition {
    type Lane = PartitionLane;

    fn range(&self) -> SearchRange {
        self.range
    }

    fn lane(&self, worker: WorkerId) -> Self::Lane {
        match self.partition(worker).and_then(|row| row.span) {
            Some(span) => PartitionLane {
                remaining: span.iter(),
            },
            None => PartitionLane::empty(),
        }
    }

    #[inline]
    fn next(&self, lane: &mut Self::Lane) -> Claim {
        match lane.remaining.next() {
            Some(value) => Claim::Ready { value },
            None => Claim::Exhausted,
        }
    }
}
