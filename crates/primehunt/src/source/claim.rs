use portable_atomic::{AtomicU64, Ordering};

use crate::{Claim, SearchRange, WorkSource, WorkerId};

/// A lock-free work source where every worker claims the next integer from a
/// single shared cursor.
///
/// The cursor starts at the range's low bound and is advanced only by an
/// atomic fetch-and-add, so no two claims can observe the same value no matter
/// how many workers race. A claim returns the pre-increment value while it is
/// `<= high`; after that the worker's lane latches [`Claim::Exhausted`] and the
/// cursor is never touched again by that worker, which bounds the overshoot
/// past `high` to one per worker.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Self-balancing across workers
/// - ❌ Reproducible worker attribution
///
/// ## Recommended When
/// - Testing cost grows across the range (it does for trial division)
/// - One atomic operation per candidate is cheap next to the test itself
///
/// ## See Also
/// - [`StaticPartition`]
///
/// [`StaticPartition`]: crate::StaticPartition
#[derive(Debug)]
pub struct DynamicClaim {
    range: SearchRange,
    #[cfg(feature = "cache-padded")]
    cursor: crossbeam_utils::CachePadded<AtomicU64>,
    #[cfg(not(feature = "cache-padded"))]
    cursor: AtomicU64,
}

impl DynamicClaim {
    /// Creates a source whose cursor points at `range.low()`.
    ///
    /// # Example
    /// ```
    /// use primehunt::{DynamicClaim, SearchRange, WorkSource, WorkerId};
    ///
    /// let source = DynamicClaim::new(SearchRange::new(2, 4).unwrap());
    /// let mut lane = source.lane(WorkerId::FIRST);
    ///
    /// let claimed: Vec<_> = core::iter::from_fn(|| source.next(&mut lane).ready()).collect();
    /// assert_eq!(claimed, vec![2, 3, 4]);
    /// ```
    pub fn new(range: SearchRange) -> Self {
        let cursor = AtomicU64::new(range.low());
        Self {
            range,
            #[cfg(feature = "cache-padded")]
            cursor: crossbeam_utils::CachePadded::new(cursor),
            #[cfg(not(feature = "cache-padded"))]
            cursor,
        }
    }

    /// How many integers have been handed out so far.
    #[must_use]
    pub fn claimed(&self) -> u64 {
        let cursor = self.cursor.load(Ordering::Relaxed);
        cursor.min(self.range.high() + 1) - self.range.low()
    }
}

/// A worker's view of a [`DynamicClaim`]: only whether it has run dry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimLane {
    exhausted: bool,
}

impl WorkSource for DynamicClaim {
    type Lane = ClaimLane;

    fn range(&self) -> SearchRange {
        self.range
    }

    fn lane(&self, _worker: WorkerId) -> Self::Lane {
        ClaimLane::default()
    }

    #[inline]
    fn next(&self, lane: &mut Self::Lane) -> Claim {
        if lane.exhausted {
            return Claim::Exhausted;
        }
        // Relaxed: the cursor guards no other memory.
        let value = self.cursor.fetch_add(1, Ordering::Relaxed);
        if value <= self.range.high() {
            Claim::Ready { value }
        } else {
            lane.exhausted = true;
            Claim::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::thread::scope;

    #[test]
    fn hands_out_range_in_order_to_single_worker() {
        let source = DynamicClaim::new(SearchRange::new(10, 20).unwrap());
        let mut lane = source.lane(WorkerId::FIRST);
        let claimed: Vec<_> = core::iter::from_fn(|| source.next(&mut lane).ready()).collect();
        assert_eq!(claimed, (10..=20).collect::<Vec<_>>());
        assert_eq!(source.claimed(), 11);
    }

    #[test]
    fn exhausted_lane_stops_touching_the_cursor() {
        let source = DynamicClaim::new(SearchRange::new(2, 2).unwrap());
        let mut lane = source.lane(WorkerId::FIRST);
        assert_eq!(source.next(&mut lane), Claim::Ready { value: 2 });
        assert_eq!(source.next(&mut lane), Claim::Exhausted);
        let after_exhaustion = source.cursor.load(Ordering::Relaxed);
        for _ in 0..10 {
            assert_eq!(source.next(&mut lane), Claim::Exhausted);
        }
        assert_eq!(source.cursor.load(Ordering::Relaxed), after_exhaustion);
        assert_eq!(source.claimed(), 1);
    }

    #[test]
    fn concurrent_claims_are_unique_and_complete() {
        const THREADS: usize = 8;

        let range = SearchRange::new(2, 50_001).unwrap();
        let source = DynamicClaim::new(range);
        let seen = Mutex::new(HashSet::with_capacity(range.len() as usize));

        scope(|s| {
            for index in 0..THREADS {
                let source = &source;
                let seen = &seen;
                s.spawn(move || {
                    let mut lane = source.lane(WorkerId::from_index(index));
                    let mut local = Vec::new();
                    while let Some(value) = source.next(&mut lane).ready() {
                        local.push(value);
                    }
                    let mut set = seen.lock().unwrap();
                    for value in local {
                        assert!(set.insert(value), "{value} handed out twice");
                    }
                });
            }
        });

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len() as u64, range.len());
        assert!(range.iter().all(|n| seen.contains(&n)));
        // One overshoot per worker at most.
        let cursor = source.cursor.load(Ordering::Relaxed);
        assert!(cursor <= range.high() + 1 + THREADS as u64);
    }
}
