use core::{fmt, ops::RangeInclusive};

use crate::{Error, Result};

/// Smallest value a search may start at. Two is the first prime.
pub const MIN_LOW: u64 = 2;

/// Largest value a search may end at.
///
/// Configuration values are signed 64-bit integers, so nothing above
/// `i64::MAX` can be requested. Capping here also leaves the shared claim
/// counter room to run past `high` (once per worker) without wrapping.
pub const MAX_HIGH: u64 = i64::MAX as u64;

/// Inclusive bounds `[low, high]` of a search.
///
/// Invariant: `MIN_LOW <= low <= high <= MAX_HIGH`. The only way to build one
/// is [`SearchRange::new`] (or [`SearchRange::up_to`]), which enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRange {
    low: u64,
    high: u64,
}

impl SearchRange {
    /// Creates a range, validating the invariant.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `low < 2`, `low > high`, or
    /// `high > MAX_HIGH`.
    pub fn new(low: u64, high: u64) -> Result<Self> {
        if low < MIN_LOW {
            return Err(Error::InvalidRange {
                low,
                high,
                reason: "low bound must be at least 2",
            });
        }
        if low > high {
            return Err(Error::InvalidRange {
                low,
                high,
                reason: "low bound exceeds high bound",
            });
        }
        if high > MAX_HIGH {
            return Err(Error::InvalidRange {
                low,
                high,
                reason: "high bound exceeds i64::MAX",
            });
        }
        Ok(Self { low, high })
    }

    /// Builds a sub-range of an already validated range.
    pub(crate) const fn from_bounds(low: u64, high: u64) -> Self {
        debug_assert!(MIN_LOW <= low && low <= high && high <= MAX_HIGH);
        Self { low, high }
    }

    /// The range `[2, max_number]` searched by a run.
    ///
    /// # Errors
    /// See [`SearchRange::new`].
    pub fn up_to(max_number: u64) -> Result<Self> {
        Self::new(MIN_LOW, max_number)
    }

    #[must_use]
    pub const fn low(&self) -> u64 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Number of integers in the range. Never zero.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.high - self.low + 1
    }

    #[must_use]
    pub const fn contains(&self, n: u64) -> bool {
        self.low <= n && n <= self.high
    }

    /// Iterates every integer in the range in ascending order.
    pub fn iter(&self) -> RangeInclusive<u64> {
        self.low..=self.high
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl IntoIterator for SearchRange {
    type Item = u64;
    type IntoIter = RangeInclusive<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
