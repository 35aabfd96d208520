use core::fmt;

use chrono::{Local, NaiveDateTime};

/// Format used for every timestamp printed by this crate: local wall time with
/// millisecond precision, e.g. `2025-01-01 13:37:00.042`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A point in local wall-clock time, captured when a prime is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    #[must_use]
    pub const fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    #[must_use]
    pub const fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// A source of timestamps for findings.
///
/// This abstraction allows you to plug in the real local clock or a fixed
/// clock in tests, so that emitted lines can be compared byte for byte.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use primehunt::{Clock, Timestamp};
///
/// struct FixedClock;
/// impl Clock for FixedClock {
///     fn now(&self) -> Timestamp {
///         NaiveDate::from_ymd_opt(2025, 1, 1)
///             .and_then(|d| d.and_hms_milli_opt(0, 0, 0, 7))
///             .map(Timestamp::new)
///             .unwrap()
///     }
/// }
///
/// assert_eq!(FixedClock.now().to_string(), "2025-01-01 00:00:00.007");
/// ```
pub trait Clock: Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// The system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> Timestamp {
        Timestamp(Local::now().naive_local())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
