use core::num::NonZeroUsize;

use crate::{Delivery, Distribution, Error, Result, SearchRange, Settings};

/// Largest worker count a run accepts. Every worker is one OS thread and one
/// partition table row.
pub const MAX_WORKERS: usize = 1 << 16;

/// A validated, immutable description of one run.
///
/// Built once before any worker starts. Construction is where invalid values
/// are rejected: a worker count outside `1..=MAX_WORKERS`, a ceiling below
/// two, or a ceiling that does not fit the signed 64-bit value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    workers: NonZeroUsize,
    range: SearchRange,
    distribution: Distribution,
    delivery: Delivery,
}

impl SearchConfig {
    /// Validates raw values as read from a configuration file or the command
    /// line, and selects the default strategies.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `threads` is not in
    /// `1..=MAX_WORKERS` or `max_number < 2`.
    ///
    /// # Example
    /// ```
    /// use primehunt::SearchConfig;
    ///
    /// let config = SearchConfig::new(4, 100).unwrap();
    /// assert_eq!(config.workers().get(), 4);
    /// assert_eq!(config.range().low(), 2);
    ///
    /// assert!(SearchConfig::new(0, 100).is_err());
    /// assert!(SearchConfig::new(4, 1).is_err());
    /// ```
    pub fn new(threads: i64, max_number: i64) -> Result<Self> {
        let workers = usize::try_from(threads)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| Error::InvalidConfig {
                reason: format!("threads must be at least 1 (got {threads})"),
            })?;
        let workers = checked_workers(workers)?;

        let max_number = u64::try_from(max_number)
            .ok()
            .filter(|&n| n >= 2)
            .ok_or_else(|| Error::InvalidConfig {
                reason: format!("max_number must be at least 2 (got {max_number})"),
            })?;

        Ok(Self {
            workers,
            range: SearchRange::up_to(max_number)?,
            distribution: Distribution::default(),
            delivery: Delivery::default(),
        })
    }

    /// Builds a configuration over an arbitrary range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `workers > MAX_WORKERS`.
    pub fn with_range(workers: NonZeroUsize, range: SearchRange) -> Result<Self> {
        Ok(Self {
            workers: checked_workers(workers)?,
            range,
            distribution: Distribution::default(),
            delivery: Delivery::default(),
        })
    }

    /// Selects how integers are handed out.
    #[must_use]
    pub const fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Selects how findings are reported.
    #[must_use]
    pub const fn delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    #[must_use]
    pub const fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    #[must_use]
    pub const fn range(&self) -> SearchRange {
        self.range
    }

    #[must_use]
    pub const fn max_number(&self) -> u64 {
        self.range.high()
    }

    #[must_use]
    pub const fn strategy(&self) -> (Distribution, Delivery) {
        (self.distribution, self.delivery)
    }
}

fn checked_workers(workers: NonZeroUsize) -> Result<NonZeroUsize> {
    if workers.get() > MAX_WORKERS {
        return Err(Error::InvalidConfig {
            reason: format!("threads must be at most {MAX_WORKERS} (got {workers})"),
        });
    }
    Ok(workers)
}

impl TryFrom<Settings> for SearchConfig {
    type Error = Error;

    fn try_from(settings: Settings) -> Result<Self> {
        Self::new(settings.threads, settings.max_number)
    }
}
