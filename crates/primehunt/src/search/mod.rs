//! The orchestrator: turns a [`SearchConfig`] into a finished run.
//!
//! [`Search::run`] builds the work source and result sink selected by the
//! configuration, runs the worker pool over them, and, for buffered delivery,
//! performs the one sort and emits the ordered list once every worker has
//! been joined.

mod config;
mod pool;
mod report;

use std::{io::Write, time::Instant};

pub use config::*;
pub use pool::*;
pub use report::*;

use crate::{
    BufferedCollect, Clock, Delivery, Distribution, DynamicClaim, ImmediateEmit, LocalClock,
    PROCESSING_NOTICE, Result, StaticPartition, WorkSource, WorkerStats, write_sorted,
};

/// One configured prime search.
///
/// # Example
/// ```
/// use primehunt::{Delivery, Distribution, Search, SearchConfig};
///
/// let config = SearchConfig::new(3, 30)
///     .unwrap()
///     .distribution(Distribution::Dynamic)
///     .delivery(Delivery::Buffered);
///
/// let mut out = Vec::new();
/// let report = Search::new(config).run(&mut out).unwrap();
/// assert_eq!(report.primes_found(), 10);
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.starts_with(
///     "All threads finished. Processing results...\n\nFound 10 prime numbers up to 30.\n"
/// ));
/// assert!(out.ends_with("--- End of List ---\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Search<C = LocalClock> {
    config: SearchConfig,
    clock: C,
}

impl Search {
    /// A search stamping findings with the local wall clock.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self {
            config,
            clock: LocalClock,
        }
    }
}

impl<C: Clock> Search<C> {
    /// A search stamping findings with `clock`.
    pub const fn with_clock(config: SearchConfig, clock: C) -> Self {
        Self { config, clock }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search to completion, writing result lines to `out`.
    ///
    /// With [`Delivery::Immediate`] lines are written while workers run. With
    /// [`Delivery::Buffered`] nothing is written until every worker has been
    /// joined; then [`PROCESSING_NOTICE`] and a blank line are written, and the
    /// findings are sorted by value and written through [`write_sorted`].
    ///
    /// # Errors
    /// Fails on thread spawn failure, a panicking worker, a poisoned lock, or
    /// an I/O error on `out`. No partial report is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip_all, fields(range = %self.config.range())))]
    pub fn run<W>(&self, out: &mut W) -> Result<SearchReport>
    where
        W: Write + Send,
    {
        let started = Instant::now();
        let (distribution, delivery) = self.config.strategy();

        #[cfg(feature = "tracing")]
        tracing::info!(
            workers = self.config.workers().get(),
            %distribution,
            %delivery,
            "Starting search"
        );

        let workers = match distribution {
            Distribution::Static => {
                let source = StaticPartition::new(self.config.range(), self.config.workers());
                self.run_with_source(&source, out)?
            }
            Distribution::Dynamic => {
                let source = DynamicClaim::new(self.config.range());
                self.run_with_source(&source, out)?
            }
        };

        let report = SearchReport {
            range: self.config.range(),
            distribution,
            delivery,
            workers,
            elapsed: started.elapsed(),
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Search finished: {report}");

        Ok(report)
    }

    fn run_with_source<S, W>(&self, source: &S, out: &mut W) -> Result<Vec<WorkerStats>>
    where
        S: WorkSource,
        W: Write + Send,
    {
        let workers = self.config.workers();
        match self.config.strategy().1 {
            Delivery::Immediate => {
                let sink = ImmediateEmit::new(&mut *out);
                let stats = run_pool(workers, source, &sink, &self.clock)?;
                sink.into_inner()?.flush()?;
                Ok(stats)
            }
            Delivery::Buffered => {
                let sink = BufferedCollect::new();
                let stats = run_pool(workers, source, &sink, &self.clock)?;

                writeln!(out, "{PROCESSING_NOTICE}\n")?;
                let findings = sink.into_sorted()?;
                #[cfg(feature = "tracing")]
                tracing::info!("All workers joined, emitting {} sorted findings", findings.len());

                write_sorted(out, &findings, self.config.max_number())?;
                out.flush()?;
                Ok(stats)
            }
        }
    }
}
