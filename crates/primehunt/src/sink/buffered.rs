use std::io::{self, Write};

use crate::{
    PrimeFinding, Result, ResultSink, WorkerId,
    mutex::{self, Mutex},
};

/// Line written once every worker has been joined, before the sorted list.
pub const PROCESSING_NOTICE: &str = "All threads finished. Processing results...";

/// Header line preceding the sorted list.
pub const LIST_HEADER: &str = "--- List of Primes (Sorted by Number) ---";

/// Line closing the sorted list.
pub const LIST_FOOTER: &str = "--- End of List ---";

/// A sink that withholds every finding until the run is over and then yields
/// them sorted by value.
///
/// `record` only pushes onto the calling worker's private batch. The shared
/// collection is locked once per worker, in [`ResultSink::flush`], to append
/// the whole batch. Nothing is written while workers run.
///
/// ## Recommended When
/// - Output must be reproducible and numerically ordered
/// - The full result set fits in memory
///
/// ## See Also
/// - [`ImmediateEmit`]
///
/// [`ImmediateEmit`]: crate::ImmediateEmit
#[derive(Debug, Default)]
pub struct BufferedCollect {
    findings: Mutex<Vec<PrimeFinding>>,
}

impl BufferedCollect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of findings merged so far.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockPoisoned`] if a worker panicked mid-merge.
    pub fn len(&self) -> Result<usize> {
        Ok(mutex::lock(&self.findings)?.len())
    }

    /// Consumes the sink and returns every finding, stably sorted by value
    /// ascending. This is the single sort of the run.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockPoisoned`] if a worker panicked mid-merge.
    pub fn into_sorted(self) -> Result<Vec<PrimeFinding>> {
        let mut findings = mutex::into_inner(self.findings)?;
        findings.sort_by_key(|finding| finding.value);
        Ok(findings)
    }
}

impl ResultSink for BufferedCollect {
    type Batch = Vec<PrimeFinding>;

    fn batch(&self, _worker: WorkerId) -> Self::Batch {
        Vec::new()
    }

    #[inline]
    fn record(&self, batch: &mut Self::Batch, finding: PrimeFinding) -> Result<()> {
        batch.push(finding);
        Ok(())
    }

    fn flush(&self, mut batch: Self::Batch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        mutex::lock(&self.findings)?.append(&mut batch);
        Ok(())
    }
}

/// Writes the end-of-run report for sorted findings: a count summary, one
/// result line per finding, and an end marker.
///
/// # Errors
/// Propagates any error from `out`.
pub fn write_sorted<W: Write>(
    out: &mut W,
    findings: &[PrimeFinding],
    max_number: u64,
) -> io::Result<()> {
    writeln!(
        out,
        "Found {} prime numbers up to {max_number}.",
        findings.len()
    )?;
    writeln!(out, "{LIST_HEADER}")?;
    for finding in findings {
        writeln!(out, "{finding}")?;
    }
    writeln!(out, "{LIST_FOOTER}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timestamp;
    use chrono::NaiveDate;
    use std::thread::scope;

    fn at(millis: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_milli_opt(12, 0, 0, millis))
            .map(Timestamp::new)
            .unwrap()
    }

    #[test]
    fn record_does_not_publish_until_flush() {
        let sink = BufferedCollect::new();
        let worker = WorkerId::FIRST;
        let mut batch = sink.batch(worker);
        sink.record(&mut batch, PrimeFinding::new(5, worker, at(0)))
            .unwrap();
        assert_eq!(sink.len().unwrap(), 0);
        sink.flush(batch).unwrap();
        assert_eq!(sink.len().unwrap(), 1);
    }

    #[test]
    fn empty_flush_is_a_no_op() {
        let sink = BufferedCollect::new();
        let batch = sink.batch(WorkerId::FIRST);
        sink.flush(batch).unwrap();
        assert!(sink.into_sorted().unwrap().is_empty());
    }

    #[test]
    fn merges_batches_and_sorts_by_value() {
        const THREADS: usize = 6;

        let sink = BufferedCollect::new();
        scope(|s| {
            for index in 0..THREADS {
                let sink = &sink;
                s.spawn(move || {
                    let worker = WorkerId::from_index(index);
                    let mut batch = sink.batch(worker);
                    // Interleaved values so every batch spans the whole range,
                    // recorded in descending order.
                    let stride = THREADS as u64;
                    for step in (0..600 / stride).rev() {
                        let value = index as u64 + step * stride;
                        sink.record(&mut batch, PrimeFinding::new(value, worker, at(0)))
                            .unwrap();
                    }
                    sink.flush(batch).unwrap();
                });
            }
        });

        let sorted = sink.into_sorted().unwrap();
        assert_eq!(sorted.len(), 600);
        assert!(sorted.windows(2).all(|w| w[0].value <= w[1].value));
        assert!(
            sorted
                .iter()
                .all(|f| f.worker_id.index() == f.value as usize % THREADS)
        );
    }

    #[test]
    fn sort_is_stable_for_equal_values() {
        let sink = BufferedCollect::new();
        let worker = WorkerId::FIRST;
        let mut batch = sink.batch(worker);
        for (value, millis) in [(7, 1), (3, 2), (7, 3), (3, 4)] {
            sink.record(&mut batch, PrimeFinding::new(value, worker, at(millis)))
                .unwrap();
        }
        sink.flush(batch).unwrap();

        let order: Vec<_> = sink
            .into_sorted()
            .unwrap()
            .into_iter()
            .map(|f| (f.value, f.found_at))
            .collect();
        assert_eq!(order, vec![(3, at(2)), (3, at(4)), (7, at(1)), (7, at(3))]);
    }

    #[test]
    fn writes_summary_list_and_end_marker() {
        let worker = WorkerId::new(2).unwrap();
        let findings = [
            PrimeFinding::new(2, worker, at(1)),
            PrimeFinding::new(3, worker, at(2)),
        ];
        let mut out = Vec::new();
        write_sorted(&mut out, &findings, 3).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Found 2 prime numbers up to 3.\n\
             --- List of Primes (Sorted by Number) ---\n\
             [Timestamp: 2025-06-01 12:00:00.001] [Thread: 2] Found prime: 2\n\
             [Timestamp: 2025-06-01 12:00:00.002] [Thread: 2] Found prime: 3\n\
             --- End of List ---\n"
        );
    }
}
