use std::io::Write;

use crate::{
    PrimeFinding, Result, ResultSink, WorkerId,
    mutex::{self, Mutex},
};

/// A sink that writes every finding to an output stream as soon as it is
/// recorded.
///
/// The stream is wrapped in a [`Mutex`] that is held only for the duration of
/// one `writeln!`, so each finding appears as one whole line no matter how
/// many workers record at once. Lines appear in the order workers produce
/// them; there is no global ordering.
///
/// ## Recommended When
/// - Someone is watching the run and wants results as they happen
///
/// ## See Also
/// - [`BufferedCollect`]
///
/// [`BufferedCollect`]: crate::BufferedCollect
#[derive(Debug)]
pub struct ImmediateEmit<W> {
    out: Mutex<W>,
}

impl<W> ImmediateEmit<W>
where
    W: Write + Send,
{
    /// Wraps `out`. Line-buffered writers such as [`std::io::Stdout`] make
    /// each finding visible as soon as it is written.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying stream once every worker is done with it.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockPoisoned`] if a worker panicked mid-write.
    pub fn into_inner(self) -> Result<W> {
        mutex::into_inner(self.out)
    }
}

impl<W> ResultSink for ImmediateEmit<W>
where
    W: Write + Send,
{
    type Batch = ();

    fn batch(&self, _worker: WorkerId) -> Self::Batch {}

    fn record(&self, _batch: &mut Self::Batch, finding: PrimeFinding) -> Result<()> {
        let mut out = mutex::lock(&self.out)?;
        writeln!(out, "{finding}")?;
        Ok(())
    }

    fn flush(&self, _batch: Self::Batch) -> Result<()> {
        Ok(())
    }
}
