//! Result sinks: where found primes go.
//!
//! Both strategies accept findings from every worker concurrently and never
//! drop one:
//!
//! - [`ImmediateEmit`] writes each finding as one line the moment it is
//!   recorded, under an output lock. Lines from different workers interleave
//!   in discovery order, not numeric order.
//! - [`BufferedCollect`] keeps findings in a per-worker batch, merges each
//!   batch into a shared collection with a single lock acquisition when the
//!   worker finishes, and is sorted by value once the run is over.

mod buffered;
mod immediate;
mod interface;

use core::fmt;

pub use buffered::*;
pub use immediate::*;
pub use interface::*;

/// Selects the [`ResultSink`] implementation used for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// Stream lines as primes are found ([`ImmediateEmit`]).
    #[default]
    Immediate,
    /// Collect, sort, and print after the run ([`BufferedCollect`]).
    Buffered,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => write!(f, "Immediate Emit"),
            Self::Buffered => write!(f, "Buffered Collect"),
        }
    }
}
