//! Work sources: who tests which integer.
//!
//! Two strategies hand out the integers of a [`SearchRange`] to the workers
//! of a run, both honouring the same contract (every integer exactly once,
//! then [`Claim::Exhausted`] forever):
//!
//! - [`StaticPartition`] splits the range into one contiguous sub-range per
//!   worker before the run. No shared state afterwards, so no contention, but
//!   load can be uneven because larger numbers cost more to test.
//! - [`DynamicClaim`] keeps a single atomic cursor that every worker bumps,
//!   one integer per claim. Naturally balanced at the cost of one atomic
//!   operation per candidate.
//!
//! [`SearchRange`]: crate::SearchRange

mod claim;
mod interface;
mod partition;
mod status;

use core::fmt;

pub use claim::*;
pub use interface::*;
pub use partition::*;
pub use status::*;

/// Selects the [`WorkSource`] implementation used for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Pre-computed contiguous sub-range per worker ([`StaticPartition`]).
    #[default]
    Static,
    /// Shared atomic cursor ([`DynamicClaim`]).
    Dynamic,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "Static Partition"),
            Self::Dynamic => write!(f, "Dynamic Claim"),
        }
    }
}
