/// The outcome of asking a [`WorkSource`] for the next integer to test.
///
/// Once a worker has seen [`Claim::Exhausted`] every further call on the same
/// lane returns it again.
///
/// [`WorkSource`]: crate::WorkSource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// `value` now belongs to the calling worker and to no one else.
    Ready {
        /// The integer to test.
        value: u64,
    },
    /// Nothing is left for the calling worker.
    Exhausted,
}

impl Claim {
    /// Converts into an `Option`, mapping [`Claim::Exhausted`] to `None`.
    #[must_use]
    #[inline]
    pub const fn ready(self) -> Option<u64> {
        match self {
            Self::Ready { value } => Some(value),
            Self::Exhausted => None,
        }
    }
}
