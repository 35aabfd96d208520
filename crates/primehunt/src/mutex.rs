#[cfg(not(feature = "parking-lot"))]
pub use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(feature = "parking-lot")]
pub use parking_lot::{Mutex, MutexGuard};

/// Locks `mutex`, mapping poisoning into [`crate::Error::LockPoisoned`].
///
/// `parking_lot` mutexes cannot poison, so that build is infallible.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> crate::Result<MutexGuard<'_, T>> {
    #[cfg(feature = "parking-lot")]
    {
        Ok(mutex.lock())
    }
    #[cfg(not(feature = "parking-lot"))]
    {
        Ok(mutex.lock()?)
    }
}

/// Consumes `mutex` and returns the protected value.
#[inline]
pub(crate) fn into_inner<T>(mutex: Mutex<T>) -> crate::Result<T> {
    #[cfg(feature = "parking-lot")]
    {
        Ok(mutex.into_inner())
    }
    #[cfg(not(feature = "parking-lot"))]
    {
        mutex.into_inner().map_err(|_| crate::Error::LockPoisoned)
    }
}
