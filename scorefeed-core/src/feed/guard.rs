//! Mutual exclusion for outstanding fetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// At-most-one-in-flight guard for page fetches.
///
/// Acquisition is scoped: the returned [`FetchPermit`] clears the flag on
/// drop, so release happens on success, parse failure, network failure,
/// and unwind alike. A trigger that finds the guard taken is dropped, not
/// queued; the next trigger after release retries.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    in_flight: Arc<AtomicBool>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the in-flight slot. Returns `None` when a fetch is already
    /// outstanding; no state is mutated in that case.
    pub fn try_acquire(&self) -> Option<FetchPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FetchPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    /// Whether a permit is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Scoped proof that the holder is the only outstanding fetch.
#[derive(Debug)]
pub struct FetchPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for FetchPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_permit_held() {
        let guard = FetchGuard::new();
        let permit = guard.try_acquire().expect("first acquire succeeds");
        assert!(guard.is_in_flight());
        assert!(guard.try_acquire().is_none());
        drop(permit);
        assert!(!guard.is_in_flight());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn permit_releases_on_unwind() {
        let guard = FetchGuard::new();
        let cloned = guard.clone();
        let result = std::panic::catch_unwind(move || {
            let _permit = cloned.try_acquire().expect("acquire");
            panic!("fetch blew up");
        });
        assert!(result.is_err());
        assert!(!guard.is_in_flight());
    }
}
