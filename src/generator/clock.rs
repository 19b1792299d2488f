//! Wall-clock sources for the identifier generator.
//!
//! The generator only needs a coarse millisecond reading. It tolerates clocks
//! that stand still or step backwards, so any source implementing [`Clock`]
//! is safe to plug in.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use chrono::Utc;

/// A source of wall-clock time in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    /// Returns the current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Clocks set before 1970 read as the epoch.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Useful for replaying a known sequence or for exercising the generator's
/// behavior when time stands still or runs backwards.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Creates a clock reading `millis`
    pub fn new(millis: u64) -> Self {
        ManualClock {
            millis: AtomicU64::new(millis),
        }
    }

    /// Sets the reading, forwards or backwards
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, AtomicOrdering::SeqCst);
    }

    /// Moves the reading forward by `millis`
    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, AtomicOrdering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(AtomicOrdering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_millis(), 100);

        clock.advance(5);
        assert_eq!(clock.now_millis(), 105);

        clock.set(50);
        assert_eq!(clock.now_millis(), 50);
    }

    #[test]
    fn test_shared_clock() {
        let clock = Arc::new(ManualClock::new(7));
        let shared = Arc::clone(&clock);
        clock.advance(1);
        assert_eq!(shared.now_millis(), 8);

        let borrowed: &dyn Clock = &*clock;
        assert_eq!(Clock::now_millis(&borrowed), 8);
    }
}
