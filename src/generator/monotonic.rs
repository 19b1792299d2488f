//! Thread-safe monotonic identifier generator.
//!
//! This module contains the IdGenerator struct, which hands out strictly
//! increasing identifiers to any number of concurrent callers.
//!
//! # Layout
//!
//! A fresh identifier is `(high = unix millis, low = 0)`. When that candidate
//! would not exceed the last issued identifier (several calls within one
//! millisecond, or a clock that stepped backwards) the generator issues the
//! successor of the last identifier instead. A carry out of the low word
//! borrows the next millisecond, so the generator never waits on the clock.

use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::generator::clock::{Clock, SystemClock};
use crate::id::{IdError, Identifier, Result};

/// Mutable state guarded by the generator's lock
#[derive(Debug)]
struct Cursor {
    /// Last identifier handed out (or observed)
    last: Identifier,
    /// Clock reading taken on the previous call
    last_clock: u64,
}

/// A generator of strictly increasing identifiers.
///
/// Every identifier returned by [`create`](IdGenerator::create) is greater
/// than every identifier previously returned by the same generator, no matter
/// which thread asked for it. Identifiers are roughly time-ordered, which
/// keeps freshly inserted keys close together in the store.
///
/// # Example
///
/// ```rust
/// use keyspace_id::IdGenerator;
///
/// let generator = IdGenerator::new();
/// let first = generator.create();
/// let second = generator.create();
/// assert!(first < second);
/// ```
pub struct IdGenerator<C: Clock = SystemClock> {
    clock: C,
    cursor: Mutex<Cursor>,
}

static GLOBAL: OnceLock<IdGenerator> = OnceLock::new();

impl IdGenerator<SystemClock> {
    /// Creates a generator driven by the system clock
    pub fn new() -> Self {
        IdGenerator::with_clock(SystemClock)
    }

    /// Returns the process-wide generator, creating it on first use.
    ///
    /// Code that needs test isolation should own its own generator instead.
    pub fn global() -> &'static IdGenerator {
        GLOBAL.get_or_init(IdGenerator::new)
    }
}

impl Default for IdGenerator<SystemClock> {
    fn default() -> Self {
        IdGenerator::new()
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Creates a generator driven by `clock`
    pub fn with_clock(clock: C) -> Self {
        IdGenerator {
            clock,
            cursor: Mutex::new(Cursor {
                last: Identifier::ZERO,
                last_clock: 0,
            }),
        }
    }

    /// Returns the next identifier.
    ///
    /// # Panics
    ///
    /// Panics once [`Identifier::MAX`] has been issued, rather than hand out a
    /// duplicate. See [`try_create`](IdGenerator::try_create).
    pub fn create(&self) -> Identifier {
        match self.try_create() {
            Ok(id) => id,
            Err(err) => panic!("monotonic identifier generator: {err}"),
        }
    }

    /// Returns the next identifier, or [`IdError::Exhausted`] once
    /// [`Identifier::MAX`] has been issued.
    pub fn try_create(&self) -> Result<Identifier> {
        let mut cursor = self.cursor.lock();
        let now = self.clock.now_millis();

        if now < cursor.last_clock {
            warn!(
                now,
                previous = cursor.last_clock,
                "wall clock moved backwards; continuing from last identifier"
            );
        }
        cursor.last_clock = now;

        let candidate = Identifier::new(now, 0);
        let next = if candidate > cursor.last {
            candidate
        } else {
            let next = cursor.last.checked_next().ok_or(IdError::Exhausted)?;
            trace!(%next, "issuing identifier from sequence");
            next
        };

        cursor.last = next;
        Ok(next)
    }

    /// Advances the cursor so that every later identifier exceeds `seen`.
    ///
    /// Call this with the largest key already in storage after a restart, or
    /// with identifiers received from another generator. The cursor never
    /// moves backwards.
    pub fn observe(&self, seen: Identifier) {
        let mut cursor = self.cursor.lock();
        if seen > cursor.last {
            debug!(%seen, previous = %cursor.last, "advancing generator cursor");
            cursor.last = seen;
        }
    }

    /// Returns the most recently issued (or observed) identifier
    pub fn last_issued(&self) -> Identifier {
        self.cursor.lock().last
    }

    /// Returns the generator's clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::clock::ManualClock;
    use std::sync::Arc;

    #[test]
    fn test_ids_strictly_increase() {
        let generator = IdGenerator::new();
        let mut prev = generator.create();
        for _ in 0..10_000 {
            let next = generator.create();
            assert!(next > prev);
            prev = next;
        }
        assert_eq!(generator.last_issued(), prev);
    }

    #[test]
    fn test_fresh_millisecond_resets_sequence() {
        let generator = IdGenerator::with_clock(ManualClock::new(1_000));

        assert_eq!(generator.create(), Identifier::new(1_000, 0));
        assert_eq!(generator.create(), Identifier::new(1_000, 1));
        assert_eq!(generator.create(), Identifier::new(1_000, 2));

        generator.clock().advance(1);
        assert_eq!(generator.create(), Identifier::new(1_001, 0));
    }

    #[test]
    fn test_clock_moving_backwards() {
        let generator = IdGenerator::with_clock(ManualClock::new(5_000));
        let before = generator.create();

        generator.clock().set(4_000);
        let after = generator.create();
        assert!(after > before);
        assert_eq!(after, Identifier::new(5_000, 1));

        // Once the clock catches up, ids follow the clock again.
        generator.clock().set(5_001);
        assert_eq!(generator.create(), Identifier::new(5_001, 0));
    }

    #[test]
    fn test_sequence_carry_borrows_next_millisecond() {
        let generator = IdGenerator::with_clock(ManualClock::new(10));
        generator.observe(Identifier::new(10, u64::MAX));

        let id = generator.create();
        assert_eq!(id, Identifier::new(11, 0));

        // The clock reaching 11 must not reissue (11, 0).
        generator.clock().set(11);
        assert_eq!(generator.create(), Identifier::new(11, 1));
    }

    #[test]
    fn test_observe_never_moves_backwards() {
        let generator = IdGenerator::with_clock(ManualClock::new(100));
        generator.observe(Identifier::new(500, 7));
        assert_eq!(generator.create(), Identifier::new(500, 8));

        generator.observe(Identifier::new(1, 0));
        assert_eq!(generator.last_issued(), Identifier::new(500, 8));
    }

    #[test]
    fn test_exhausted() {
        let generator = IdGenerator::with_clock(ManualClock::new(0));
        generator.observe(Identifier::MAX);

        assert_eq!(generator.try_create(), Err(IdError::Exhausted));
        // The cursor stays put after the failure.
        assert_eq!(generator.last_issued(), Identifier::MAX);
    }

    #[test]
    #[should_panic(expected = "identifier space exhausted")]
    fn test_create_panics_when_exhausted() {
        let generator = IdGenerator::with_clock(ManualClock::new(0));
        generator.observe(Identifier::MAX);
        generator.create();
    }

    #[test]
    fn test_borrowed_clock() {
        let clock = ManualClock::new(20);
        let generator = IdGenerator::with_clock(&clock);

        assert_eq!(generator.create(), Identifier::new(20, 0));
        clock.advance(1);
        assert_eq!(generator.create(), Identifier::new(21, 0));
    }

    #[test]
    fn test_shared_clock_between_generators() {
        let clock = Arc::new(ManualClock::new(300));
        let first = IdGenerator::with_clock(Arc::clone(&clock));
        let second = IdGenerator::with_clock(Arc::clone(&clock));

        assert_eq!(first.create(), Identifier::new(300, 0));
        clock.set(400);
        assert_eq!(second.create(), Identifier::new(400, 0));
        assert_eq!(first.create(), Identifier::new(400, 0));
    }

    #[test]
    fn test_zero_clock_never_issues_zero() {
        let generator = IdGenerator::with_clock(ManualClock::new(0));
        assert_eq!(generator.create(), Identifier::new(0, 1));
    }

    #[test]
    fn test_global_generator_is_shared() {
        let a = IdGenerator::global().create();
        let b = IdGenerator::global().create();
        assert!(b > a);
        assert!(std::ptr::eq(IdGenerator::global(), IdGenerator::global()));
    }
}
