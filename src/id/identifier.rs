//! The 128-bit identifier value type.
//!
//! This module contains the Identifier struct, an exact unsigned 128-bit
//! integer stored as two 64-bit words. Identifiers are the primary keys of the
//! store, so their ordering is numeric magnitude and nothing else.

/// An exact unsigned 128-bit integer used as a primary key.
///
/// The value is `high * 2^64 + low`. Identifiers are immutable once
/// constructed and are created from two words, from a `u128`, by one of the
/// codecs in [`crate::id`], or by the [`IdGenerator`](crate::IdGenerator).
///
/// # Ordering
///
/// Identifiers are ordered by numeric magnitude: first by `high`, then by
/// `low`. This is not the byte-lexicographic order of the little-endian wire
/// buffer, so storage engines must compare decoded values, not raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identifier {
    // Field order drives the derived `Ord`.
    high: u64,
    low: u64,
}

impl Identifier {
    /// The zero identifier
    pub const ZERO: Identifier = Identifier { high: 0, low: 0 };

    /// The largest identifier, 2^128 - 1 (all bits set)
    pub const MAX: Identifier = Identifier {
        high: u64::MAX,
        low: u64::MAX,
    };

    /// Creates an identifier from its high and low 64-bit words
    pub const fn new(high: u64, low: u64) -> Self {
        Identifier { high, low }
    }

    /// Creates an identifier from a `u128` magnitude
    pub const fn from_u128(value: u128) -> Self {
        Identifier {
            high: (value >> 64) as u64,
            low: value as u64,
        }
    }

    /// Returns the magnitude as a `u128`
    pub const fn as_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    /// The most-significant 64 bits
    pub const fn high(self) -> u64 {
        self.high
    }

    /// The least-significant 64 bits
    pub const fn low(self) -> u64 {
        self.low
    }

    /// Returns the next identifier, or `None` if this is [`Identifier::MAX`].
    ///
    /// A carry out of the low word moves into the high word.
    pub const fn checked_next(self) -> Option<Self> {
        match self.low.checked_add(1) {
            Some(low) => Some(Identifier {
                high: self.high,
                low,
            }),
            None => match self.high.checked_add(1) {
                Some(high) => Some(Identifier { high, low: 0 }),
                None => None,
            },
        }
    }
}

impl From<u128> for Identifier {
    fn from(value: u128) -> Self {
        Identifier::from_u128(value)
    }
}

impl From<Identifier> for u128 {
    fn from(id: Identifier) -> Self {
        id.as_u128()
    }
}
