//! Decimal codec: interop with arbitrary-precision integers.
//!
//! Text protocols and humans exchange identifiers as decimal integers. Any
//! [`BigInt`] in [0, 2^128 - 1] maps to exactly one [`Identifier`]; values
//! outside that range are rejected before conversion.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;

use crate::id::error::{IdError, Result};
use crate::id::identifier::Identifier;

/// Converts a decimal integer into an [`Identifier`].
///
/// # Returns
///
/// * `Ok(Identifier)` - The identifier with the same magnitude
/// * `Err(IdError::NegativeValue)` - If `value < 0`
/// * `Err(IdError::OutOfRange)` - If `value > 2^128 - 1`
pub fn decode(value: &BigInt) -> Result<Identifier> {
    if value.sign() == Sign::Minus {
        return Err(IdError::NegativeValue(value.clone()));
    }
    value
        .to_u128()
        .map(Identifier::from_u128)
        .ok_or_else(|| IdError::OutOfRange(value.clone()))
}

/// Converts an unsigned decimal integer into an [`Identifier`].
///
/// Only the upper bound can fail, with [`IdError::OutOfRange`].
pub fn decode_unsigned(value: &BigUint) -> Result<Identifier> {
    value
        .to_u128()
        .map(Identifier::from_u128)
        .ok_or_else(|| IdError::OutOfRange(BigInt::from(value.clone())))
}

/// Converts an [`Identifier`] into a decimal integer of equal magnitude
pub fn encode(id: Identifier) -> BigInt {
    BigInt::from(id.as_u128())
}

impl TryFrom<&BigInt> for Identifier {
    type Error = IdError;

    fn try_from(value: &BigInt) -> Result<Self> {
        decode(value)
    }
}

impl TryFrom<BigInt> for Identifier {
    type Error = IdError;

    fn try_from(value: BigInt) -> Result<Self> {
        decode(&value)
    }
}

impl TryFrom<&BigUint> for Identifier {
    type Error = IdError;

    fn try_from(value: &BigUint) -> Result<Self> {
        decode_unsigned(value)
    }
}

impl From<Identifier> for BigInt {
    fn from(id: Identifier) -> Self {
        encode(id)
    }
}

impl From<Identifier> for BigUint {
    fn from(id: Identifier) -> Self {
        BigUint::from(id.as_u128())
    }
}

/// Renders the decimal magnitude
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_u128(), f)
    }
}

/// Parses decimal text, applying the same domain checks as [`decode`]
impl FromStr for Identifier {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        // BigInt alone would accept `_` separators.
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidDecimal(s.to_string()));
        }
        let value = BigInt::from_str(s).map_err(|_| IdError::InvalidDecimal(s.to_string()))?;
        decode(&value)
    }
}
