//! Error taxonomy for identifier codecs and the generator.

use num_bigint::BigInt;
use thiserror::Error;

/// Convenience alias for results carrying an [`IdError`]
pub type Result<T> = std::result::Result<T, IdError>;

/// Errors reported by the identifier codecs and the generator.
///
/// Variants fall into two classes that callers handle differently: input
/// with the wrong shape ([`IdError::is_shape_error`]) and well-formed values
/// outside the 128-bit domain ([`IdError::is_domain_error`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// No buffer was supplied
    #[error("identifier buffer is missing")]
    MissingInput,

    /// The buffer is not exactly 16 bytes long
    #[error("identifier buffer must be 16 bytes, got {actual}")]
    InvalidLength {
        /// Length of the rejected buffer
        actual: usize,
    },

    /// Text could not be parsed as a decimal integer
    #[error("invalid decimal identifier: {0:?}")]
    InvalidDecimal(String),

    /// The decimal value is below zero
    #[error("identifier cannot be negative: {0}")]
    NegativeValue(BigInt),

    /// The decimal value exceeds 2^128 - 1
    #[error("identifier exceeds 2^128 - 1: {0}")]
    OutOfRange(BigInt),

    /// The generator has already issued the largest identifier
    #[error("identifier space exhausted")]
    Exhausted,
}

impl IdError {
    /// True when the input had the wrong shape (absent, wrong length, not a number)
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            IdError::MissingInput | IdError::InvalidLength { .. } | IdError::InvalidDecimal(_)
        )
    }

    /// True when the input was a number outside [0, 2^128 - 1]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, IdError::NegativeValue(_) | IdError::OutOfRange(_))
    }
}
