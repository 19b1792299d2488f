//! Buffer codec: the 16-byte little-endian wire and storage form.
//!
//! Byte 0 is the least-significant byte of the low word and byte 15 the
//! most-significant byte of the high word. Every other representation is
//! reconciled against this layout.

use crate::id::error::{IdError, Result};
use crate::id::identifier::Identifier;

/// Length of the encoded form in bytes
pub const ENCODED_LEN: usize = 16;

/// Decodes a little-endian buffer into an [`Identifier`].
///
/// # Arguments
///
/// * `buffer` - The stored bytes, or `None` when the caller has no value
///
/// # Returns
///
/// * `Ok(Identifier)` - The decoded identifier
/// * `Err(IdError::MissingInput)` - If `buffer` is `None`
/// * `Err(IdError::InvalidLength)` - If the buffer is not exactly 16 bytes
pub fn decode(buffer: Option<&[u8]>) -> Result<Identifier> {
    let buffer = buffer.ok_or(IdError::MissingInput)?;
    let bytes: [u8; ENCODED_LEN] = buffer.try_into().map_err(|_| IdError::InvalidLength {
        actual: buffer.len(),
    })?;
    Ok(Identifier::from_le_bytes(bytes))
}

/// Encodes an [`Identifier`] into its little-endian buffer
pub fn encode(id: Identifier) -> [u8; ENCODED_LEN] {
    id.to_le_bytes()
}

impl Identifier {
    /// Builds an identifier from its 16-byte little-endian form
    pub const fn from_le_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        Identifier::from_u128(u128::from_le_bytes(bytes))
    }

    /// Returns the 16-byte little-endian form
    pub const fn to_le_bytes(self) -> [u8; ENCODED_LEN] {
        self.as_u128().to_le_bytes()
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = IdError;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        decode(Some(buffer))
    }
}
