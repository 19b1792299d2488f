//! Structured-ID codec: interop with 128-bit UUIDs.
//!
//! Externally sourced identifiers arrive as [`Uuid`]s whose canonical byte
//! sequence is big-endian. The codec copies those 16 bytes as-is into the
//! identifier's little-endian buffer and back again. It never reinterprets
//! the UUID's fields, so `uuid.as_bytes() == id.to_le_bytes()` always holds.
//!
//! The mixed-endian GUID layout (`Uuid::from_bytes_le`) reorders the first
//! three fields and must not be used with identifiers.

use uuid::Uuid;

use crate::id::identifier::Identifier;

/// Converts a UUID into an [`Identifier`] by copying its raw bytes
pub fn decode(uuid: Uuid) -> Identifier {
    Identifier::from_le_bytes(uuid.into_bytes())
}

/// Converts an [`Identifier`] into a UUID carrying the same raw bytes
pub fn encode(id: Identifier) -> Uuid {
    Uuid::from_bytes(id.to_le_bytes())
}

impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        decode(uuid)
    }
}

impl From<Identifier> for Uuid {
    fn from(id: Identifier) -> Self {
        encode(id)
    }
}
