//! Identifier value type and its codecs.
//!
//! The [`Identifier`] is an exact unsigned 128-bit integer. Each submodule
//! converts it to one external representation:
//!
//! - [`bytes`] - the 16-byte little-endian wire and storage buffer
//! - [`structured`] - UUIDs, copying raw bytes as-is
//! - [`decimal`] - arbitrary-precision integers and decimal text

pub mod bytes;
pub mod decimal;
pub mod error;
pub mod identifier;
mod serialize;
pub mod structured;

pub use error::{IdError, Result};
pub use identifier::Identifier;
