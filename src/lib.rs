//! # keyspace-id - 128-bit primary keys
//!
//! A 128-bit identifier type used as the primary key space of a distributed
//! data store, plus a generator that hands out strictly increasing
//! identifiers to concurrent callers.
//!
//! ## Features
//!
//! - **Exact**: [`Identifier`] is an unsigned 128-bit integer ordered by magnitude
//! - **One wire form**: the 16-byte little-endian buffer in [`id::bytes`]
//! - **Interop**: byte-preserving UUID conversion and range-checked decimal conversion
//! - **Monotonic**: [`IdGenerator`] never repeats or goes backwards, across all threads
//!
//! ## Example
//!
//! ```rust
//! use keyspace_id::{IdGenerator, Identifier};
//! use keyspace_id::id::bytes;
//!
//! let generator = IdGenerator::new();
//! let id = generator.create();
//!
//! let key = bytes::encode(id);
//! assert_eq!(bytes::decode(Some(&key)), Ok(id));
//! assert_eq!(id.to_string().parse::<Identifier>(), Ok(id));
//! ```

pub mod generator;
pub mod id;

// Re-export the main public API
pub use generator::{Clock, IdGenerator, ManualClock, SystemClock};
pub use id::{IdError, Identifier, Result};
