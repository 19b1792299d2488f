//! Monotonic identifier generation.
//!
//! This module contains the [`IdGenerator`] service and the [`Clock`] sources
//! it reads wall-clock time from.

pub mod clock;
pub mod monotonic;

pub use clock::{Clock, ManualClock, SystemClock};
pub use monotonic::IdGenerator;
