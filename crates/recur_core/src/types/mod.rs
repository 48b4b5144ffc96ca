//! Core calendar types.
//!
//! This module provides:
//! - `unit`: Calendar units (second through year), their order and numbering base
//! - `time`: The `Instant` type and its representable range
//! - `error`: Structured error types for calendar construction and arithmetic
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Unit`], [`ONE_BASED_UNITS`] from `unit`
//! - [`Instant`] from `time`
//! - [`CalendarError`] from `error`

pub mod error;
pub mod time;
pub mod unit;

// Re-export commonly used types at module level
pub use error::CalendarError;
pub use time::Instant;
pub use unit::{Unit, ONE_BASED_UNITS};
