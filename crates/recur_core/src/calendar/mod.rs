//! Calendar primitives: flooring, unit deltas and carry-correct addition.
//!
//! This module provides:
//! - [`floor`]: The latest unit boundary at or before an instant
//! - [`delta`]: The signed number of unit boundaries between two instants
//! - [`add_delta`]: Shifting an instant by whole units with civil-calendar carry
//!
//! Weeks start on Monday. Month and year arithmetic clamps the day of month
//! (January 31st plus one month is the last day of February).
//!
//! # Examples
//!
//! ```
//! use recur_core::calendar::{add_delta, delta, floor};
//! use recur_core::types::{Instant, Unit};
//!
//! let t = Instant::from_ymd_hms(2000, 1, 1, 5, 3, 10).unwrap();
//! let hour = floor(t, Unit::Hour);
//! assert_eq!(hour, Instant::from_ymd_hms(2000, 1, 1, 5, 0, 0).unwrap());
//! assert_eq!(delta(hour, t, Unit::Minute), 3);
//! assert_eq!(add_delta(hour, -6, Unit::Hour).unwrap().day(), 31);
//! ```

mod arithmetic;

pub use arithmetic::{add_delta, delta, floor};
