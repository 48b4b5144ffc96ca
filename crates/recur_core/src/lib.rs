//! # recur_core: Calendar Foundation for Recurring Occurrences
//!
//! ## Layer 1 (Foundation) Role
//!
//! recur_core is the bottom layer of the workspace, providing:
//! - Closed interval algebra with an explicit empty variant (`math::interval`)
//! - Calendar units and their ordering (`types::unit`)
//! - The `Instant` type and its representable range (`types::time`)
//! - Calendar primitives: floor, delta and carry-correct addition (`calendar`)
//! - Error types: `CalendarError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Generic zero for single-bound intervals
//! - chrono: Civil date and time arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use recur_core::calendar::{add_delta, delta, floor};
//! use recur_core::math::interval::Interval;
//! use recur_core::types::{Instant, Unit};
//!
//! // Interval algebra
//! let a = Interval::new(1, 10);
//! assert_eq!(a.overlap(&Interval::new(5, 15)), Interval::new(5, 10));
//! assert!(a.combine(&Interval::new(15, 25)).is_empty());
//!
//! // Calendar arithmetic
//! let t = Instant::from_ymd_hms(2000, 1, 31, 12, 30, 0).unwrap();
//! assert_eq!(floor(t, Unit::Month), Instant::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap());
//! assert_eq!(
//!     add_delta(t, 1, Unit::Month).unwrap(),
//!     Instant::from_ymd_hms(2000, 2, 29, 12, 30, 0).unwrap()
//! );
//! assert_eq!(delta(Instant::epoch(), t, Unit::Year), 1999);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Interval`, `Unit` and `Instant`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod math;
pub mod types;
