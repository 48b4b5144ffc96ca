//! # recur_models (L2: Recurrence Logic)
//!
//! Recurring time intervals and cron-like calendar schedules.
//!
//! This crate provides:
//! - [`TimeInterval`](recurrence::TimeInterval): an interval of one calendar unit,
//!   optionally recurring within a coarser unit ("minutes 15 to 45 of every hour")
//! - [`Windows`](recurrence::Windows): the lazy, ascending sequence of concrete
//!   `[start, end)` windows of a time interval
//! - [`Schedule`](schedules::Schedule): seven independent calendar fields combined
//!   into a multi-field recurrence
//! - [`Occurrences`](schedules::Occurrences): the lazy, ascending sequence of
//!   whole seconds matching a schedule
//!
//! ## Design Principles
//!
//! - **Value objects**: time intervals and schedules never change after construction
//! - **Pull-based generators**: no work happens until the caller asks for the next item
//! - **Clean termination**: reaching the end of the calendar ends a sequence, it is not an error
//!
//! ## Usage Examples
//!
//! ```rust
//! use recur_core::math::interval::Interval;
//! use recur_core::types::{Instant, Unit};
//! use recur_models::recurrence::TimeInterval;
//! use recur_models::schedules::Schedule;
//!
//! let quarter = TimeInterval::new(Interval::new(15, 45), Unit::Minute, Some(Unit::Hour)).unwrap();
//! assert!(quarter.contains(Instant::from_ymd_hms(2000, 1, 1, 5, 15, 0).unwrap()));
//!
//! let schedule = Schedule::builder().years([2000]).months([3]).hours([0, 20]).build();
//! let first = schedule
//!     .forward(Instant::from_ymd_hms(2000, 1, 1, 5, 0, 0).unwrap())
//!     .next()
//!     .unwrap();
//! assert_eq!(first, Instant::from_ymd_hms(2000, 3, 1, 0, 0, 0).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod recurrence;
pub mod schedules;
