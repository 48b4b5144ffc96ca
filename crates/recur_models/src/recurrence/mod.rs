//! Recurring time intervals.
//!
//! This module provides:
//! - [`TimeInterval`]: A unit-denominated interval, optionally recurring within a coarser unit
//! - [`Window`]: A concrete half-open `[start, end)` window produced by a time interval
//! - [`Windows`]: The lazy, ascending sequence of windows from a start instant
//! - [`TimeIntervalError`]: Construction errors
//!
//! Occurrences inside a period are numbered from the unit's calendar base:
//! days, weeks, months and years count from 1, seconds, minutes and hours from 0.
//! "Days 1 to 10 of every month" is therefore the first ten days, and
//! "minutes 15 to 45 of every hour" runs from `hh:15:00` up to `hh:46:00`.
//!
//! # Examples
//!
//! ```
//! use recur_core::math::interval::Interval;
//! use recur_core::types::{Instant, Unit};
//! use recur_models::recurrence::TimeInterval;
//!
//! let first_days = TimeInterval::new(Interval::new(1, 10), Unit::Day, Some(Unit::Month)).unwrap();
//! let start = Instant::from_ymd_hms(2000, 1, 5, 12, 0, 0).unwrap();
//!
//! let windows: Vec<_> = first_days.forward(start).take(2).collect();
//! assert_eq!(windows[0].start(), start);
//! assert_eq!(windows[0].end(), Instant::from_ymd_hms(2000, 1, 11, 0, 0, 0).unwrap());
//! assert_eq!(windows[1].start(), Instant::from_ymd_hms(2000, 2, 1, 0, 0, 0).unwrap());
//! ```

mod error;
mod time_interval;
mod windows;

pub use error::TimeIntervalError;
pub use time_interval::TimeInterval;
pub use windows::{Window, Windows};
