//! Multi-field calendar schedules.
//!
//! This module provides:
//! - [`FieldSet`]: The admissible values of one calendar field
//! - [`Schedule`]: Seven independent field constraints combined into one recurrence
//! - [`ScheduleBuilder`]: Builder pattern for constructing schedules
//! - [`Occurrences`]: The lazy, ascending sequence of whole seconds matching a schedule
//! - [`CalendarShape`]: The fourteen possible year layouts, used to stop exhausted searches
//!
//! An instant matches a schedule when its year, month, hour, minute, second and
//! second of the day are all admissible, and its day of the month **or** its
//! weekday is admissible. Unset fields admit every value, so restricting the day
//! of the month alone also requires an empty weekday set.
//!
//! # Examples
//!
//! ```
//! use recur_core::types::Instant;
//! use recur_models::schedules::Schedule;
//!
//! // Midnight on the 13th of every month, or on any Friday
//! let schedule = Schedule::builder()
//!     .days([13])
//!     .weekdays([4])
//!     .hours([0])
//!     .minutes([0])
//!     .seconds([0])
//!     .build();
//!
//! let start = Instant::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap();
//! let next: Vec<_> = schedule.forward(start).take(2).map(|t| t.to_string()).collect();
//! assert_eq!(next, ["2000-01-07T00:00:00", "2000-01-13T00:00:00"]);
//! ```

mod fields;
mod occurrences;
mod schedule;
mod shape;

pub use fields::{
    FieldSet, DAYS, HOURS, MINUTES, MONTHS, SECONDS, SECONDS_OF_THE_DAY, WEEKDAYS, YEARS,
};
pub use occurrences::Occurrences;
pub use schedule::{Schedule, ScheduleBuilder};
pub use shape::CalendarShape;
