//! Calendar units and their ordering.
//!
//! This module provides:
//! - [`Unit`]: Calendar granularities from second to year, totally ordered by duration
//! - [`ONE_BASED_UNITS`]: Units whose calendar numbering starts at 1
//! - Time constants used by calendar arithmetic
//!
//! # Examples
//!
//! ```
//! use recur_core::types::unit::Unit;
//!
//! assert!(Unit::Minute < Unit::Hour);
//! assert!(Unit::Day.is_one_based());
//! assert!(!Unit::Hour.is_one_based());
//! assert_eq!("weeks".parse::<Unit>().unwrap(), Unit::Week);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CalendarError;

/// Seconds in one minute.
pub const SECONDS_IN_MINUTE: i64 = 60;
/// Minutes in one hour.
pub const MINUTES_IN_HOUR: i64 = 60;
/// Seconds in one hour.
pub const SECONDS_IN_HOUR: i64 = SECONDS_IN_MINUTE * MINUTES_IN_HOUR;
/// Hours in one day.
pub const HOURS_IN_DAY: i64 = 24;
/// Seconds in one day.
pub const SECONDS_IN_DAY: i64 = SECONDS_IN_HOUR * HOURS_IN_DAY;
/// Days in one week.
pub const DAYS_IN_WEEK: i64 = 7;
/// Seconds in one week.
pub const SECONDS_IN_WEEK: i64 = SECONDS_IN_DAY * DAYS_IN_WEEK;
/// Months in one year.
pub const MONTHS_IN_YEAR: i64 = 12;
/// Days in the longest month.
pub const MAX_DAYS_IN_MONTH: i64 = 31;
/// Days in a leap year.
pub const DAYS_IN_LEAP_YEAR: i64 = 366;

/// Units whose natural calendar numbering starts at 1 (day 1, week 1, month 1, year 1).
pub const ONE_BASED_UNITS: &[Unit] = &[Unit::Day, Unit::Week, Unit::Month, Unit::Year];

/// Calendar granularity.
///
/// The derived `Ord` is the unit order: `Second < Minute < Hour < Day < Week
/// < Month < Year`. A unit can only recur within a strictly coarser unit.
///
/// # Examples
///
/// ```
/// use recur_core::types::unit::Unit;
///
/// assert_eq!(Unit::Second.order(), 1);
/// assert_eq!(Unit::Year.order(), 7);
/// assert_eq!(Unit::Month.to_string(), "month");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// One day.
    Day,
    /// One week, starting on Monday.
    Week,
    /// One calendar month.
    Month,
    /// One calendar year.
    Year,
}

impl Unit {
    /// All units, finest first.
    pub const ALL: [Unit; 7] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Returns the position of the unit in the unit order (1 for second, 7 for year).
    #[inline]
    pub fn order(&self) -> u8 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 2,
            Unit::Hour => 3,
            Unit::Day => 4,
            Unit::Week => 5,
            Unit::Month => 6,
            Unit::Year => 7,
        }
    }

    /// Returns true if the unit is numbered from 1 in the calendar.
    #[inline]
    pub fn is_one_based(&self) -> bool {
        ONE_BASED_UNITS.contains(self)
    }

    /// Returns the first number of the unit in calendar numbering (0 or 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::unit::Unit;
    ///
    /// assert_eq!(Unit::Minute.base(), 0);
    /// assert_eq!(Unit::Month.base(), 1);
    /// ```
    #[inline]
    pub fn base(&self) -> i64 {
        if self.is_one_based() {
            1
        } else {
            0
        }
    }

    /// Returns the length of the unit in seconds, or `None` for months and years.
    #[inline]
    pub fn fixed_seconds(&self) -> Option<i64> {
        match self {
            Unit::Second => Some(1),
            Unit::Minute => Some(SECONDS_IN_MINUTE),
            Unit::Hour => Some(SECONDS_IN_HOUR),
            Unit::Day => Some(SECONDS_IN_DAY),
            Unit::Week => Some(SECONDS_IN_WEEK),
            Unit::Month | Unit::Year => None,
        }
    }

    /// Returns the longest possible duration of the unit, in seconds.
    #[inline]
    pub fn max_seconds(&self) -> i64 {
        match self {
            Unit::Month => MAX_DAYS_IN_MONTH * SECONDS_IN_DAY,
            Unit::Year => DAYS_IN_LEAP_YEAR * SECONDS_IN_DAY,
            fixed => fixed.fixed_seconds().unwrap_or(0),
        }
    }

    /// Returns the largest number of distinct `self` units a single `recurrence`
    /// period can touch, or `None` if `self` cannot recur within `recurrence`.
    ///
    /// Weeks are not aligned to months or years, so a month can touch six weeks
    /// and a year fifty-four.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::unit::Unit;
    ///
    /// assert_eq!(Unit::Minute.max_count_within(Unit::Hour), Some(60));
    /// assert_eq!(Unit::Day.max_count_within(Unit::Month), Some(31));
    /// assert_eq!(Unit::Week.max_count_within(Unit::Month), Some(6));
    /// assert_eq!(Unit::Month.max_count_within(Unit::Year), Some(12));
    /// assert_eq!(Unit::Hour.max_count_within(Unit::Minute), None);
    /// ```
    pub fn max_count_within(&self, recurrence: Unit) -> Option<i64> {
        if *self >= recurrence {
            return None;
        }
        match self {
            Unit::Month => Some(MONTHS_IN_YEAR),
            Unit::Week => {
                let days = recurrence.max_seconds() / SECONDS_IN_DAY;
                Some((days + 2 * (DAYS_IN_WEEK - 1)) / DAYS_IN_WEEK)
            }
            fixed => fixed
                .fixed_seconds()
                .map(|seconds| recurrence.max_seconds() / seconds),
        }
    }

    /// Returns the lowercase name of the unit.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Unit {
    type Err = CalendarError;

    /// Parses a unit from its name (case-insensitive).
    ///
    /// Accepts singular, plural and short forms: "second", "seconds", "sec", "s",
    /// "minute", "min", "hour", "h", "day", "d", "week", "w", "month", "mon",
    /// "year", "y".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" | "sec" | "s" => Ok(Unit::Second),
            "minute" | "minutes" | "min" => Ok(Unit::Minute),
            "hour" | "hours" | "h" => Ok(Unit::Hour),
            "day" | "days" | "d" => Ok(Unit::Day),
            "week" | "weeks" | "w" => Ok(Unit::Week),
            "month" | "months" | "mon" => Ok(Unit::Month),
            "year" | "years" | "y" => Ok(Unit::Year),
            _ => Err(CalendarError::UnknownUnit(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Unit;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Unit {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Unit {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Unit::from_str(&s).map_err(de::Error::custom)
        }
    }
}
