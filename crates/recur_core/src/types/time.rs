//! The civil-time instant used throughout the workspace.
//!
//! This module provides:
//! - [`Instant`]: Type-safe wrapper around `chrono::NaiveDateTime`
//! - The representable range, from the epoch anchor `0001-01-01T00:00:00`
//!   to `9999-12-31T23:59:59.999999`
//!
//! # Examples
//!
//! ```
//! use recur_core::types::time::Instant;
//!
//! let t = Instant::from_ymd_hms(2000, 1, 1, 5, 3, 10).unwrap();
//! assert_eq!(t.to_string(), "2000-01-01T05:03:10");
//! assert_eq!(t.weekday(), 5); // Saturday
//!
//! let parsed: Instant = "2000-01-01T05:03:10".parse().unwrap();
//! assert_eq!(t, parsed);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::fmt;
use std::str::FromStr;

use super::error::CalendarError;
use super::unit::{SECONDS_IN_HOUR, SECONDS_IN_MINUTE};

const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const PARSE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// An absolute point in civil time, without time zone.
///
/// Instants are totally ordered and restricted to years 1 through 9999.
/// Construction outside that range fails with [`CalendarError::OutOfRange`].
///
/// # Examples
///
/// ```
/// use recur_core::types::time::Instant;
///
/// let t = Instant::from_ymd_hms(2024, 2, 29, 23, 59, 59).unwrap();
/// assert_eq!(t.year(), 2024);
/// assert_eq!(t.month(), 2);
/// assert_eq!(t.day(), 29);
/// assert_eq!(t.second_of_day(), 86_399);
///
/// assert!(Instant::from_ymd_hms(2023, 2, 29, 0, 0, 0).is_err());
/// assert!(Instant::epoch() < t);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NaiveDateTime", into = "NaiveDateTime"))]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Returns the epoch anchor, "the beginning of time": `0001-01-01T00:00:00`.
    ///
    /// The epoch is a Monday, so it lies on a boundary of every [`Unit`](super::Unit).
    pub fn epoch() -> Self {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Instant)
            .expect("0001-01-01T00:00:00 is a valid civil date")
    }

    /// Returns the last representable instant: `9999-12-31T23:59:59.999999`.
    pub fn max_value() -> Self {
        NaiveDate::from_ymd_opt(9999, 12, 31)
            .and_then(|date| date.and_hms_micro_opt(23, 59, 59, 999_999))
            .map(Instant)
            .expect("9999-12-31T23:59:59.999999 is a valid civil date")
    }

    /// Creates an instant from civil date and time components.
    ///
    /// # Returns
    /// `Err(CalendarError::InvalidInstant)` for impossible components,
    /// `Err(CalendarError::OutOfRange)` for years outside 1..=9999.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or(CalendarError::InvalidInstant {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })?;
        Self::from_naive(naive)
    }

    /// Wraps a `NaiveDateTime`, checking the representable range.
    pub fn from_naive(naive: NaiveDateTime) -> Result<Self, CalendarError> {
        let instant = Instant(naive);
        if instant < Self::epoch() || instant > Self::max_value() {
            return Err(CalendarError::OutOfRange(naive.to_string()));
        }
        Ok(instant)
    }

    /// Wraps a `NaiveDateTime` already known to lie in the representable range.
    #[inline]
    pub(crate) fn new_unchecked(naive: NaiveDateTime) -> Self {
        Instant(naive)
    }

    /// Parses an instant from an ISO 8601 string.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM:SS[.ffffff]`, the same with a space instead
    /// of `T`, or a bare `YYYY-MM-DD` (midnight).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Instant;
    ///
    /// let t = Instant::parse("2000-03-01 00:00:01").unwrap();
    /// assert_eq!(t.second(), 1);
    ///
    /// let midnight = Instant::parse("2000-03-01").unwrap();
    /// assert_eq!(midnight.second_of_day(), 0);
    ///
    /// assert!(Instant::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, CalendarError> {
        let s = s.trim();
        for format in PARSE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Self::from_naive(naive);
            }
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| CalendarError::ParseError(format!("{}: {}", s, e)))?;
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CalendarError::ParseError(s.to_string()))?;
        Self::from_naive(naive)
    }

    /// Returns the underlying NaiveDateTime.
    #[inline]
    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second component (0-59).
    #[inline]
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the sub-second part in microseconds.
    #[inline]
    pub fn microsecond(&self) -> u32 {
        self.0.nanosecond() / 1_000
    }

    /// Returns the day of week, 0 for Monday through 6 for Sunday.
    #[inline]
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// Returns the second within the day: `hour * 3600 + minute * 60 + second`.
    #[inline]
    pub fn second_of_day(&self) -> u32 {
        self.hour() * SECONDS_IN_HOUR as u32 + self.minute() * SECONDS_IN_MINUTE as u32 + self.second()
    }

    /// Returns true if the instant falls in a leap year.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        let year = self.year();
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Rounds up to the next whole second; whole seconds are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Instant;
    ///
    /// let t = Instant::parse("2000-01-01T00:00:00.25").unwrap();
    /// assert_eq!(t.ceil_to_second().unwrap(), Instant::parse("2000-01-01T00:00:01").unwrap());
    /// ```
    pub fn ceil_to_second(self) -> Result<Self, CalendarError> {
        if self.0.nanosecond() == 0 {
            return Ok(self);
        }
        let floored = self.0.with_nanosecond(0).unwrap_or(self.0);
        floored
            .checked_add_signed(TimeDelta::seconds(1))
            .ok_or(CalendarError::Overflow {
                amount: 1,
                unit: super::Unit::Second,
            })
            .and_then(Self::from_naive)
    }
}

impl TryFrom<NaiveDateTime> for Instant {
    type Error = CalendarError;

    fn try_from(naive: NaiveDateTime) -> Result<Self, Self::Error> {
        Instant::from_naive(naive)
    }
}

impl From<Instant> for NaiveDateTime {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl FromStr for Instant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, CalendarError> {
        Instant::parse(s)
    }
}

impl fmt::Display for Instant {
    /// Formats the instant as ISO 8601 (`YYYY-MM-DDTHH:MM:SS[.ffffff]`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_monday_midnight() {
        let epoch = Instant::epoch();
        assert_eq!(epoch.year(), 1);
        assert_eq!(epoch.month(), 1);
        assert_eq!(epoch.day(), 1);
        assert_eq!(epoch.second_of_day(), 0);
        assert_eq!(epoch.weekday(), 0);
    }

    #[test]
    fn test_max_value() {
        let max = Instant::max_value();
        assert_eq!(max.year(), 9999);
        assert_eq!(max.second_of_day(), 86_399);
        assert_eq!(max.microsecond(), 999_999);
    }

    #[test]
    fn test_from_ymd_hms_invalid() {
        assert!(matches!(
            Instant::from_ymd_hms(2023, 2, 29, 0, 0, 0),
            Err(CalendarError::InvalidInstant { .. })
        ));
        assert!(matches!(
            Instant::from_ymd_hms(2023, 1, 1, 24, 0, 0),
            Err(CalendarError::InvalidInstant { .. })
        ));
    }

    #[test]
    fn test_from_ymd_hms_out_of_range() {
        assert!(matches!(
            Instant::from_ymd_hms(10_000, 1, 1, 0, 0, 0),
            Err(CalendarError::OutOfRange(_))
        ));
        assert!(matches!(
            Instant::from_ymd_hms(0, 12, 31, 23, 59, 59),
            Err(CalendarError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_weekday_monday_based() {
        // 2024-01-01 was a Monday, 2024-01-07 a Sunday
        assert_eq!(Instant::from_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap().weekday(), 0);
        assert_eq!(Instant::from_ymd_hms(2024, 1, 7, 0, 0, 0).unwrap().weekday(), 6);
    }

    #[test]
    fn test_parse_formats() {
        let expected = Instant::from_ymd_hms(2000, 3, 1, 12, 30, 45).unwrap();
        assert_eq!(Instant::parse("2000-03-01T12:30:45").unwrap(), expected);
        assert_eq!(Instant::parse("2000-03-01 12:30:45").unwrap(), expected);
        assert_eq!(Instant::parse(" 2000-03-01T12:30:45 ").unwrap(), expected);

        let fractional = Instant::parse("2000-03-01T12:30:45.5").unwrap();
        assert_eq!(fractional.microsecond(), 500_000);
        assert!(fractional > expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Instant::parse("2000-13-01"),
            Err(CalendarError::ParseError(_))
        ));
        assert!(Instant::parse("").is_err());
    }

    #[test]
    fn test_display() {
        let t = Instant::from_ymd_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(t.to_string(), "0001-01-01T00:00:00");
        let fractional = Instant::parse("2000-01-01T00:00:00.25").unwrap();
        assert!(fractional.to_string().starts_with("2000-01-01T00:00:00.25"));
    }

    #[test]
    fn test_ceil_to_second() {
        let whole = Instant::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(whole.ceil_to_second().unwrap(), whole);
        assert!(Instant::max_value().ceil_to_second().is_err());
    }

    #[test]
    fn test_second_of_day() {
        let t = Instant::from_ymd_hms(2000, 1, 1, 5, 3, 10).unwrap();
        assert_eq!(t.second_of_day(), 5 * 3600 + 3 * 60 + 10);
    }

    #[test]
    fn test_leap_year() {
        assert!(Instant::from_ymd_hms(2000, 6, 1, 0, 0, 0).unwrap().is_leap_year());
        assert!(!Instant::from_ymd_hms(1900, 6, 1, 0, 0, 0).unwrap().is_leap_year());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_out_of_range() {
        let t = Instant::from_ymd_hms(2000, 1, 1, 5, 3, 10).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<Instant>(&json).unwrap(), t);
        assert!(serde_json::from_str::<Instant>("\"0000-06-01T00:00:00\"").is_err());
    }
}
