//! TimeInterval implementation.

use std::fmt;

use recur_core::calendar::{delta, floor};
use recur_core::math::interval::Interval;
use recur_core::types::{Instant, Unit};

use super::error::TimeIntervalError;
use super::windows::Windows;

/// An interval of calendar units, optionally recurring within a coarser unit.
///
/// Without a recurrence the interval counts units from the epoch
/// (`0001-01-01T00:00:00`). With a recurrence it selects the same slots of
/// every recurrence period: `[15, 45]` minutes of every hour, `[1, 10]` days
/// of every month.
///
/// # Examples
///
/// ```
/// use recur_core::math::interval::Interval;
/// use recur_core::types::{Instant, Unit};
/// use recur_models::recurrence::TimeInterval;
///
/// // The first quarter of every minute
/// let ti = TimeInterval::new(Interval::up_to(15), Unit::Second, Some(Unit::Minute)).unwrap();
/// assert!(ti.contains(Instant::from_ymd_hms(2000, 1, 1, 5, 3, 10).unwrap()));
/// assert!(!ti.contains(Instant::from_ymd_hms(2000, 1, 1, 5, 3, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    interval: Interval<i64>,
    unit: Unit,
    recurrence: Option<Unit>,
}

impl TimeInterval {
    /// Creates a new time interval.
    ///
    /// # Arguments
    ///
    /// * `interval` - Occurrence numbers selected within each period
    /// * `unit` - The unit the occurrence numbers count
    /// * `recurrence` - The period the interval repeats in, or `None` to count from the epoch
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::ImpossibleRecurrence`] if `recurrence` is not
    /// strictly coarser than `unit`.
    pub fn new(
        interval: Interval<i64>,
        unit: Unit,
        recurrence: Option<Unit>,
    ) -> Result<Self, TimeIntervalError> {
        if let Some(recurrence) = recurrence {
            if recurrence <= unit {
                return Err(TimeIntervalError::ImpossibleRecurrence { unit, recurrence });
            }
        }
        Ok(Self {
            interval,
            unit,
            recurrence,
        })
    }

    /// Returns the selected occurrence numbers.
    #[inline]
    pub fn interval(&self) -> Interval<i64> {
        self.interval
    }

    /// Returns the unit of the occurrence numbers.
    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the recurrence unit, if any.
    #[inline]
    pub fn recurrence(&self) -> Option<Unit> {
        self.recurrence
    }

    /// Returns the occurrence number of `instant` within its period.
    ///
    /// Occurrences count from the unit's calendar base, not from a fixed 1:
    /// the first day of a month is day 1, the first minute of an hour is
    /// minute 0. `forward` subtracts the same base, so both agree on which
    /// slots an interval names. Without a recurrence this is the number of
    /// whole units since the epoch, shifted by the base.
    pub fn occurrence(&self, instant: Instant) -> i64 {
        let offset = match self.recurrence {
            None => delta(Instant::epoch(), instant, self.unit),
            Some(recurrence) => delta(floor(instant, recurrence), instant, self.unit),
        };
        offset + self.unit.base()
    }

    /// Returns true if `instant` lies inside the interval.
    pub fn contains(&self, instant: Instant) -> bool {
        self.interval.contains(&self.occurrence(instant))
    }

    /// Returns the windows of this interval at or after `start`, in ascending order.
    ///
    /// A window that is already open at `start` is truncated to begin at `start`.
    pub fn forward(&self, start: Instant) -> Windows {
        Windows::new(*self, start)
    }

    /// Returns true if some period can hold a non-empty window.
    ///
    /// Intervals that are empty, or whose slots all fall before the first
    /// slot or past the last slot a period can hold, never yield a window.
    pub(crate) fn can_produce_window(&self) -> bool {
        let Some((lo, hi)) = self.interval.bounds() else {
            return false;
        };
        let base = self.unit.base();
        if lo > hi || hi < base {
            return false;
        }
        match self.recurrence.and_then(|r| self.unit.max_count_within(r)) {
            Some(slots) => lo.saturating_sub(base) < slots,
            None => true,
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.recurrence {
            Some(recurrence) => write!(f, "{} {}s of every {}", self.interval, self.unit, recurrence),
            None => write!(f, "{} {}s since epoch", self.interval, self.unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Instant {
        Instant::from_ymd_hms(year, month, day, hour, minute, second).unwrap()
    }

    fn recurring(start: i64, stop: i64, unit: Unit, recurrence: Unit) -> TimeInterval {
        TimeInterval::new(Interval::new(start, stop), unit, Some(recurrence)).unwrap()
    }

    #[test]
    fn test_new_rejects_impossible_recurrence() {
        let err = TimeInterval::new(Interval::new(1, 2), Unit::Month, Some(Unit::Week)).unwrap_err();
        assert_eq!(
            err,
            TimeIntervalError::ImpossibleRecurrence {
                unit: Unit::Month,
                recurrence: Unit::Week
            }
        );
        assert!(TimeInterval::new(Interval::new(1, 2), Unit::Day, Some(Unit::Day)).is_err());
    }

    #[test]
    fn test_new_accepts_every_coarser_recurrence() {
        for unit in Unit::ALL {
            for recurrence in Unit::ALL.into_iter().filter(|r| *r > unit) {
                assert!(TimeInterval::new(Interval::new(0, 1), unit, Some(recurrence)).is_ok());
            }
            assert!(TimeInterval::new(Interval::new(0, 1), unit, None).is_ok());
        }
    }

    #[test]
    fn test_contains_seconds_of_minute() {
        let ti = TimeInterval::new(Interval::up_to(15), Unit::Second, Some(Unit::Minute)).unwrap();
        assert!(ti.contains(instant(2000, 1, 1, 5, 3, 0)));
        assert!(ti.contains(instant(2000, 1, 1, 5, 3, 10)));
        assert!(ti.contains(instant(2000, 1, 1, 5, 3, 15)));
        assert!(!ti.contains(instant(2000, 1, 1, 5, 3, 16)));
    }

    #[test]
    fn test_contains_minutes_of_hour_boundaries() {
        let ti = recurring(15, 45, Unit::Minute, Unit::Hour);
        assert!(!ti.contains(instant(2000, 1, 1, 0, 14, 59)));
        assert!(ti.contains(instant(2000, 1, 1, 0, 15, 0)));
        assert!(ti.contains(instant(2000, 1, 1, 0, 45, 59)));
        assert!(!ti.contains(instant(2000, 1, 1, 0, 46, 0)));
    }

    #[test]
    fn test_contains_days_of_month_are_one_based() {
        let ti = recurring(1, 10, Unit::Day, Unit::Month);
        assert!(ti.contains(instant(2000, 2, 1, 0, 0, 0)));
        assert!(ti.contains(instant(2000, 2, 10, 23, 59, 59)));
        assert!(!ti.contains(instant(2000, 2, 11, 0, 0, 0)));
        assert!(!ti.contains(instant(2000, 1, 31, 12, 0, 0)));
    }

    #[test]
    fn test_contains_weekdays() {
        // Monday to Friday; 2000-01-03 is a Monday
        let ti = recurring(1, 5, Unit::Day, Unit::Week);
        assert!(ti.contains(instant(2000, 1, 3, 9, 0, 0)));
        assert!(ti.contains(instant(2000, 1, 7, 23, 0, 0)));
        assert!(!ti.contains(instant(2000, 1, 8, 9, 0, 0)));
        assert!(!ti.contains(instant(2000, 1, 9, 9, 0, 0)));
    }

    #[test]
    fn test_contains_first_week_of_month() {
        // March 2000 starts on a Wednesday; its first week ends on Sunday the 5th
        let ti = recurring(1, 1, Unit::Week, Unit::Month);
        assert!(ti.contains(instant(2000, 3, 1, 0, 0, 0)));
        assert!(ti.contains(instant(2000, 3, 5, 23, 59, 59)));
        assert!(!ti.contains(instant(2000, 3, 6, 0, 0, 0)));
    }

    #[test]
    fn test_contains_without_recurrence() {
        let ti = TimeInterval::new(Interval::new(1, 1), Unit::Year, None).unwrap();
        assert!(ti.contains(Instant::epoch()));
        assert!(ti.contains(instant(1, 12, 31, 23, 59, 59)));
        assert!(!ti.contains(instant(2, 1, 1, 0, 0, 0)));

        let days = TimeInterval::new(Interval::new(0, 9), Unit::Hour, None).unwrap();
        assert!(days.contains(instant(1, 1, 1, 9, 59, 59)));
        assert!(!days.contains(instant(1, 1, 1, 10, 0, 0)));
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let ti = TimeInterval::new(Interval::Empty, Unit::Minute, Some(Unit::Hour)).unwrap();
        assert!(!ti.contains(instant(2000, 1, 1, 0, 0, 0)));
        assert!(!ti.can_produce_window());
    }

    #[test]
    fn test_can_produce_window() {
        assert!(recurring(59, 70, Unit::Minute, Unit::Hour).can_produce_window());
        assert!(!recurring(60, 70, Unit::Minute, Unit::Hour).can_produce_window());
        assert!(recurring(31, 31, Unit::Day, Unit::Month).can_produce_window());
        assert!(!recurring(32, 40, Unit::Day, Unit::Month).can_produce_window());
        assert!(!recurring(-5, 0, Unit::Day, Unit::Month).can_produce_window());
        assert!(recurring(-5, 0, Unit::Hour, Unit::Day).can_produce_window());
        assert!(!recurring(-5, -1, Unit::Hour, Unit::Day).can_produce_window());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            recurring(15, 45, Unit::Minute, Unit::Hour).to_string(),
            "[15, 45] minutes of every hour"
        );
        let anchored = TimeInterval::new(Interval::new(1, 3), Unit::Day, None).unwrap();
        assert_eq!(anchored.to_string(), "[1, 3] days since epoch");
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        let a = recurring(1, 10, Unit::Day, Unit::Month);
        let b = recurring(1, 10, Unit::Day, Unit::Month);
        let c = recurring(1, 10, Unit::Day, Unit::Year);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
