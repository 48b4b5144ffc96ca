//! Calendar field constraints.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Legal values of the second field.
pub const SECONDS: RangeInclusive<u32> = 0..=59;
/// Legal values of the minute field.
pub const MINUTES: RangeInclusive<u32> = 0..=59;
/// Legal values of the hour field.
pub const HOURS: RangeInclusive<u32> = 0..=23;
/// Legal values of the day-of-month field.
pub const DAYS: RangeInclusive<u32> = 1..=31;
/// Legal values of the weekday field (0 = Monday).
pub const WEEKDAYS: RangeInclusive<u32> = 0..=6;
/// Legal values of the month field.
pub const MONTHS: RangeInclusive<u32> = 1..=12;
/// Legal values of the year field.
pub const YEARS: RangeInclusive<i32> = 1..=9999;
/// Legal values of the second-of-the-day field.
pub const SECONDS_OF_THE_DAY: RangeInclusive<u32> = 0..=86_399;

/// The admissible values of one calendar field.
///
/// A field is either unrestricted, admitting its whole legal range, or
/// restricted to an explicit set. An explicit set may be empty, in which case
/// the field admits nothing. Explicit values outside the legal range are kept
/// but can never match a real instant.
///
/// # Examples
///
/// ```
/// use recur_models::schedules::{FieldSet, HOURS};
///
/// let hours = FieldSet::only(HOURS, [9, 17]);
/// assert!(hours.contains(9));
/// assert!(!hours.contains(10));
/// assert_eq!(hours.next_at_or_after(10), Some(17));
/// assert_eq!(hours.next_at_or_after(18), None);
///
/// let any = FieldSet::full(HOURS);
/// assert_eq!(any.next_at_or_after(23), Some(23));
/// assert_eq!(any.next_at_or_after(24), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet<T> {
    range: RangeInclusive<T>,
    values: Option<BTreeSet<T>>,
}

impl<T: Ord + Copy> FieldSet<T> {
    /// Creates an unrestricted field over `range`.
    pub fn full(range: RangeInclusive<T>) -> Self {
        Self {
            range,
            values: None,
        }
    }

    /// Creates a field restricted to `values`.
    pub fn only(range: RangeInclusive<T>, values: impl IntoIterator<Item = T>) -> Self {
        Self {
            range,
            values: Some(values.into_iter().collect()),
        }
    }

    /// Returns the legal range of the field.
    #[inline]
    pub fn range(&self) -> &RangeInclusive<T> {
        &self.range
    }

    /// Returns the explicit values, or `None` if the field is unrestricted.
    #[inline]
    pub fn values(&self) -> Option<&BTreeSet<T>> {
        self.values.as_ref()
    }

    /// Returns true if the field admits its whole legal range.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.is_none()
    }

    /// Returns true if no legal value is admitted.
    pub fn is_empty(&self) -> bool {
        match &self.values {
            None => self.range.is_empty(),
            Some(values) => !values.iter().any(|v| self.range.contains(v)),
        }
    }

    /// Returns true if `value` is admitted.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        match &self.values {
            None => self.range.contains(&value),
            Some(values) => values.contains(&value),
        }
    }

    /// Returns the smallest admitted value at or after `value`.
    pub fn next_at_or_after(&self, value: T) -> Option<T> {
        match &self.values {
            None => {
                let candidate = value.max(*self.range.start());
                self.range.contains(&candidate).then_some(candidate)
            }
            Some(values) => values.range(value..).next().copied(),
        }
    }

    /// Returns the largest admitted value.
    pub fn last(&self) -> Option<T> {
        match &self.values {
            None => (!self.range.is_empty()).then(|| *self.range.end()),
            Some(values) => values.last().copied(),
        }
    }
}
