//! Schedule and ScheduleBuilder implementation.

use recur_core::types::Instant;

use super::fields::{
    FieldSet, DAYS, HOURS, MINUTES, MONTHS, SECONDS, SECONDS_OF_THE_DAY, WEEKDAYS, YEARS,
};
use super::occurrences::Occurrences;

/// A cron-like recurrence built from seven independent calendar fields.
///
/// [`Schedule::default`] admits every second. Fields left unset on the
/// builder admit their full range.
///
/// # Examples
///
/// ```
/// use recur_core::types::Instant;
/// use recur_models::schedules::Schedule;
///
/// let schedule = Schedule::builder().years([2000]).months([3]).hours([0, 20]).build();
///
/// assert!(schedule.contains(Instant::from_ymd_hms(2000, 3, 15, 20, 30, 0).unwrap()));
/// assert!(!schedule.contains(Instant::from_ymd_hms(2000, 3, 15, 19, 30, 0).unwrap()));
/// assert!(!schedule.contains(Instant::from_ymd_hms(2001, 3, 15, 20, 30, 0).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    seconds: FieldSet<u32>,
    minutes: FieldSet<u32>,
    hours: FieldSet<u32>,
    days: FieldSet<u32>,
    weekdays: FieldSet<u32>,
    months: FieldSet<u32>,
    years: FieldSet<i32>,
    seconds_of_the_day: FieldSet<u32>,
}

impl Default for Schedule {
    fn default() -> Self {
        ScheduleBuilder::new().build()
    }
}

impl Schedule {
    /// Returns a builder with every field unrestricted.
    #[inline]
    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder::new()
    }

    /// Returns the second field.
    #[inline]
    pub fn seconds(&self) -> &FieldSet<u32> {
        &self.seconds
    }

    /// Returns the minute field.
    #[inline]
    pub fn minutes(&self) -> &FieldSet<u32> {
        &self.minutes
    }

    /// Returns the hour field.
    #[inline]
    pub fn hours(&self) -> &FieldSet<u32> {
        &self.hours
    }

    /// Returns the day-of-month field.
    #[inline]
    pub fn days(&self) -> &FieldSet<u32> {
        &self.days
    }

    /// Returns the weekday field (0 = Monday).
    #[inline]
    pub fn weekdays(&self) -> &FieldSet<u32> {
        &self.weekdays
    }

    /// Returns the month field.
    #[inline]
    pub fn months(&self) -> &FieldSet<u32> {
        &self.months
    }

    /// Returns the year field.
    #[inline]
    pub fn years(&self) -> &FieldSet<i32> {
        &self.years
    }

    /// Returns the second-of-the-day field.
    #[inline]
    pub fn seconds_of_the_day(&self) -> &FieldSet<u32> {
        &self.seconds_of_the_day
    }

    /// Returns true if the day of the month or the weekday of `instant` is admitted.
    #[inline]
    pub(crate) fn admits_day(&self, instant: Instant) -> bool {
        self.days.contains(instant.day()) || self.weekdays.contains(instant.weekday())
    }

    /// Returns true if some field admits no legal value, so nothing can match.
    ///
    /// The day of the month and the weekday only rule out every day together.
    pub fn is_unsatisfiable(&self) -> bool {
        self.seconds.is_empty()
            || self.minutes.is_empty()
            || self.hours.is_empty()
            || self.months.is_empty()
            || self.years.is_empty()
            || self.seconds_of_the_day.is_empty()
            || (self.days.is_empty() && self.weekdays.is_empty())
    }

    /// Returns true if `instant` matches every field of the schedule.
    ///
    /// Sub-second precision is ignored.
    pub fn contains(&self, instant: Instant) -> bool {
        self.years.contains(instant.year())
            && self.months.contains(instant.month())
            && self.admits_day(instant)
            && self.hours.contains(instant.hour())
            && self.minutes.contains(instant.minute())
            && self.seconds.contains(instant.second())
            && self.seconds_of_the_day.contains(instant.second_of_day())
    }

    /// Returns the matching whole seconds at or after `start`, in ascending order.
    ///
    /// A `start` with a fractional second is rounded up to the next whole second.
    pub fn forward(&self, start: Instant) -> Occurrences<'_> {
        Occurrences::new(self, start)
    }
}

/// Builder for [`Schedule`].
///
/// Every setter replaces the field's admissible values. Passing an empty
/// collection makes the field admit nothing.
///
/// # Examples
///
/// ```
/// use recur_models::schedules::ScheduleBuilder;
///
/// // The last day of every month that has one
/// let schedule = ScheduleBuilder::new().days([31]).weekdays([]).build();
/// assert!(schedule.weekdays().is_empty());
/// assert!(schedule.hours().is_full());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    seconds: Option<Vec<u32>>,
    minutes: Option<Vec<u32>>,
    hours: Option<Vec<u32>>,
    days: Option<Vec<u32>>,
    weekdays: Option<Vec<u32>>,
    months: Option<Vec<u32>>,
    years: Option<Vec<i32>>,
    seconds_of_the_day: Option<Vec<u32>>,
}

impl ScheduleBuilder {
    /// Creates a new builder with every field unrestricted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the admissible seconds (0-59).
    pub fn seconds(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.seconds = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible minutes (0-59).
    pub fn minutes(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.minutes = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible hours (0-23).
    pub fn hours(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.hours = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible days of the month (1-31).
    pub fn days(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.days = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible weekdays (0 = Monday, 6 = Sunday).
    pub fn weekdays(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.weekdays = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible months (1-12).
    pub fn months(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.months = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible years (1-9999).
    pub fn years(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.years = Some(values.into_iter().collect());
        self
    }

    /// Sets the admissible seconds of the day (0-86399).
    pub fn seconds_of_the_day(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.seconds_of_the_day = Some(values.into_iter().collect());
        self
    }

    /// Builds the schedule.
    ///
    /// Nonsensical combinations are accepted; they simply never match.
    pub fn build(self) -> Schedule {
        Schedule {
            seconds: field(SECONDS, self.seconds),
            minutes: field(MINUTES, self.minutes),
            hours: field(HOURS, self.hours),
            days: field(DAYS, self.days),
            weekdays: field(WEEKDAYS, self.weekdays),
            months: field(MONTHS, self.months),
            years: field(YEARS, self.years),
            seconds_of_the_day: field(SECONDS_OF_THE_DAY, self.seconds_of_the_day),
        }
    }
}

fn field<T: Ord + Copy>(range: std::ops::RangeInclusive<T>, values: Option<Vec<T>>) -> FieldSet<T> {
    match values {
        Some(values) => FieldSet::only(range, values),
        None => FieldSet::full(range),
    }
}
