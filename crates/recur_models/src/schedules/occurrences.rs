//! Occurrence generation for schedules.

use std::iter::FusedIterator;

use recur_core::calendar::{add_delta, floor};
use recur_core::types::{CalendarError, Instant, Unit};
use tracing::debug;

use super::fields::{FieldSet, HOURS, MINUTES, MONTHS, SECONDS, SECONDS_OF_THE_DAY};
use super::schedule::Schedule;
use super::shape::{CalendarShape, ShapeSet};

/// Outcome of examining one cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The cursor matches the schedule.
    Match,
    /// No instant before the target can match.
    Jump(Instant),
    /// No instant at or after the cursor can match.
    Exhausted,
}

/// Lazy, ascending sequence of the whole seconds matching a [`Schedule`].
///
/// Created by [`Schedule::forward`]. The scan jumps over whole years, months,
/// days, hours and minutes that cannot match, so sparse schedules stay cheap.
/// The sequence ends at the last configured year, at the end of the
/// representable calendar, or once every one of the fourteen
/// [`CalendarShape`]s has been scanned in a configured year without a single
/// match.
///
/// # Examples
///
/// ```
/// use recur_core::types::Instant;
/// use recur_models::schedules::Schedule;
///
/// let schedule = Schedule::builder().days([31]).months([2]).weekdays([]).build();
/// let start = Instant::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(schedule.forward(start).next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    schedule: &'a Schedule,
    cursor: Option<Instant>,
    /// Year of the last examined cursor.
    year: i32,
    /// Whether the scan of `year` began at its first second.
    year_from_start: bool,
    matched: bool,
    shapes: ShapeSet,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(schedule: &'a Schedule, start: Instant) -> Self {
        let cursor = match start.ceil_to_second() {
            Ok(_) if schedule.is_unsatisfiable() => {
                debug!("schedule has a field that admits no value");
                None
            }
            Ok(cursor) => Some(cursor),
            Err(err) => {
                debug!(error = %err, "schedule scan starts past the end of the calendar");
                None
            }
        };
        Self {
            schedule,
            cursor,
            year: cursor.map_or(start.year(), |t| t.year()),
            year_from_start: cursor.is_some_and(|t| floor(t, Unit::Year) == t),
            matched: false,
            shapes: ShapeSet::default(),
        }
    }

    /// Returns the schedule being scanned.
    #[inline]
    pub fn schedule(&self) -> &'a Schedule {
        self.schedule
    }

    /// Records the shape of each configured year scanned in full.
    ///
    /// Returns false once every shape has been scanned without a match.
    fn enter(&mut self, cursor: Instant) -> bool {
        let year = cursor.year();
        if year == self.year {
            return true;
        }

        if self.year_from_start && self.schedule.years().contains(self.year) {
            if let Some(shape) = CalendarShape::of_year(self.year) {
                self.shapes.insert(shape);
            }
        }
        self.year = year;
        self.year_from_start = floor(cursor, Unit::Year) == cursor;

        if !self.matched && self.shapes.is_complete() {
            debug!(
                shapes = self.shapes.len(),
                last_year = year - 1,
                "schedule matched nothing in any calendar shape"
            );
            return false;
        }
        true
    }

    fn step(&self, t: Instant) -> Result<Step, CalendarError> {
        let schedule = self.schedule;

        let year = t.year();
        if !schedule.years().contains(year) {
            let next_year = year.checked_add(1).and_then(|y| schedule.years().next_at_or_after(y));
            return match next_year {
                Some(next) => Ok(Step::Jump(add_delta(
                    floor(t, Unit::Year),
                    i64::from(next) - i64::from(year),
                    Unit::Year,
                )?)),
                None => Ok(Step::Exhausted),
            };
        }

        let month = t.month();
        if !schedule.months().contains(month) {
            let target = match next_within(schedule.months(), month + 1, *MONTHS.end()) {
                Some(next) => {
                    add_delta(floor(t, Unit::Month), i64::from(next - month), Unit::Month)?
                }
                None => add_delta(floor(t, Unit::Year), 1, Unit::Year)?,
            };
            return Ok(Step::Jump(target));
        }

        if !schedule.admits_day(t) {
            return Ok(Step::Jump(add_delta(floor(t, Unit::Day), 1, Unit::Day)?));
        }

        let hour = t.hour();
        if !schedule.hours().contains(hour) {
            return jump_within(schedule.hours(), hour, *HOURS.end(), t, Unit::Hour, Unit::Day);
        }

        let minute = t.minute();
        if !schedule.minutes().contains(minute) {
            return jump_within(
                schedule.minutes(),
                minute,
                *MINUTES.end(),
                t,
                Unit::Minute,
                Unit::Hour,
            );
        }

        let second = t.second();
        if !schedule.seconds().contains(second) {
            return jump_within(
                schedule.seconds(),
                second,
                *SECONDS.end(),
                t,
                Unit::Second,
                Unit::Minute,
            );
        }

        let second_of_day = t.second_of_day();
        if !schedule.seconds_of_the_day().contains(second_of_day) {
            let day = floor(t, Unit::Day);
            let next = next_within(
                schedule.seconds_of_the_day(),
                second_of_day + 1,
                *SECONDS_OF_THE_DAY.end(),
            );
            return Ok(Step::Jump(match next {
                Some(next) => add_delta(day, i64::from(next), Unit::Second)?,
                None => add_delta(day, 1, Unit::Day)?,
            }));
        }

        Ok(Step::Match)
    }
}

/// Returns the smallest admitted value in `from..=max`.
fn next_within(field: &FieldSet<u32>, from: u32, max: u32) -> Option<u32> {
    field.next_at_or_after(from).filter(|next| *next <= max)
}

/// Jumps to the next admitted `unit` value inside the enclosing `parent`,
/// or to the start of the following `parent`.
fn jump_within(
    field: &FieldSet<u32>,
    current: u32,
    max: u32,
    t: Instant,
    unit: Unit,
    parent: Unit,
) -> Result<Step, CalendarError> {
    let target = match next_within(field, current + 1, max) {
        Some(next) => add_delta(floor(t, unit), i64::from(next - current), unit)?,
        None => add_delta(floor(t, parent), 1, parent)?,
    };
    Ok(Step::Jump(target))
}

impl Iterator for Occurrences<'_> {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        loop {
            let cursor = self.cursor?;
            if !self.enter(cursor) {
                self.cursor = None;
                return None;
            }

            match self.step(cursor) {
                Ok(Step::Match) => {
                    self.matched = true;
                    self.cursor = add_delta(cursor, 1, Unit::Second).ok();
                    return Some(cursor);
                }
                Ok(Step::Jump(next)) => self.cursor = Some(next),
                Ok(Step::Exhausted) => {
                    debug!(year = cursor.year(), "no configured year remains");
                    self.cursor = None;
                    return None;
                }
                Err(err) => {
                    debug!(error = %err, "schedule scan reached the end of the calendar");
                    self.cursor = None;
                    return None;
                }
            }
        }
    }
}

impl FusedIterator for Occurrences<'_> {}
