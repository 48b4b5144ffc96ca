//! Floor, delta and add implementations over `Instant`.

use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta, Timelike};

use crate::types::unit::MONTHS_IN_YEAR;
use crate::types::{CalendarError, Instant, Unit};

/// Returns the latest instant at or before `instant` that lies on a `unit` boundary.
///
/// # Examples
///
/// ```
/// use recur_core::calendar::floor;
/// use recur_core::types::{Instant, Unit};
///
/// // 2000-01-05 is a Wednesday
/// let t = Instant::from_ymd_hms(2000, 1, 5, 13, 45, 30).unwrap();
/// assert_eq!(floor(t, Unit::Week), Instant::from_ymd_hms(2000, 1, 3, 0, 0, 0).unwrap());
/// assert_eq!(floor(t, Unit::Year), Instant::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap());
/// ```
pub fn floor(instant: Instant, unit: Unit) -> Instant {
    let naive = instant.into_inner();
    let date = naive.date();

    let floored = match unit {
        Unit::Second => naive.with_nanosecond(0),
        Unit::Minute => date.and_hms_opt(naive.hour(), naive.minute(), 0),
        Unit::Hour => date.and_hms_opt(naive.hour(), 0, 0),
        Unit::Day => date.and_hms_opt(0, 0, 0),
        Unit::Week => date
            .checked_sub_days(Days::new(u64::from(instant.weekday())))
            .and_then(|monday| monday.and_hms_opt(0, 0, 0)),
        Unit::Month => date.with_day(1).and_then(|first| first.and_hms_opt(0, 0, 0)),
        Unit::Year => {
            NaiveDate::from_ymd_opt(date.year(), 1, 1).and_then(|first| first.and_hms_opt(0, 0, 0))
        }
    };

    // The epoch is a Monday at midnight, so every boundary at or before a
    // representable instant is itself representable.
    floored.map_or(instant, Instant::new_unchecked)
}

/// Returns the signed number of `unit` boundaries from `a` to `b`.
///
/// Both instants are floored to `unit` first, so `delta(a, b, unit)` is the
/// number of whole units between `floor(a, unit)` and `floor(b, unit)`.
/// The result is negative when `b` precedes `a`, and `delta(x, x, unit) == 0`.
///
/// # Examples
///
/// ```
/// use recur_core::calendar::delta;
/// use recur_core::types::{Instant, Unit};
///
/// let a = Instant::from_ymd_hms(2000, 1, 31, 23, 0, 0).unwrap();
/// let b = Instant::from_ymd_hms(2000, 3, 1, 1, 0, 0).unwrap();
/// assert_eq!(delta(a, b, Unit::Month), 2);
/// assert_eq!(delta(b, a, Unit::Month), -2);
/// assert_eq!(delta(a, b, Unit::Day), 30);
/// ```
pub fn delta(a: Instant, b: Instant, unit: Unit) -> i64 {
    match unit {
        Unit::Year => i64::from(b.year()) - i64::from(a.year()),
        Unit::Month => {
            (i64::from(b.year()) - i64::from(a.year())) * MONTHS_IN_YEAR
                + (i64::from(b.month()) - i64::from(a.month()))
        }
        fixed => {
            let seconds = fixed.fixed_seconds().unwrap_or(1);
            let span = floor(b, fixed).into_inner() - floor(a, fixed).into_inner();
            span.num_seconds() / seconds
        }
    }
}

/// Shifts `instant` by `n` whole `unit`s.
///
/// Fixed-length units (second through week) shift by an exact duration.
/// Months and years shift the calendar fields and clamp the day of month.
///
/// # Errors
///
/// Returns [`CalendarError::Overflow`] when the result falls outside the
/// representable range in either direction.
///
/// # Examples
///
/// ```
/// use recur_core::calendar::add_delta;
/// use recur_core::types::{Instant, Unit};
///
/// let leap_day = Instant::from_ymd_hms(2000, 2, 29, 0, 0, 0).unwrap();
/// assert_eq!(
///     add_delta(leap_day, 1, Unit::Year).unwrap(),
///     Instant::from_ymd_hms(2001, 2, 28, 0, 0, 0).unwrap()
/// );
///
/// assert!(add_delta(Instant::epoch(), -1, Unit::Second).is_err());
/// ```
pub fn add_delta(instant: Instant, n: i64, unit: Unit) -> Result<Instant, CalendarError> {
    let overflow = || CalendarError::Overflow { amount: n, unit };
    let naive = instant.into_inner();

    let shifted = match unit {
        Unit::Month | Unit::Year => {
            let months = if unit == Unit::Year {
                n.checked_mul(MONTHS_IN_YEAR).ok_or_else(overflow)?
            } else {
                n
            };
            let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| overflow())?;
            if months >= 0 {
                naive.checked_add_months(Months::new(magnitude))
            } else {
                naive.checked_sub_months(Months::new(magnitude))
            }
        }
        fixed => {
            let seconds = n
                .checked_mul(fixed.fixed_seconds().unwrap_or(1))
                .ok_or_else(overflow)?;
            TimeDelta::try_seconds(seconds).and_then(|span| naive.checked_add_signed(span))
        }
    }
    .ok_or_else(overflow)?;

    Instant::from_naive(shifted).map_err(|_| overflow())
}
