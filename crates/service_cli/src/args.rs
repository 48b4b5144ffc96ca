//! Shared command-line argument groups.

use std::str::FromStr;

use clap::Args;
use recur_core::math::interval::Interval;
use recur_core::types::{Instant, Unit};
use recur_models::recurrence::TimeInterval;
use recur_models::schedules::SECONDS_OF_THE_DAY;

use crate::config::{OutputFormat, ScheduleConfig};
use crate::Result;

/// Values of one schedule field, parsed from `1,5,10-12` or `none`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues<T>(pub Vec<T>);

impl<T> FromStr for FieldValues<T>
where
    T: FromStr + Copy + Into<i64> + TryFrom<i64>,
{
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self(Vec::new()));
        }

        let parse = |item: &str| {
            item.trim()
                .parse::<T>()
                .map_err(|_| format!("'{}' is not a valid field value", item.trim()))
        };

        let mut values = Vec::new();
        for item in s.split(',') {
            // A leading '-' belongs to the number, not to a range
            match item.trim().get(1..).and_then(|rest| rest.find('-')) {
                Some(dash) => {
                    let item = item.trim();
                    let (lo, hi) = (parse(&item[..=dash])?, parse(&item[dash + 2..])?);
                    let (lo, hi): (i64, i64) = (lo.into(), hi.into());
                    if lo > hi {
                        return Err(format!("'{}' is an empty range", item));
                    }
                    // No field has more legal values than the seconds of a day
                    let widest = i64::from(*SECONDS_OF_THE_DAY.end()) + 1;
                    if hi - lo >= widest {
                        return Err(format!("'{}' spans more than {} values", item, widest));
                    }
                    values.extend((lo..=hi).filter_map(|v| T::try_from(v).ok()));
                }
                None => values.push(parse(item)?),
            }
        }
        Ok(Self(values))
    }
}

/// Schedule field flags; each replaces the corresponding configured field.
#[derive(Args, Debug, Clone, Default)]
pub struct ScheduleArgs {
    /// Seconds (0-59), e.g. `0,30`
    #[arg(long)]
    seconds: Option<FieldValues<u32>>,

    /// Minutes (0-59)
    #[arg(long)]
    minutes: Option<FieldValues<u32>>,

    /// Hours (0-23), e.g. `9-17`
    #[arg(long)]
    hours: Option<FieldValues<u32>>,

    /// Days of the month (1-31); combined with weekdays by OR
    #[arg(long)]
    days: Option<FieldValues<u32>>,

    /// Weekdays (0 = Monday, 6 = Sunday); `none` to match by day of month only
    #[arg(long)]
    weekdays: Option<FieldValues<u32>>,

    /// Months (1-12)
    #[arg(long)]
    months: Option<FieldValues<u32>>,

    /// Years
    #[arg(long)]
    years: Option<FieldValues<i32>>,

    /// Seconds of the day (0-86399)
    #[arg(long)]
    seconds_of_the_day: Option<FieldValues<u32>>,
}

impl ScheduleArgs {
    /// Converts the flags into configuration overrides.
    pub fn into_config(self) -> ScheduleConfig {
        ScheduleConfig {
            seconds: self.seconds.map(|v| v.0),
            minutes: self.minutes.map(|v| v.0),
            hours: self.hours.map(|v| v.0),
            days: self.days.map(|v| v.0),
            weekdays: self.weekdays.map(|v| v.0),
            months: self.months.map(|v| v.0),
            years: self.years.map(|v| v.0),
            seconds_of_the_day: self.seconds_of_the_day.map(|v| v.0),
        }
    }
}

/// A time interval given on the command line.
#[derive(Args, Debug, Clone)]
pub struct IntervalArgs {
    /// First occurrence number (inclusive)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    from: i64,

    /// Last occurrence number (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    to: i64,

    /// Unit the occurrence numbers count (second, minute, hour, day, week, month, year)
    #[arg(short, long)]
    unit: Unit,

    /// Unit the interval recurs within; omit to count from 0001-01-01
    #[arg(short, long)]
    every: Option<Unit>,
}

impl IntervalArgs {
    /// Builds the time interval.
    pub fn time_interval(&self) -> Result<TimeInterval> {
        Ok(TimeInterval::new(
            Interval::new(self.from, self.to),
            self.unit,
            self.every,
        )?)
    }
}

/// Output flags shared by listing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Number of items to print [default: from configuration, else 10]
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format [default: from configuration, else table]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Returns `start`, or the current local time when absent.
pub fn start_or_now(start: Option<Instant>) -> Result<Instant> {
    match start {
        Some(start) => Ok(start),
        None => Ok(Instant::from_naive(chrono::Local::now().naive_local())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_values_list() {
        let parsed: FieldValues<u32> = "0, 20".parse().unwrap();
        assert_eq!(parsed, FieldValues(vec![0, 20]));
    }

    #[test]
    fn test_field_values_ranges() {
        let parsed: FieldValues<u32> = "1-3,10".parse().unwrap();
        assert_eq!(parsed.0, vec![1, 2, 3, 10]);

        let years: FieldValues<i32> = "1999-2001".parse().unwrap();
        assert_eq!(years.0, vec![1999, 2000, 2001]);
    }

    #[test]
    fn test_field_values_none() {
        let parsed: FieldValues<u32> = "none".parse().unwrap();
        assert!(parsed.0.is_empty());
    }

    #[test]
    fn test_field_values_negative_number() {
        let parsed: FieldValues<i32> = "-5".parse().unwrap();
        assert_eq!(parsed.0, vec![-5]);
    }

    #[test]
    fn test_field_values_errors() {
        assert!("x".parse::<FieldValues<u32>>().is_err());
        assert!("5-1".parse::<FieldValues<u32>>().is_err());
        assert!("1,,2".parse::<FieldValues<u32>>().is_err());
        assert!("1-2000000000".parse::<FieldValues<i32>>().is_err());
        assert!("0-4294967295".parse::<FieldValues<u32>>().is_err());

        let day: FieldValues<u32> = "0-86399".parse().unwrap();
        assert_eq!(day.0.len(), 86_400);
    }

    #[test]
    fn test_interval_args() {
        let args = IntervalArgs {
            from: 15,
            to: 45,
            unit: Unit::Minute,
            every: Some(Unit::Hour),
        };
        let ti = args.time_interval().unwrap();
        assert_eq!(ti.to_string(), "[15, 45] minutes of every hour");

        let invalid = IntervalArgs {
            every: Some(Unit::Second),
            ..args
        };
        assert!(invalid.time_interval().is_err());
    }

    #[test]
    fn test_schedule_args_into_config() {
        let args = ScheduleArgs {
            hours: Some(FieldValues(vec![9])),
            weekdays: Some(FieldValues(vec![])),
            ..Default::default()
        };
        let config = args.into_config();
        assert_eq!(config.hours, Some(vec![9]));
        assert_eq!(config.weekdays, Some(vec![]));
        assert_eq!(config.days, None);
    }
}
