//! CLI configuration loading.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. The TOML file given with `--config` (default `recur.toml`, optional)
//! 3. Environment variables with the `RECUR_` prefix, `__` separating nested keys
//!    (`RECUR_COUNT=5`, `RECUR_SCHEDULE__HOURS=0,20`)
//! 4. Command-line flags

use std::path::Path;

use clap::ValueEnum;
use recur_models::schedules::{Schedule, ScheduleBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CliError, Result};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "recur.toml";

/// Number of items printed when neither the file nor the flags say otherwise.
pub const DEFAULT_COUNT: usize = 10;

const SCHEDULE_LIST_KEYS: [&str; 8] = [
    "schedule.seconds",
    "schedule.minutes",
    "schedule.hours",
    "schedule.days",
    "schedule.weekdays",
    "schedule.months",
    "schedule.years",
    "schedule.seconds_of_the_day",
];

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON document
    Json,
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Number of occurrences or windows to print.
    pub count: usize,
    /// Output format.
    pub format: OutputFormat,
    /// Schedule fields used by `recur next`.
    pub schedule: ScheduleConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            format: OutputFormat::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path` layered with `RECUR_*` environment variables.
    ///
    /// A missing file is only an error when `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if required && !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let mut environment = config::Environment::with_prefix("RECUR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",");
        for key in SCHEDULE_LIST_KEYS {
            environment = environment.with_list_parse_key(key);
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(environment)
            .build()?;

        let config: CliConfig = settings.try_deserialize()?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| CliError::InvalidArgument(format!("Cannot render configuration: {}", e)))
    }
}

/// Schedule fields; absent fields admit their full range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Seconds (0-59).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<Vec<u32>>,
    /// Minutes (0-59).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<Vec<u32>>,
    /// Hours (0-23).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<u32>>,
    /// Days of the month (1-31).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<u32>>,
    /// Weekdays (0 = Monday).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<u32>>,
    /// Months (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<u32>>,
    /// Years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<i32>>,
    /// Seconds of the day (0-86399).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_of_the_day: Option<Vec<u32>>,
}

impl ScheduleConfig {
    /// Returns `self` with every field set in `overrides` replaced.
    pub fn merge(self, overrides: ScheduleConfig) -> Self {
        Self {
            seconds: overrides.seconds.or(self.seconds),
            minutes: overrides.minutes.or(self.minutes),
            hours: overrides.hours.or(self.hours),
            days: overrides.days.or(self.days),
            weekdays: overrides.weekdays.or(self.weekdays),
            months: overrides.months.or(self.months),
            years: overrides.years.or(self.years),
            seconds_of_the_day: overrides.seconds_of_the_day.or(self.seconds_of_the_day),
        }
    }

    /// Builds the schedule described by the configured fields.
    pub fn to_schedule(&self) -> Schedule {
        let mut builder = ScheduleBuilder::new();
        if let Some(values) = &self.seconds {
            builder = builder.seconds(values.iter().copied());
        }
        if let Some(values) = &self.minutes {
            builder = builder.minutes(values.iter().copied());
        }
        if let Some(values) = &self.hours {
            builder = builder.hours(values.iter().copied());
        }
        if let Some(values) = &self.days {
            builder = builder.days(values.iter().copied());
        }
        if let Some(values) = &self.weekdays {
            builder = builder.weekdays(values.iter().copied());
        }
        if let Some(values) = &self.months {
            builder = builder.months(values.iter().copied());
        }
        if let Some(values) = &self.years {
            builder = builder.years(values.iter().copied());
        }
        if let Some(values) = &self.seconds_of_the_day {
            builder = builder.seconds_of_the_day(values.iter().copied());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("recur-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.count, DEFAULT_COUNT);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.schedule.to_schedule(), Schedule::default());
    }

    #[test]
    fn test_missing_optional_file_gives_defaults() {
        let path = std::env::temp_dir().join("recur-definitely-missing.toml");
        let config = CliConfig::load(&path, false).unwrap();
        assert_eq!(config.schedule, ScheduleConfig::default());
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let path = std::env::temp_dir().join("recur-definitely-missing.toml");
        assert!(matches!(
            CliConfig::load(&path, true),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp(
            "load",
            r#"
count = 3
format = "json"

[schedule]
years = [2000]
months = [3]
hours = [0, 20]
"#,
        );
        let config = CliConfig::load(&path, true).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.count, 3);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.schedule.years, Some(vec![2000]));
        assert_eq!(config.schedule.hours, Some(vec![0, 20]));
        assert_eq!(config.schedule.days, None);

        let schedule = config.schedule.to_schedule();
        assert!(schedule.months().contains(3));
        assert!(schedule.days().is_full());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = ScheduleConfig {
            hours: Some(vec![1]),
            minutes: Some(vec![30]),
            ..Default::default()
        };
        let flags = ScheduleConfig {
            hours: Some(vec![2, 3]),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.hours, Some(vec![2, 3]));
        assert_eq!(merged.minutes, Some(vec![30]));
        assert_eq!(merged.seconds, None);
    }

    #[test]
    fn test_to_toml_omits_unset_fields() {
        let config = CliConfig {
            schedule: ScheduleConfig {
                months: Some(vec![3]),
                ..Default::default()
            },
            ..Default::default()
        };
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("count = 10"));
        assert!(rendered.contains("format = \"table\""));
        assert!(rendered.contains("months = [3]"));
        assert!(!rendered.contains("hours"));
    }
}
