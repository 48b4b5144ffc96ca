//! Recur CLI - Command Line Access to Recurring Calendar Occurrences
//!
//! This is the operational entry point for the recur libraries.
//!
//! # Commands
//!
//! - `recur next` - Print the next occurrences of a multi-field schedule
//! - `recur windows --to <n> --unit <unit> [--every <unit>]` - Print the next windows of a time interval
//! - `recur contains --to <n> --unit <unit> --at <instant>` - Test an instant against a time interval
//! - `recur check` - Print the effective configuration
//!
//! # Configuration
//!
//! Schedule fields, the default count and the output format are read from
//! `recur.toml` (or the file given with `--config`) and `RECUR_*` environment
//! variables. Command-line flags take precedence.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recur_core::types::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use args::{start_or_now, IntervalArgs, OutputArgs, ScheduleArgs};
use crate::config::{CliConfig, OutputFormat, DEFAULT_CONFIG_PATH};

/// Recurring calendar occurrences from the command line
#[derive(Parser)]
#[command(name = "recur")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: recur.toml, optional]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the next occurrences of a schedule
    Next {
        /// First instant to consider (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(short, long)]
        start: Option<Instant>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        fields: ScheduleArgs,
    },

    /// Print the next windows of a time interval
    Windows {
        /// First instant to consider (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(short, long)]
        start: Option<Instant>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        interval: IntervalArgs,
    },

    /// Test whether an instant lies inside a time interval
    Contains {
        /// Instant to test (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(short, long)]
        at: Option<Instant>,

        /// Output format [default: from configuration, else table]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        interval: IntervalArgs,
    },

    /// Print the effective configuration
    Check,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config_required = cli.config.is_some();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = CliConfig::load(&config_path, config_required)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Next {
            start,
            output,
            fields,
        } => {
            let schedule = config.schedule.clone().merge(fields.into_config()).to_schedule();
            commands::next::run(
                &schedule,
                start_or_now(start)?,
                output.count.unwrap_or(config.count),
                output.format.unwrap_or(config.format),
                &mut out,
            )
        }
        Commands::Windows {
            start,
            output,
            interval,
        } => commands::windows::run(
            &interval.time_interval()?,
            start_or_now(start)?,
            output.count.unwrap_or(config.count),
            output.format.unwrap_or(config.format),
            &mut out,
        ),
        Commands::Contains {
            at,
            format,
            interval,
        } => commands::contains::run(
            &interval.time_interval()?,
            start_or_now(at)?,
            format.unwrap_or(config.format),
            &mut out,
        )
        .map(|_| ()),
        Commands::Check => commands::check::run(&config, &config_path, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_next() {
        let cli = Cli::try_parse_from([
            "recur", "next", "--start", "2000-01-01T05:00:00", "--years", "2000", "--months", "3",
            "--hours", "0,20", "-n", "3", "--format", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Next { start, output, fields } => {
                assert_eq!(start, Some(Instant::from_ymd_hms(2000, 1, 1, 5, 0, 0).unwrap()));
                assert_eq!(output.count, Some(3));
                assert_eq!(output.format, Some(OutputFormat::Json));
                let overrides = fields.into_config();
                assert_eq!(overrides.hours, Some(vec![0, 20]));
                assert_eq!(overrides.years, Some(vec![2000]));
            }
            _ => panic!("expected next"),
        }
    }

    #[test]
    fn test_parse_windows_with_negative_bound() {
        let cli = Cli::try_parse_from([
            "recur", "windows", "--from", "-2", "--to", "1", "--unit", "hour", "--every", "day",
        ])
        .unwrap();

        match cli.command {
            Commands::Windows { interval, .. } => {
                let ti = interval.time_interval().unwrap();
                assert_eq!(ti.to_string(), "[-2, 1] hours of every day");
            }
            _ => panic!("expected windows"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["recur", "contains", "--to", "1", "--unit", "eon"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["recur", "check", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
