//! Contains command implementation
//!
//! Tests an instant against a time interval.

use std::io::Write;

use recur_core::types::Instant;
use recur_models::recurrence::TimeInterval;
use serde_json::json;
use tracing::info;

use crate::config::OutputFormat;
use crate::Result;

/// Run the contains command
///
/// Returns whether the instant lies inside the interval.
pub fn run(
    time_interval: &TimeInterval,
    at: Instant,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let inside = time_interval.contains(at);
    let occurrence = time_interval.occurrence(at);
    info!(%time_interval, %at, occurrence, inside, "Checked containment");

    match format {
        OutputFormat::Json => {
            let report = json!({
                "instant": at,
                "time_interval": time_interval.to_string(),
                "occurrence": occurrence,
                "contains": inside,
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let verdict = if inside { "inside" } else { "outside" };
            writeln!(
                out,
                "{} is {} {} (occurrence {})",
                at, verdict, time_interval, occurrence
            )?;
        }
    }

    Ok(inside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recur_core::math::interval::Interval;
    use recur_core::types::Unit;

    fn quarter_hours() -> TimeInterval {
        TimeInterval::new(Interval::new(15, 45), Unit::Minute, Some(Unit::Hour)).unwrap()
    }

    #[test]
    fn test_boundary_minutes() {
        let ti = quarter_hours();
        let mut sink = Vec::new();
        for (minute, expected) in [(14, false), (15, true), (45, true), (46, false)] {
            let at = Instant::from_ymd_hms(2000, 1, 1, 5, minute, 0).unwrap();
            assert_eq!(run(&ti, at, OutputFormat::Table, &mut sink).unwrap(), expected);
        }
    }

    #[test]
    fn test_table_output() {
        let at = Instant::from_ymd_hms(2000, 1, 1, 5, 46, 0).unwrap();
        let mut out = Vec::new();
        run(&quarter_hours(), at, OutputFormat::Table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2000-01-01T05:46:00 is outside [15, 45] minutes of every hour (occurrence 46)\n"
        );
    }

    #[test]
    fn test_json_output() {
        let at = Instant::from_ymd_hms(2000, 1, 1, 5, 20, 0).unwrap();
        let mut out = Vec::new();
        run(&quarter_hours(), at, OutputFormat::Json, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["contains"], true);
        assert_eq!(parsed["occurrence"], 20);
        assert_eq!(parsed["instant"], "2000-01-01T05:20:00");
    }
}
