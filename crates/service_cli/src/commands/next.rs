//! Next command implementation
//!
//! Prints the next occurrences of a schedule.

use std::io::Write;

use recur_core::types::Instant;
use recur_models::schedules::Schedule;
use tracing::info;

use super::write_table;
use crate::config::OutputFormat;
use crate::Result;

/// Run the next command
pub fn run(
    schedule: &Schedule,
    start: Instant,
    count: usize,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!(%start, count, ?format, "Scanning schedule");

    let occurrences: Vec<Instant> = schedule.forward(start).take(count).collect();
    if occurrences.len() < count {
        info!(found = occurrences.len(), "Schedule ended before the requested count");
    }

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &occurrences)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = occurrences
                .iter()
                .enumerate()
                .map(|(i, t)| vec![(i + 1).to_string(), t.to_string(), weekday_name(t).to_string()])
                .collect();
            write_table(out, &["#", "Occurrence", "Weekday"], &rows)?;
        }
    }

    Ok(())
}

fn weekday_name(t: &Instant) -> &'static str {
    match t.weekday() {
        0 => "Mon",
        1 => "Tue",
        2 => "Wed",
        3 => "Thu",
        4 => "Fri",
        5 => "Sat",
        _ => "Sun",
    }
}
