//! Windows command implementation
//!
//! Prints the next windows of a time interval.

use std::io::Write;

use recur_core::calendar::delta;
use recur_core::types::{Instant, Unit};
use recur_models::recurrence::{TimeInterval, Window};
use tracing::info;

use super::write_table;
use crate::config::OutputFormat;
use crate::Result;

/// Run the windows command
pub fn run(
    time_interval: &TimeInterval,
    start: Instant,
    count: usize,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!(%time_interval, %start, count, "Generating windows");

    let windows: Vec<Window> = time_interval.forward(start).take(count).collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &windows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = windows
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    vec![
                        (i + 1).to_string(),
                        w.start().to_string(),
                        w.end().to_string(),
                        delta(w.start(), w.end(), Unit::Second).to_string(),
                    ]
                })
                .collect();
            write_table(out, &["#", "Start", "End", "Seconds"], &rows)?;
        }
    }

    Ok(())
}
