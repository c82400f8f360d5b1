//! Output and persistence for report results.
//!
//! Supports pretty-printing, JSON serialization, and a CSV run log. Engine
//! results themselves never carry timestamps; the run log is the only place
//! a report invocation gets stamped.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(report: &T) {
    debug!("{:#?}", report);
}

/// Serializes a report as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report as pretty-printed JSON to `path`.
pub fn write_json<T: Serialize>(path: &str, report: &T) -> Result<()> {
    debug!(path, "Writing JSON report");
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// One row of the report run log.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub report_kind: String,
    pub subject: String,
    pub status: String,
}

impl RunRecord {
    pub fn new(report_kind: &str, subject: &str, status: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            report_kind: report_kind.to_string(),
            subject: subject.to_string(),
            status: status.to_string(),
        }
    }
}

/// Appends a [`RunRecord`] as a row to a CSV run log.
///
/// Creates the file with headers if it does not already exist.
pub fn append_run_record(path: &str, record: &RunRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending run record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    info!(path, "Run record appended");
    Ok(())
}
