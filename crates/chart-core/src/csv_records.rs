// File: crates/chart-core/src/csv_records.rs
// Summary: Long-format CSV input (`category,metric,value,timestamp,status`) grouped into records.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RecordError;
use crate::record::{millis_from_f64, MetricReading, RawRecord, RecordEntry};

#[derive(Debug, Deserialize)]
struct CsvRow {
    category: Option<f64>,
    metric: String,
    value: String,
    timestamp: String,
    status: String,
}

/// Read CSV rows; consecutive rows sharing a `category` form one record. A row whose
/// timestamp is not a number becomes a malformed entry and is skipped downstream.
pub fn records_from_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>, RecordError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let mut out: Vec<RawRecord> = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        let row = row?;
        let entry = match parse_millis(&row.timestamp) {
            Some(ts) => RecordEntry::Reading(MetricReading::new(row.value, ts, row.status)),
            None => RecordEntry::Malformed(Value::String(row.timestamp)),
        };
        match out.last_mut() {
            Some(last) if last.category == row.category => last.entries.push((row.metric, entry)),
            _ => out.push(RawRecord::new(row.category).with_entry(row.metric, entry)),
        }
    }
    debug!(records = out.len(), "read CSV records");
    Ok(out)
}

fn parse_millis(s: &str) -> Option<i64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms);
    }
    s.parse::<f64>().ok().and_then(millis_from_f64)
}
