// File: crates/chart-core/src/record.rs
// Summary: Raw input records: a reserved category plus ordered metric-name -> reading entries.
// Notes:
// - JSON objects are decoded into an explicit ordered entry list; every key other than
//   `category` is a candidate metric. Entries that are not reading objects are kept as
//   `RecordEntry::Malformed` so the normalizer can skip them without guessing.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// Key holding the record's category marker rather than a metric reading.
pub const CATEGORY_KEY: &str = "category";

/// One metric observation as it arrives: numeric text, epoch millis, status label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricReading {
    pub value: String,
    pub timestamp: i64,
    pub status: String,
}

impl MetricReading {
    pub fn new(value: impl Into<String>, timestamp: i64, status: impl Into<String>) -> Self {
        Self { value: value.into(), timestamp, status: status.into() }
    }

    /// Parse `value` as a float. Unparseable text yields NaN.
    pub fn parsed_value(&self) -> f64 {
        self.value.trim().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Decode a reading object. Returns `None` for anything that is not an object with
    /// `value` (text or number), numeric `timestamp` and textual `status`.
    pub fn from_json(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        let value = match obj.get("value")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let timestamp = json_millis(obj.get("timestamp")?)?;
        let status = obj.get("status")?.as_str()?.to_string();
        Some(Self { value, timestamp, status })
    }
}

fn json_millis(v: &Value) -> Option<i64> {
    if let Some(ms) = v.as_i64() {
        return Some(ms);
    }
    v.as_f64().and_then(millis_from_f64)
}

/// Whole milliseconds from a float timestamp. Non-finite values and values outside
/// the `i64` range are not timestamps.
pub(crate) fn millis_from_f64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && in_range).then(|| f.trunc() as i64)
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecordEntry {
    Reading(MetricReading),
    /// Anything else found under a metric key (bare numbers, strings, partial objects).
    Malformed(Value),
}

impl RecordEntry {
    pub fn from_json(v: Value) -> Self {
        match MetricReading::from_json(&v) {
            Some(reading) => RecordEntry::Reading(reading),
            None => RecordEntry::Malformed(v),
        }
    }

    pub fn reading(&self) -> Option<&MetricReading> {
        match self {
            RecordEntry::Reading(r) => Some(r),
            RecordEntry::Malformed(_) => None,
        }
    }
}

/// One input element. `category` is carried as reserved data and never charted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRecord {
    pub category: Option<f64>,
    pub entries: Vec<(String, RecordEntry)>,
}

impl RawRecord {
    pub fn new(category: impl Into<Option<f64>>) -> Self {
        Self { category: category.into(), entries: Vec::new() }
    }

    pub fn with_reading(mut self, metric: impl Into<String>, reading: MetricReading) -> Self {
        self.entries.push((metric.into(), RecordEntry::Reading(reading)));
        self
    }

    pub fn with_entry(mut self, metric: impl Into<String>, entry: RecordEntry) -> Self {
        self.entries.push((metric.into(), entry));
        self
    }

    /// Well-formed readings in key order.
    pub fn readings(&self) -> impl Iterator<Item = (&str, &MetricReading)> {
        self.entries
            .iter()
            .filter_map(|(name, entry)| entry.reading().map(|r| (name.as_str(), r)))
    }

    pub fn from_json_map(map: Map<String, Value>) -> Self {
        let mut record = RawRecord::default();
        for (key, value) in map {
            if key == CATEGORY_KEY {
                record.category = value.as_f64();
            } else {
                record.entries.push((key, RecordEntry::from_json(value)));
            }
        }
        record
    }
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(RawRecord::from_json_map(map))
    }
}

/// Parse a JSON document holding an array of records. `null` counts as absent input.
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, RecordError> {
    let root: Value = serde_json::from_str(input)?;
    records_from_value(root)
}

pub fn records_from_value(root: Value) -> Result<Vec<RawRecord>, RecordError> {
    match root {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(RawRecord::from_json_map(map)),
                other => Err(RecordError::NotAnObject { index, found: json_kind(&other) }),
            })
            .collect(),
        other => Err(RecordError::NotAnArray { found: json_kind(&other) }),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
