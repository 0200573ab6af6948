// File: crates/chart-core/src/normalize.rs
// Summary: Metric normalizer: raw records -> ordered metric name -> timestamp-sorted samples.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::record::{RawRecord, RecordEntry};

/// One parsed point of one metric. `value` is NaN when the raw text did not parse.
#[derive(Clone, Debug, Serialize)]
pub struct NormalizedSample {
    pub timestamp: i64,
    pub value: f64,
    pub status: String,
}

impl NormalizedSample {
    /// Whether the value can be plotted (finite).
    pub fn is_plottable(&self) -> bool {
        self.value.is_finite()
    }
}

/// Samples for one metric, ascending by timestamp. Equal timestamps keep arrival order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct MetricSeries {
    samples: Vec<NormalizedSample>,
}

impl MetricSeries {
    /// Build a series from samples in arrival order.
    pub fn from_samples(mut samples: Vec<NormalizedSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn samples(&self) -> &[NormalizedSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.samples.iter().map(|s| s.timestamp)
    }

    /// All samples recorded exactly at `timestamp`, in arrival order.
    pub fn all_at(&self, timestamp: i64) -> &[NormalizedSample] {
        let lo = self.samples.partition_point(|s| s.timestamp < timestamp);
        let hi = self.samples.partition_point(|s| s.timestamp <= timestamp);
        &self.samples[lo..hi]
    }

    /// First sample (in arrival order) recorded exactly at `timestamp`.
    pub fn first_at(&self, timestamp: i64) -> Option<&NormalizedSample> {
        self.all_at(timestamp).first()
    }

    /// First sample at `timestamp` with a finite value.
    pub fn plottable_at(&self, timestamp: i64) -> Option<&NormalizedSample> {
        self.all_at(timestamp).iter().find(|s| s.is_plottable())
    }

    pub fn is_sorted(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
    }
}

/// Metric name -> series, iterating in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct MetricMap {
    entries: Vec<(String, MetricSeries)>,
    index: HashMap<String, usize>,
}

impl MetricMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MetricSeries> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricSeries)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Total samples across every metric.
    pub fn sample_count(&self) -> usize {
        self.entries.iter().map(|(_, s)| s.len()).sum()
    }

    fn push(&mut self, name: &str, sample: NormalizedSample) {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.entries.push((name.to_string(), MetricSeries::default()));
                self.index.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[i].1.samples.push(sample);
    }

    fn sort_series(&mut self) {
        for (_, series) in &mut self.entries {
            // stable: ties keep arrival order
            series.samples.sort_by_key(|s| s.timestamp);
        }
    }
}

impl Serialize for MetricMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, series) in &self.entries {
            map.serialize_entry(name, series)?;
        }
        map.end()
    }
}

/// Normalize raw records. Entries that are not readings are skipped; an input without
/// any reading yields an empty map ("no data").
pub fn normalize(records: &[RawRecord]) -> MetricMap {
    let mut metrics = MetricMap::new();
    let mut skipped = 0usize;

    for record in records {
        for (name, entry) in &record.entries {
            match entry {
                RecordEntry::Reading(reading) => {
                    let value = reading.parsed_value();
                    if value.is_nan() {
                        warn!(metric = %name, raw = %reading.value, timestamp = reading.timestamp, "unparseable metric value");
                    }
                    metrics.push(
                        name,
                        NormalizedSample { timestamp: reading.timestamp, value, status: reading.status.clone() },
                    );
                }
                RecordEntry::Malformed(_) => {
                    skipped += 1;
                    trace!(metric = %name, "skipping entry that is not a reading");
                }
            }
        }
    }

    metrics.sort_series();
    debug!(records = records.len(), metrics = metrics.len(), samples = metrics.sample_count(), skipped, "normalized records");
    metrics
}

/// Absent input is treated the same as an empty slice.
pub fn normalize_opt(records: Option<&[RawRecord]>) -> MetricMap {
    records.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MetricReading;

    fn rec(cat: f64, readings: &[(&str, &str, i64, &str)]) -> RawRecord {
        readings.iter().fold(RawRecord::new(cat), |r, (m, v, t, s)| {
            r.with_reading(*m, MetricReading::new(*v, *t, *s))
        })
    }

    #[test]
    fn sorts_by_timestamp_and_keeps_ties_in_arrival_order() {
        let records = vec![
            rec(1.0, &[("cpu", "3", 3000, "GOOD")]),
            rec(2.0, &[("cpu", "1", 1000, "GOOD")]),
            rec(3.0, &[("cpu", "2a", 2000, "ERROR")]),
            rec(4.0, &[("cpu", "2b", 2000, "WARNING")]),
        ];
        let m = normalize(&records);
        let cpu = m.get("cpu").unwrap();
        assert!(cpu.is_sorted());
        let statuses: Vec<_> = cpu.samples().iter().map(|s| s.status.as_str()).collect();
        assert_eq!(statuses, vec!["GOOD", "ERROR", "WARNING", "GOOD"]);
        assert_eq!(cpu.first_at(2000).unwrap().status, "ERROR");
        assert!(cpu.first_at(2500).is_none());
        assert!(cpu.all_at(2500).is_empty());
    }

    #[test]
    fn first_seen_order_across_records() {
        let records = vec![
            rec(1.0, &[("mem", "1", 1, "GOOD")]),
            rec(2.0, &[("cpu", "1", 1, "GOOD"), ("mem", "2", 2, "GOOD")]),
            rec(3.0, &[("disk", "1", 1, "GOOD")]),
        ];
        let m = normalize(&records);
        assert_eq!(m.names().collect::<Vec<_>>(), vec!["mem", "cpu", "disk"]);
        assert_eq!(m.sample_count(), 4);
    }

    #[test]
    fn absent_and_empty_are_no_data() {
        assert!(normalize(&[]).is_empty());
        assert!(normalize_opt(None).is_empty());
        assert!(normalize(&[RawRecord::new(1.0)]).is_empty());
    }

    #[test]
    fn from_samples_sorts() {
        let s = MetricSeries::from_samples(vec![
            NormalizedSample { timestamp: 5, value: 1.0, status: "GOOD".into() },
            NormalizedSample { timestamp: 1, value: 2.0, status: "GOOD".into() },
        ]);
        assert_eq!(s.timestamps().collect::<Vec<_>>(), vec![1, 5]);
    }
}
