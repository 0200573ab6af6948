// File: crates/chart-core/tests/properties.rs
// Purpose: Invariants of the normalizer and builder over generated record sets.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use serde_json::json;
use status_chart_core::{build_chart, normalize, ChartConfig, MetricReading, RawRecord, RecordEntry};

const METRICS: [&str; 4] = ["cpu", "mem", "disk", "net"];

// ──────────────────── strategies ────────────────────

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..1000).prop_map(|n| n.to_string()),
        2 => (-1e6f64..1e6).prop_map(|f| f.to_string()),
        1 => Just("n/a".to_string()),
        1 => "[a-z]{1,4}",
    ]
}

/// Mostly a handful of shared timestamps so duplicates and overlaps are common.
fn arb_timestamp() -> impl Strategy<Value = i64> {
    prop_oneof![
        6 => (0i64..8).prop_map(|k| k * 1000),
        1 => any::<i64>(),
    ]
}

fn arb_status() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["GOOD", "WARNING", "ERROR", "UNKNOWN"])
}

prop_compose! {
    fn arb_reading()(value in arb_value(), timestamp in arb_timestamp(), status in arb_status()) -> MetricReading {
        MetricReading::new(value, timestamp, status)
    }
}

/// What sits under one metric key: nothing, something malformed, or a reading.
fn arb_entry() -> impl Strategy<Value = Option<RecordEntry>> {
    prop_oneof![
        1 => Just(None),
        1 => any::<u8>().prop_map(|n| Some(RecordEntry::Malformed(json!(n)))),
        3 => arb_reading().prop_map(|r| Some(RecordEntry::Reading(r))),
    ]
}

prop_compose! {
    fn arb_record()(
        category in prop::option::of(0u8..20),
        entries in prop::collection::vec(arb_entry(), METRICS.len()),
    ) -> RawRecord {
        METRICS
            .iter()
            .zip(entries)
            .filter_map(|(name, entry)| entry.map(|e| (*name, e)))
            .fold(RawRecord::new(category.map(f64::from)), |rec, (name, e)| rec.with_entry(name, e))
    }
}

fn arb_records() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec(arb_record(), 0..12)
}

// ──────────────────── property tests ────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every reading lands in its metric's series, and each series is time-sorted.
    #[test]
    fn normalizer_counts_and_ordering(records in arb_records()) {
        let metrics = normalize(&records);

        let mut expected: HashMap<&str, usize> = HashMap::new();
        for r in &records {
            for (name, _) in r.readings() {
                *expected.entry(name).or_default() += 1;
            }
        }
        prop_assert_eq!(metrics.len(), expected.len());
        for (name, series) in metrics.iter() {
            prop_assert_eq!(series.len(), expected[name]);
            prop_assert!(series.is_sorted(), "{} not sorted", name);
        }
    }

    /// The timeline is exactly the sorted set of distinct sample timestamps.
    #[test]
    fn timeline_is_distinct_union(records in arb_records()) {
        let metrics = normalize(&records);
        prop_assume!(!metrics.is_empty());

        let spec = build_chart(&metrics, &ChartConfig::default()).unwrap();
        let distinct: BTreeSet<i64> = metrics.iter().flat_map(|(_, s)| s.timestamps()).collect();
        let distinct: Vec<i64> = distinct.into_iter().collect();
        prop_assert_eq!(spec.timeline.as_slice(), distinct.as_slice());
        prop_assert!(spec.timeline.len() <= metrics.sample_count());
    }

    /// A point exists only where the metric has a finite sample at that exact timestamp.
    #[test]
    fn gaps_are_never_filled(records in arb_records()) {
        let metrics = normalize(&records);
        prop_assume!(!metrics.is_empty());

        let spec = build_chart(&metrics, &ChartConfig::default()).unwrap();
        for series in &spec.series {
            let source = metrics.get(&series.name).unwrap();
            prop_assert_eq!(series.data.len(), spec.timeline.len());
            for (ts, point) in spec.timeline.iter().zip(&series.data) {
                let at = source.all_at(ts);
                match point {
                    Some(p) => {
                        let first_finite = at.iter().find(|s| s.is_plottable()).map(|s| s.value);
                        prop_assert_eq!(Some(p.value), first_finite);
                    }
                    None => prop_assert!(at.iter().all(|s| !s.is_plottable()), "{} gap at {} hides a value", series.name, ts),
                }
            }
        }
    }

    /// Same input, same output.
    #[test]
    fn pipeline_is_idempotent(records in arb_records()) {
        let a = normalize(&records);
        let b = normalize(&records);
        prop_assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
        if !a.is_empty() {
            let cfg = ChartConfig::default();
            prop_assert_eq!(build_chart(&a, &cfg).unwrap(), build_chart(&b, &cfg).unwrap());
        }
    }
}
