// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot of the exported option document, with bless flow.
// Behavior:
// - Builds the option JSON for tests/data/service_health.json.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else compares against the snapshot as parsed JSON (formatting-insensitive).

use status_chart_core::{parse_records, prepare, ChartConfig, ChartState};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn build_option() -> serde_json::Value {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let input = std::fs::read_to_string(root.join("tests/data/service_health.json")).expect("read input");
    let records = parse_records(&input).expect("parse input");
    let cfg = ChartConfig { title: Some("Service health".into()), ..ChartConfig::default() };
    match prepare(&records, &cfg) {
        ChartState::Ready(spec) => spec.to_option(),
        ChartState::NoData => panic!("fixture should produce a chart"),
    }
}

#[test]
fn golden_service_health_option() {
    let got = build_option();
    let snap_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/service_health_option.json");

    if bless_mode() {
        let text = serde_json::to_string_pretty(&got).expect("serialize");
        std::fs::write(&snap_path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {}", snap_path.display());
        return;
    }

    let want: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snap_path).expect("read snapshot")).expect("parse snapshot");
    assert_eq!(got, want, "option differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn option_gaps_are_null() {
    let option = build_option();
    let mem = &option["series"][1];
    assert_eq!(mem["name"], "mem");
    assert!(mem["data"][1].is_null());
    assert_eq!(option["xAxis"]["data"].as_array().map(Vec::len), Some(2));
}
