// File: crates/demo/src/main.rs
// Summary: Demo loads metric records (JSON or CSV), builds the status chart and writes
// the option JSON plus a rendered PNG under target/out.

use anyhow::{Context, Result};
use status_chart_core::{
    logging, parse_records, records_from_csv, ChartConfig, ChartHost, ChartState, RawRecord, SurfaceSize,
};
use status_chart_render_skia::{theme, RenderOptions, SkiaBackend};
use std::path::{Path, PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // usage: status-chart-demo [records.json|records.csv] [config.toml]
    // STATUS_CHART_THEME selects a render theme (dark, light).
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_metrics.json"));
    let config = match args.next() {
        Some(path) => ChartConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => ChartConfig::default(),
    };
    logging::init(&config.logging);

    let records = load_records(&input).with_context(|| format!("failed to load records '{}'", input.display()))?;
    info!(records = records.len(), input = %input.display(), "loaded records");

    let mut opts = RenderOptions::default();
    if let Ok(name) = std::env::var("STATUS_CHART_THEME") {
        opts.theme = theme::find(&name);
    }
    let mut host = ChartHost::new(SkiaBackend::new(opts), SurfaceSize::new(1024, 640), config);
    let spec = match host.update(&records)? {
        ChartState::Ready(spec) => spec.clone(),
        ChartState::NoData => {
            println!("No metric data in {}; nothing to chart.", input.display());
            return Ok(());
        }
    };

    for (status, count) in spec.status_counts() {
        info!(%status, count, "points by status");
    }
    if let Some((lo, hi)) = spec.value_range() {
        println!("{} series over {} timestamps, values in [{lo}, {hi}]", spec.series.len(), spec.timeline.len());
    }

    let out_json = out_name_with(&input, "option", "json");
    let option = serde_json::to_string_pretty(&spec.to_option())?;
    std::fs::write(&out_json, option).with_context(|| format!("writing {}", out_json.display()))?;
    println!("Wrote {}", out_json.display());

    let out_png = out_name_with(&input, "chart", "png");
    let (_, chart) = host.instance_mut().context("render surface not mounted")?;
    let png = chart.png_bytes()?;
    std::fs::write(&out_png, png).with_context(|| format!("writing {}", out_png.display()))?;
    println!("Wrote {}", out_png.display());

    if let Some(last) = spec.timeline.iter().last() {
        if let Some(text) = spec.tooltip_text(last) {
            println!("Latest:\n{text}");
        }
    }

    host.dispose();
    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let is_csv = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Ok(records_from_csv(file)?)
    } else {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Ok(parse_records(&text)?)
    }
}

/// Produce output file name like target/out/<stem>_<suffix>.<ext>
fn out_name_with(input: &Path, suffix: &str, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("metrics");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.{ext}"));
    out
}
