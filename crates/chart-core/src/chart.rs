// File: crates/chart-core/src/chart.rs
// Summary: ChartSpec and the builder that derives it from normalized metrics.

use serde::Serialize;
use tracing::{debug, trace};

use crate::axis::{CategoryAxis, ValueAxis};
use crate::config::ChartConfig;
use crate::error::BuildError;
use crate::normalize::MetricMap;
use crate::series::{SeriesPoint, SeriesSpec};
use crate::timeline::UnifiedTimeline;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub entries: Vec<String>,
}

/// One metric's line in a tooltip. `value` is `None` when the sample did not parse.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipLine {
    pub metric: String,
    pub value: Option<f64>,
    pub status: String,
}

impl TooltipLine {
    pub fn render(&self) -> String {
        match self.value {
            Some(v) => format!("{}: {} ({})", self.metric, v, self.status),
            None => format!("{}: - ({})", self.metric, self.status),
        }
    }
}

/// Tooltip content for one timeline position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub timestamp: i64,
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    pub fn render(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.render());
        }
        out
    }
}

/// Declarative chart description handed to a render backend. Rebuilt whole on
/// every input change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub timeline: UnifiedTimeline,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub series: Vec<SeriesSpec>,
    pub legend: Legend,
    /// One entry per timeline position.
    pub tooltips: Vec<Tooltip>,
}

impl ChartSpec {
    /// Tooltip for an exact timeline timestamp.
    pub fn tooltip_at(&self, timestamp: i64) -> Option<&Tooltip> {
        self.timeline.position(timestamp).and_then(|i| self.tooltips.get(i))
    }

    pub fn tooltip_text(&self, timestamp: i64) -> Option<String> {
        self.tooltip_at(timestamp).map(Tooltip::render)
    }

    pub fn series_named(&self, name: &str) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Min/max over plotted values, `None` if nothing is plottable.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points().map(|(_, p)| p.value))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Plotted point count per status, in first-seen order.
    pub fn status_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for (_, p) in self.series.iter().flat_map(|s| s.points()) {
            match counts.iter_mut().find(|(status, _)| *status == p.status) {
                Some((_, n)) => *n += 1,
                None => counts.push((p.status.clone(), 1)),
            }
        }
        counts
    }
}

/// Build the chart spec for a non-empty metric map.
///
/// Each series gets one entry per timeline position: the first sample with a finite value
/// recorded at that exact timestamp, or a gap when there is none. A tooltip line uses the
/// same sample, or the first unparseable one (shown as `-`) when none is finite.
pub fn build_chart(metrics: &MetricMap, config: &ChartConfig) -> Result<ChartSpec, BuildError> {
    if metrics.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let timeline = UnifiedTimeline::from_metrics(metrics);
    let palette = &config.palette;

    let series: Vec<SeriesSpec> = metrics
        .iter()
        .map(|(name, samples)| {
            let data = timeline
                .iter()
                .map(|ts| {
                    samples.plottable_at(ts).map(|s| {
                        if !palette.is_known(&s.status) {
                            trace!(metric = %name, status = %s.status, "status outside palette, using fallback color");
                        }
                        SeriesPoint { value: s.value, status: s.status.clone(), color: palette.color(&s.status) }
                    })
                })
                .collect();
            SeriesSpec::line(name, data).with_smooth(config.smooth).with_symbols(config.show_symbol)
        })
        .collect();

    let tooltips = timeline
        .iter()
        .map(|ts| Tooltip {
            timestamp: ts,
            title: config.time.format_tooltip(ts),
            lines: metrics
                .iter()
                .filter_map(|(name, samples)| {
                    samples.plottable_at(ts).or_else(|| samples.first_at(ts)).map(|s| TooltipLine {
                        metric: name.to_string(),
                        value: s.is_plottable().then_some(s.value),
                        status: s.status.clone(),
                    })
                })
                .collect(),
        })
        .collect();

    let x_axis = CategoryAxis::new(timeline.iter().map(|ts| config.time.format_axis(ts)).collect());
    let legend = Legend { entries: metrics.names().map(str::to_string).collect() };

    debug!(series = series.len(), positions = timeline.len(), "built chart spec");

    Ok(ChartSpec {
        title: config.title.clone(),
        timeline,
        x_axis,
        y_axis: ValueAxis::new(config.value_axis_name.clone()),
        series,
        legend,
        tooltips,
    })
}
