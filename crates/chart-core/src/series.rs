// File: crates/chart-core/src/series.rs
// Summary: Series descriptor: one metric's values aligned to the unified timeline, colored per point.
// Notes:
// - `data[i]` corresponds to timeline position `i`. `None` is a gap: the metric has no
//   plottable sample there. Gaps are never filled or interpolated.

use serde::Serialize;

use crate::status::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
}

/// A plotted point. Color is resolved from this point's own status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub value: f64,
    pub status: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    pub series_type: SeriesType,
    pub smooth: bool,
    pub show_symbol: bool,
    pub data: Vec<Option<SeriesPoint>>,
}

impl SeriesSpec {
    pub fn line(name: impl Into<String>, data: Vec<Option<SeriesPoint>>) -> Self {
        Self { name: name.into(), series_type: SeriesType::Line, smooth: false, show_symbol: true, data }
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_symbols(mut self, show: bool) -> Self {
        self.show_symbol = show;
        self
    }

    /// Aligned values, `None` at gaps.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.data.iter().map(|p| p.as_ref().map(|p| p.value)).collect()
    }

    pub fn gap_count(&self) -> usize {
        self.data.iter().filter(|p| p.is_none()).count()
    }

    /// Plotted points with their timeline position.
    pub fn points(&self) -> impl Iterator<Item = (usize, &SeriesPoint)> {
        self.data.iter().enumerate().filter_map(|(i, p)| p.as_ref().map(|p| (i, p)))
    }

    /// Runs of consecutive plotted positions; a line is drawn within a run only.
    pub fn segments(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        for (i, p) in self.data.iter().enumerate() {
            match p {
                Some(p) => current.push((i, p.value)),
                None if !current.is_empty() => out.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
        out
    }
}
