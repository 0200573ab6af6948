// File: crates/chart-core/src/pipeline.rs
// Summary: Records -> normalized metrics -> chart spec, short-circuiting to NoData on empty input.

use tracing::debug;

use crate::chart::{build_chart, ChartSpec};
use crate::config::ChartConfig;
use crate::error::BuildError;
use crate::normalize::normalize;
use crate::record::RawRecord;

/// What the caller should show for a given input.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartState {
    /// No metric readings at all; render a placeholder, not an empty chart.
    NoData,
    Ready(ChartSpec),
}

impl ChartState {
    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            ChartState::Ready(spec) => Some(spec),
            ChartState::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartState::NoData)
    }
}

pub fn prepare(records: &[RawRecord], config: &ChartConfig) -> ChartState {
    let metrics = normalize(records);
    if metrics.is_empty() {
        debug!(records = records.len(), "no metric data");
        return ChartState::NoData;
    }
    match build_chart(&metrics, config) {
        Ok(spec) => ChartState::Ready(spec),
        // Ruled out by the emptiness check above. Keep this match exhaustive.
        Err(BuildError::EmptyInput) => ChartState::NoData,
    }
}
