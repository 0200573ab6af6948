// File: crates/chart-core/src/timeline.rs
// Summary: Unified timeline: sorted, deduplicated union of every metric's timestamps.

use serde::Serialize;

use crate::normalize::MetricMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnifiedTimeline {
    timestamps: Vec<i64>,
}

impl UnifiedTimeline {
    pub fn from_metrics(metrics: &MetricMap) -> Self {
        let mut timestamps: Vec<i64> = metrics.iter().flat_map(|(_, s)| s.timestamps()).collect();
        timestamps.sort_unstable();
        timestamps.dedup();
        Self { timestamps }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.timestamps.iter().copied()
    }

    /// Axis position of an exact timestamp.
    pub fn position(&self, timestamp: i64) -> Option<usize> {
        self.timestamps.binary_search(&timestamp).ok()
    }

    pub fn span(&self) -> Option<(i64, i64)> {
        Some((*self.timestamps.first()?, *self.timestamps.last()?))
    }
}
