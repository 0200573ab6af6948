// File: crates/chart-core/src/axis.rs
// Summary: Axis models: timestamp category axis and plain numeric value axis.

use serde::Serialize;

/// Category (X) axis: one label per unified timeline position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
}

impl CategoryAxis {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Indices of labels to draw when at most `max_labels` fit, always including the first.
    pub fn label_stride(&self, max_labels: usize) -> usize {
        if max_labels == 0 || self.labels.len() <= max_labels {
            return 1;
        }
        self.labels.len().div_ceil(max_labels)
    }
}

/// Value (Y) axis. Linear and unbounded; the range is derived from the data at draw time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValueAxis {
    pub name: Option<String>,
}

impl ValueAxis {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}
