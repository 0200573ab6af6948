// File: crates/chart-core/src/error.rs
// Summary: Error types for record parsing, chart building, configuration and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Input that does not have the documented record shape.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index} is not an object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The normalized mapping had no metrics. Callers should show a
    /// placeholder instead of building a chart.
    #[error("no metric data to chart")]
    EmptyInput,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid time format {pattern:?} for {field}")]
    InvalidTimeFormat { field: &'static str, pattern: String },
}

/// Failures reported by a render backend or the host driving it.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render surface already disposed")]
    Disposed,

    #[error("cannot create a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    #[error("backend error: {0}")]
    Backend(String),
}
