// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; record normalization and status-colored chart spec construction.

pub mod axis;
pub mod chart;
pub mod config;
pub mod csv_records;
pub mod error;
pub mod format;
pub mod host;
pub mod logging;
pub mod normalize;
pub mod option;
pub mod pipeline;
pub mod record;
pub mod series;
pub mod status;
pub mod timeline;

pub use axis::{CategoryAxis, ValueAxis};
pub use chart::{build_chart, ChartSpec, Legend, Tooltip, TooltipLine};
pub use config::{ChartConfig, LoggingConfig};
pub use csv_records::records_from_csv;
pub use error::{BuildError, ConfigError, RecordError, RenderError};
pub use format::TimeFormat;
pub use host::{ChartHost, RenderBackend, SurfaceSize};
pub use normalize::{normalize, normalize_opt, MetricMap, MetricSeries, NormalizedSample};
pub use pipeline::{prepare, ChartState};
pub use record::{parse_records, records_from_value, MetricReading, RawRecord, RecordEntry};
pub use series::{SeriesPoint, SeriesSpec, SeriesType};
pub use status::{Color, StatusPalette};
pub use timeline::UnifiedTimeline;
