// File: crates/chart-core/src/format.rs
// Summary: Timestamp formatting for axis labels and tooltip headers (chrono strftime patterns).

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFormat {
    /// Short label under each category axis position.
    pub axis_format: String,
    /// Header line of a tooltip.
    pub tooltip_format: String,
    /// Fixed display offset from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            axis_format: "%m-%d %H:%M:%S".to_string(),
            tooltip_format: "%Y-%m-%d %H:%M:%S".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

impl TimeFormat {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, pattern) in [("axis_format", &self.axis_format), ("tooltip_format", &self.tooltip_format)] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::InvalidTimeFormat { field, pattern: pattern.clone() });
            }
        }
        if self.offset().is_none() {
            return Err(ConfigError::InvalidTimeFormat {
                field: "utc_offset_minutes",
                pattern: self.utc_offset_minutes.to_string(),
            });
        }
        Ok(())
    }

    pub fn format_axis(&self, timestamp_ms: i64) -> String {
        self.format_with(&self.axis_format, timestamp_ms)
    }

    pub fn format_tooltip(&self, timestamp_ms: i64) -> String {
        self.format_with(&self.tooltip_format, timestamp_ms)
    }

    fn offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes.checked_mul(60)?)
    }

    /// Out-of-range timestamps and unusable patterns fall back to the raw millis.
    fn format_with(&self, pattern: &str, timestamp_ms: i64) -> String {
        let (Some(dt), Some(offset)) = (DateTime::from_timestamp_millis(timestamp_ms), self.offset()) else {
            return timestamp_ms.to_string();
        };
        let mut out = String::new();
        if write!(out, "{}", dt.with_timezone(&offset).format(pattern)).is_err() {
            return timestamp_ms.to_string();
        }
        out
    }
}
