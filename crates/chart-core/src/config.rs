// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (palette, time formats, series styling, logging), loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::TimeFormat;
use crate::status::StatusPalette;

/// Fixed configuration the builder is a pure function of, alongside its input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub value_axis_name: Option<String>,
    pub smooth: bool,
    pub show_symbol: bool,
    pub palette: StatusPalette,
    pub time: TimeFormat,
    pub logging: LoggingConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            value_axis_name: None,
            smooth: false,
            show_symbol: true,
            palette: StatusPalette::standard(),
            time: TimeFormat::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(s)?;
        config.time.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }
}
