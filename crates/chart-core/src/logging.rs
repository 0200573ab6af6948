// File: crates/chart-core/src/logging.rs
// Summary: tracing subscriber setup for binaries and tests.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install a stderr subscriber. `RUST_LOG` overrides the configured level.
/// A second call (or an already-installed subscriber) is ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_ok() {
        tracing::debug!(level = %config.level, "logging initialized");
    }
}

/// Initialize logging for tests (captured by the test harness). Defaults to `trace`
/// so every event is formatted; `RUST_LOG` narrows it.
pub fn init_test() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
