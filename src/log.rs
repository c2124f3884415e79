// src/log.rs
use tracing_subscriber::EnvFilter;

/// Env var holding the filter directive (same syntax as `RUST_LOG`).
pub const LOG_ENV: &str = "RELIC_SCRAPE_LOG";

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Warn-level logging (recoverable: skipped lines, missing headings)
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
