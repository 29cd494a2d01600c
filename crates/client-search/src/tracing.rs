//! Logging setup.
//!
//! Logs go to stderr so JSON and CSV on stdout stay machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the default `warn` filter.
pub fn init() {
    init_with_filter("warn");
}

/// Initialize tracing with a custom default filter. `RUST_LOG` wins when set.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Repeat initialization is ignored.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// Map a `--log-level` value onto a filter directive.
pub fn filter_for_level(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "error" => "error",
        _ => "warn",
    }
}
