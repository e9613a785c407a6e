//! Tracing/logging initialization.
//!
//! Logs go to stderr as JSON; stdout is left to the simulation report.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set and valid, otherwise `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn init_with(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
