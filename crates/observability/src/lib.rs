//! Tracing and logging (shared setup).

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(DEFAULT_DIRECTIVE);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
