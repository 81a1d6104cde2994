//! Tracing/logging initialization.
//!
//! JSON output with `RUST_LOG`-driven filtering. The guard pipeline logs at
//! warn for the offline-auth fallback, info for permission decisions, and
//! error for remote-check transport failures.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering follows `RUST_LOG` (default `info`). Safe to call more than
/// once; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
