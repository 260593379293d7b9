//! Process-wide tracing/logging setup for finbooks binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// JSON lines with timestamps; the filter comes from `RUST_LOG` and falls
/// back to `info`. Safe to call multiple times (subsequent calls are
/// no-ops), so tests and the server can share it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
