//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with an env-filter.
///
/// Falls back to `info` when `RUST_LOG` is unset. Safe to call more than
/// once — later calls are no-ops, which lets every integration test invoke
/// it without coordination.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
