//! Shared test helpers

use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber; honours RUST_LOG, safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
