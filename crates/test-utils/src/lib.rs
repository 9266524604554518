//! Shared fixtures for dagview's integration tests.

pub mod builders;
pub mod recording_backend;

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// Output goes through `with_test_writer()`, so it only shows up for failing
/// tests (or with `-- --nocapture`). The filter comes from `RUST_LOG`, e.g.
/// `RUST_LOG=dagview::view=debug cargo test`, and defaults to `warn` so the
/// skipped-node warnings exercised by the tests stay visible.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
