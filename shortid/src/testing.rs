//! Helper functions for tests and downstream test suites.

use tracing_subscriber::EnvFilter;

/// Installs a tracing subscriber for test output.
///
/// Honors `RUST_LOG` when set and otherwise enables debug output for this
/// crate. Safe to call from every test; only the first call installs.
pub fn set_up_logging() {
    let dirs = "info,shortid=debug";

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with_test_writer()
        .try_init();
}
