//! Shared setup for the exercise binaries.

use tracing_subscriber::EnvFilter;

/// Initializes the console tracing subscriber.
///
/// Defaults to `info`; override with `RUST_LOG` (e.g. `RUST_LOG=debug`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
