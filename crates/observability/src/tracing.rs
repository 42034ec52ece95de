//! Subscriber construction for the two log modes.

use tracing_subscriber::EnvFilter;

fn filter_or(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// JSON lines with wall-clock timestamps, filtered by `RUST_LOG` or `info`.
///
/// Returns quietly if a global subscriber is already set.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Compact human-readable lines on stderr, for the terminal client.
///
/// `default_directive` applies when `RUST_LOG` is unset (the client passes
/// `debug` under `--verbose`).
pub fn init_pretty(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(default_directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
