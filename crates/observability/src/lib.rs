//! Log setup for the VPayGo binaries.
//!
//! The server logs one JSON object per line on stdout at `info`. The client
//! logs compact lines on stderr so its table owns stdout. Both honour
//! `RUST_LOG`.

/// Server logging: JSON lines on stdout. Later calls are no-ops.
pub fn init() {
    tracing::init();
}

pub mod tracing;

pub use tracing::init_pretty;
