//! Subscriber setup for debugging parser runs.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber once, and only when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=surge_parse=debug` (per-item and resync events) or
/// `RUST_LOG=surge_parse=trace` (every consumed token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
