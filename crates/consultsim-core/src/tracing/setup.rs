//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the consultsim tracing/logging system.
///
/// Reads `CONSULTSIM_LOG` for per-crate log levels, e.g.
/// `CONSULTSIM_LOG=consultsim_synth=debug,consultsim_storage=warn`.
///
/// Falls back to `consultsim=info` if `CONSULTSIM_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CONSULTSIM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("consultsim=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
