//! Logging initialization for test binaries
//!
//! Test suites built on this harness call [`init`] once at the top of a
//! scenario (repeated calls are harmless) to get structured `tracing`
//! output, filtered through `RUST_LOG` when set.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber for the current process
///
/// Respects `RUST_LOG`; falls back to the harness default level otherwise.
/// Safe to call from every test.
pub fn init() {
    init_with_level(constants::logging::DEFAULT_LOG_LEVEL);
}

/// Initialize the tracing subscriber with an explicit fallback level
pub fn init_with_level(level: &str) {
    let directive = format!("scaffold_harness={level}");

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directive));

        // try_init: another subscriber may already be installed by the
        // surrounding test binary
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}
