//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize a stderr tracing subscriber. Safe to call multiple times.
///
/// The library itself only emits events; nothing here runs unless a test or
/// embedding application opts in. Filtering follows `RUST_LOG`, defaulting
/// to `debug` so test runs show the executor's candidate/result counts.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_test_writer()
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
