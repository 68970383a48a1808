//! Tracing initialization.
//!
//! Human-readable events on stderr, so stdout stays clean for command output
//! (JSON lookups, suggestion tables). `RUST_LOG` overrides the default level.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Safe to call multiple times; only the first call takes effect.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
