//! Tracing setup for embedding applications and tests.
//!
//! The library itself only emits `tracing` events; initializing a
//! subscriber is the embedding application's call. This helper wires a
//! plain stderr subscriber with `RUST_LOG`-style filtering for hosts
//! that have no subscriber of their own.

use tracing_subscriber::EnvFilter;

/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initializes a stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Safe to call more
/// than once; subsequent calls are no-ops.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(DEFAULT_LOG_LEVEL);
        init("debug");
    }
}
