//! Tracing subscriber initialization.
//!
//! `RUST_LOG` wins over the default filter, e.g. `RUST_LOG=sgc_auth=debug`
//! shows every guard decision.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Filter for the guard binaries: `RUST_LOG` if it parses, else `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Route guard decision events to stderr as JSON lines.
///
/// The first subscriber installed stays in place; repeated calls do nothing.
pub fn init(default_filter: &str) {
    // stdout carries the `sgc-guard` explanations
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
