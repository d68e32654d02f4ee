//! Tracing subscriber setup
//!
//! Log lines go to stderr so the one-shot CLI commands keep stdout for their
//! JSON response.

use tracing_subscriber::EnvFilter;

/// Default filter when none is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter for `level`.
///
/// A bare level ("debug") is scoped to this crate and the HTTP trace layer;
/// anything containing '=' or ',' is taken as a full filter directive.
pub fn log_filter(level: &str) -> EnvFilter {
    let directive = if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("pseudoql={level},tower_http={level}")
    };

    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
