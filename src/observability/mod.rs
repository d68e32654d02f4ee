//! Observability
//!
//! Structured logging through `tracing`. Request-level logs come from the
//! HTTP trace layer; the rest of the crate logs with the `tracing` macros.

mod logging;

pub use logging::{init_logging, log_filter, DEFAULT_LOG_LEVEL};
