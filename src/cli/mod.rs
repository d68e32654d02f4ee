//! CLI module for pseudoql
//!
//! Provides command-line interface for:
//! - serve: Seed the demo database and run the HTTP API
//! - query / explain / validate: One-shot request over stdin/stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{execute, one_shot, one_shot_with, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request_from, write_error_to, write_response_to};
