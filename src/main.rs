//! pseudoql CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Errors go to stderr and
//! exit non-zero.

use pseudoql::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
