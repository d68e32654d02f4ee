//! CLI argument definitions using clap
//!
//! Commands:
//! - pseudoql serve [--host H] [--port P] [--config <path>]
//! - pseudoql query
//! - pseudoql explain
//! - pseudoql validate

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::DEFAULT_LOG_LEVEL;

/// pseudoql - keyword-driven natural language to SQL over a demo database
#[derive(Parser, Debug)]
#[command(name = "pseudoql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL, env = "PSEUDOQL_LOG")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the demo database and serve the HTTP API
    Serve(ServeArgs),

    /// Read {"query": ...} from stdin, convert it and run it
    Query,

    /// Read {"query": ...} from stdin and explain the conversion
    Explain,

    /// Read {"query": ...} from stdin and validate the converted statement
    Validate,
}

/// Options for `serve`. Flags override values from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 3000)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from(["pseudoql", "serve", "--port", "8080", "--host", "127.0.0.1"])
            .unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_one_shot_commands() {
        for (name, expect_query) in [("query", true), ("explain", false), ("validate", false)] {
            let cli = Cli::try_parse_from(["pseudoql", name]).unwrap();
            assert_eq!(matches!(cli.command, Command::Query), expect_query);
        }
    }

    #[test]
    fn test_log_level_is_global() {
        let cli = Cli::try_parse_from(["pseudoql", "explain", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["pseudoql", "serve", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
