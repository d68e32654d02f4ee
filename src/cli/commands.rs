//! CLI command implementations
//!
//! `serve` runs the HTTP API. The one-shot commands run the same request flow
//! against a freshly seeded store and print one JSON envelope.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;
use crate::service::{QueryRequest, QueryService, ServiceError, ServiceResult};
use crate::store::{SeedStore, Store};

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};
use super::io::{read_request_from, write_error_to, write_response_to};

/// Parse arguments, set up logging and run the chosen command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(&cli.log_level);
    run_command(cli.command).await
}

/// Run the appropriate command based on CLI args
pub async fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args).await,
        Command::Query | Command::Explain | Command::Validate => one_shot(&cmd).await,
    }
}

/// Merge the config file (if any) with flag and environment overrides
pub fn resolve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Seed the store and serve until Ctrl-C
pub async fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let store: Arc<dyn Store> = Arc::new(SeedStore::open_in_memory()?);
    let tables = store.table_names()?;

    let server = HttpServer::new(config, store)?;
    info!(addr = %server.socket_addr(), ?tables, "Starting query API");
    server.start().await?;

    Ok(())
}

/// Read one request from stdin, run it, print the envelope
pub async fn one_shot(cmd: &Command) -> CliResult<()> {
    let store: Arc<dyn Store> = Arc::new(SeedStore::open_in_memory()?);
    let service = QueryService::new(store);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    one_shot_with(&service, cmd, &mut input, &mut output).await
}

/// One-shot flow over any reader and writer. Every service outcome,
/// including a missing or unreadable query, is written as an envelope.
pub async fn one_shot_with<R: BufRead, W: Write>(
    service: &QueryService,
    cmd: &Command,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let request = read_request_from(input)?;

    match execute(service, cmd, &request).await {
        Ok(data) => write_response_to(output, data),
        Err(e) => {
            write_error_to(output, e.code(), &e.to_string())?;
            Err(CliError::from(e))
        }
    }
}

/// Dispatch a one-shot command to the service
pub async fn execute(
    service: &QueryService,
    cmd: &Command,
    request: &QueryRequest,
) -> ServiceResult<Value> {
    let input = request.text()?;
    match cmd {
        Command::Query => to_json(service.query(input).await?),
        Command::Explain => to_json(service.explain(input)?),
        Command::Validate => to_json(service.validate(input).await?),
        Command::Serve(_) => Err(ServiceError::Internal(
            "serve is not a one-shot command".to_string(),
        )),
    }
}

fn to_json<T: Serialize>(response: T) -> ServiceResult<Value> {
    serde_json::to_value(response).map_err(|e| ServiceError::Internal(e.to_string()))
}
