//! JSON I/O handling for the one-shot commands
//!
//! - Input: a single JSON object line on stdin
//! - Output: a single JSON object line on stdout

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::service::QueryRequest;

use super::errors::CliResult;

/// Read a query request from a reader
///
/// Blank or malformed input yields an empty request, which the service
/// rejects as a missing query. Only read failures are errors here.
pub fn read_request_from<R: BufRead>(reader: &mut R) -> CliResult<QueryRequest> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(QueryRequest::from_slice(line.trim().as_bytes()))
}

/// Write a success envelope
pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Write an error envelope
pub fn write_error_to<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
