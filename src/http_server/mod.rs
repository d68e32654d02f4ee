//! # HTTP Server Module
//!
//! Axum server exposing the query API. Every route sits behind the auth gate.
//!
//! # Endpoints
//!
//! - `POST /query` - Convert input to SQL and run it
//! - `POST /explain` - Explain the conversion
//! - `POST /validate` - Check the converted statement's table

pub mod config;
pub mod errors;
pub mod middleware;
pub mod query_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse, ServerError, ServerResult};
pub use server::HttpServer;
