//! # Query Service
//!
//! Input handling and orchestration shared by the HTTP API and the CLI.

pub mod errors;
pub mod request;
pub mod response;
pub mod handler;

pub use errors::{ServiceError, ServiceResult, MISSING_QUERY};
pub use request::QueryRequest;
pub use response::{ExplainResponse, QueryResponse, ValidateResponse, ValidationErrors};
pub use handler::QueryService;
