//! Query HTTP Routes
//!
//! `/query`, `/explain` and `/validate`. Bodies are read as raw bytes and
//! decoded leniently: anything without a usable `query` string gets 400.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};

use crate::service::{ExplainResponse, QueryRequest, QueryResponse, QueryService, ValidateResponse};

use super::errors::ApiError;

/// Create query routes
pub fn query_routes(service: Arc<QueryService>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .route("/explain", post(explain_handler))
        .route("/validate", post(validate_handler))
        .with_state(service)
}

/// Convert the input and run the resulting statement
async fn query_handler(
    State(service): State<Arc<QueryService>>,
    body: Bytes,
) -> Result<Json<QueryResponse>, ApiError> {
    let request = QueryRequest::from_slice(&body);
    let response = service.query(request.text()?).await?;
    Ok(Json(response))
}

/// Explain the conversion without executing it
async fn explain_handler(
    State(service): State<Arc<QueryService>>,
    body: Bytes,
) -> Result<Json<ExplainResponse>, ApiError> {
    let request = QueryRequest::from_slice(&body);
    let response = service.explain(request.text()?)?;
    Ok(Json(response))
}

/// Check that the converted statement names an existing table
async fn validate_handler(
    State(service): State<Arc<QueryService>>,
    body: Bytes,
) -> Result<Json<ValidateResponse>, ApiError> {
    let request = QueryRequest::from_slice(&body);
    let response = service.validate(request.text()?).await?;
    Ok(Json(response))
}
