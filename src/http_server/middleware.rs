//! Auth Gate
//!
//! Runs the configured [`Authenticator`] before any route handler, so a
//! rejected request never reaches body parsing.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::auth::Authenticator;

use super::errors::ApiError;

/// Shared authenticator handle
pub type AuthState = Arc<dyn Authenticator>;

/// Reject unauthenticated requests with 401
pub async fn require_auth(State(auth): State<AuthState>, request: Request, next: Next) -> Response {
    match auth.authenticate(request.headers()) {
        Ok(()) => next.run(request).await,
        Err(e) => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                reason = %e,
                "Rejected request"
            );
            ApiError::from(e).into_response()
        }
    }
}
