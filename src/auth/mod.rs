//! # Authentication
//!
//! Request authentication as a pluggable strategy. The HTTP layer only
//! depends on [`Authenticator`]; the shipped strategy is a static API key.

use axum::http::HeaderMap;

pub mod api_key;
pub mod errors;

pub use api_key::{ApiKeyAuthenticator, DEFAULT_API_KEY, DEFAULT_API_KEY_HEADER};
pub use errors::{AuthError, AuthResult};

/// Authentication strategy applied to every request before routing
pub trait Authenticator: Send + Sync + std::fmt::Debug {
    /// Accept or reject a request from its headers
    fn authenticate(&self, headers: &HeaderMap) -> AuthResult<()>;
}
