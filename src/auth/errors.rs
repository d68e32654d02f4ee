//! # Auth Errors

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No credential header on the request
    #[error("Missing credential header '{0}'")]
    MissingCredentials(String),

    /// Credential present but does not match
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        401
    }
}
