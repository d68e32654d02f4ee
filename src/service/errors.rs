//! # Service Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Message returned when the request has no usable `query`
pub const MISSING_QUERY: &str = "Missing 'query' in request body.";

/// Request processing errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// `query` absent, empty, or not a string
    #[error("Missing 'query' in request body.")]
    MissingQuery,

    /// The store failed to execute or look up
    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    /// Anything else, e.g. a blocking task that panicked
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::MissingQuery => 400,
            ServiceError::Store(_) | ServiceError::Internal(_) => 500,
        }
    }

    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::MissingQuery => "PSEUDOQL_MISSING_QUERY",
            ServiceError::Store(_) => "PSEUDOQL_STORE_ERROR",
            ServiceError::Internal(_) => "PSEUDOQL_INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_message() {
        assert_eq!(ServiceError::MissingQuery.to_string(), MISSING_QUERY);
        assert_eq!(ServiceError::MissingQuery.status_code(), 400);
    }

    #[test]
    fn test_store_error_is_prefixed() {
        let err = ServiceError::from(StoreError::LockPoisoned);
        assert_eq!(err.to_string(), "Database error: Connection lock poisoned");
        assert_eq!(err.status_code(), 500);
    }
}
