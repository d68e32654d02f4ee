//! # Shared-Secret API Key
//!
//! Compares a single request header against a static key.

use axum::http::{HeaderMap, HeaderName};
use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};
use super::Authenticator;

/// Header checked when none is configured
pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Key accepted when none is configured
pub const DEFAULT_API_KEY: &str = "secret-key";

/// Static shared-secret authenticator
#[derive(Clone)]
pub struct ApiKeyAuthenticator {
    header: HeaderName,
    key: String,
}

impl ApiKeyAuthenticator {
    pub fn new(header: HeaderName, key: impl Into<String>) -> Self {
        Self {
            header,
            key: key.into(),
        }
    }

    /// Name of the header carrying the key
    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for ApiKeyAuthenticator {
    fn default() -> Self {
        Self::new(HeaderName::from_static(DEFAULT_API_KEY_HEADER), DEFAULT_API_KEY)
    }
}

// The key never appears in debug output
impl std::fmt::Debug for ApiKeyAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuthenticator")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl Authenticator for ApiKeyAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> AuthResult<()> {
        let provided = headers
            .get(&self.header)
            .ok_or_else(|| AuthError::MissingCredentials(self.header.to_string()))?;

        if bool::from(provided.as_bytes().ct_eq(self.key.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: &'static str, value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_correct_key_passes() {
        let auth = ApiKeyAuthenticator::default();
        assert!(auth.authenticate(&headers_with("x-api-key", "secret-key")).is_ok());
    }

    #[test]
    fn test_missing_header() {
        let auth = ApiKeyAuthenticator::default();
        assert_eq!(
            auth.authenticate(&HeaderMap::new()),
            Err(AuthError::MissingCredentials("x-api-key".to_string()))
        );
    }

    #[test]
    fn test_wrong_key() {
        let auth = ApiKeyAuthenticator::default();
        assert_eq!(
            auth.authenticate(&headers_with("x-api-key", "secret")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.authenticate(&headers_with("x-api-key", "secret-key-2")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.authenticate(&headers_with("x-api-key", "")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let auth = ApiKeyAuthenticator::default();
        assert!(auth.authenticate(&headers_with("x-api-key", "SECRET-KEY")).is_err());
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        // HeaderMap normalizes names to lower case
        let auth = ApiKeyAuthenticator::new(HeaderName::from_static("x-token"), "abc");
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"X-Token").unwrap(),
            HeaderValue::from_static("abc"),
        );
        assert!(auth.authenticate(&headers).is_ok());
    }

    #[test]
    fn test_debug_hides_key() {
        let auth = ApiKeyAuthenticator::new(HeaderName::from_static("x-api-key"), "hunter2");
        assert!(!format!("{:?}", auth).contains("hunter2"));
    }
}
