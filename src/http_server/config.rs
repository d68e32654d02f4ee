//! HTTP Server Configuration
//!
//! Bind address, API key settings and CORS origins. Loadable from a JSON
//! file; every field has a default.

use std::fs;
use std::path::Path;

use axum::http::HeaderName;
use serde::{Deserialize, Serialize};

use crate::auth::{ApiKeyAuthenticator, DEFAULT_API_KEY, DEFAULT_API_KEY_HEADER};

use super::errors::{ServerError, ServerResult};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret every request must present (default: "secret-key")
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Header carrying the shared secret (default: "x-api-key")
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: default_api_key(),
            api_key_header: default_api_key_header(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> ServerResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ServerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: HttpServerConfig = serde_json::from_str(&content)
            .map_err(|e| ServerError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> ServerResult<()> {
        if self.port == 0 {
            return Err(ServerError::Config("port must be > 0".to_string()));
        }

        if self.api_key.is_empty() {
            return Err(ServerError::Config("api_key must not be empty".to_string()));
        }

        self.api_key_header_name()?;
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed API key header name
    pub fn api_key_header_name(&self) -> ServerResult<HeaderName> {
        HeaderName::from_bytes(self.api_key_header.as_bytes()).map_err(|_| {
            ServerError::Config(format!(
                "Invalid api_key_header: '{}'",
                self.api_key_header
            ))
        })
    }

    /// Authenticator matching the configured key and header
    pub fn authenticator(&self) -> ServerResult<ApiKeyAuthenticator> {
        Ok(ApiKeyAuthenticator::new(
            self.api_key_header_name()?,
            self.api_key.clone(),
        ))
    }
}
