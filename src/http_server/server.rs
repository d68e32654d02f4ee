//! # HTTP Server
//!
//! Builds the router (auth gate, tracing, CORS) around the query routes and
//! serves it until Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::auth::Authenticator;
use crate::service::QueryService;
use crate::store::Store;

use super::config::HttpServerConfig;
use super::errors::{ServerError, ServerResult};
use super::middleware::{require_auth, AuthState};
use super::query_routes::query_routes;

/// HTTP server for the query API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`, authenticating with the configured API key
    pub fn new(config: HttpServerConfig, store: Arc<dyn Store>) -> ServerResult<Self> {
        config.validate()?;
        let auth: AuthState = Arc::new(config.authenticator()?);
        Ok(Self::with_authenticator(config, store, auth))
    }

    /// Create a server with a custom authentication strategy
    pub fn with_authenticator(
        config: HttpServerConfig,
        store: Arc<dyn Store>,
        auth: Arc<dyn Authenticator>,
    ) -> Self {
        let service = Arc::new(QueryService::new(store));
        let router = Self::build_router(&config, service, auth);
        Self { config, router }
    }

    /// Build the router with all layers applied
    fn build_router(
        config: &HttpServerConfig,
        service: Arc<QueryService>,
        auth: AuthState,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // Outermost layer last: CORS, then tracing, then the auth gate
        query_routes(service)
            .layer(middleware::from_fn_with_state(auth, require_auth))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> ServerResult<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|_| ServerError::Address(self.config.socket_addr()))?;

        let listener = TcpListener::bind(addr).await?;
        info!("Server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
