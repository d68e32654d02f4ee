//! HTTP API Tests
//!
//! Drives the full router (auth gate, routes, store) in-process:
//! - Exact payloads for the three endpoints
//! - 400 for missing input on every endpoint
//! - 401 before any handler logic runs
//! - 500 when the store fails or `query` is a non-string value

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pseudoql::auth::{AuthError, AuthResult, Authenticator};
use pseudoql::http_server::{HttpServer, HttpServerConfig};
use pseudoql::store::{Record, SeedStore, Store, StoreError, StoreResult};

// =============================================================================
// Helper Functions
// =============================================================================

const ENDPOINTS: [&str; 3] = ["/query", "/explain", "/validate"];

fn router() -> Router {
    let store: Arc<dyn Store> = Arc::new(SeedStore::open_in_memory().unwrap());
    HttpServer::new(HttpServerConfig::default(), store)
        .unwrap()
        .router()
}

fn request(path: &str, api_key: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(body.into()).unwrap()
}

async fn send(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post(path: &str, body: Value) -> (StatusCode, Value) {
    send(router(), request(path, Some("secret-key"), body.to_string())).await
}

// =============================================================================
// /query
// =============================================================================

#[tokio::test]
async fn test_query_total_sales() {
    let (status, body) = post("/query", json!({"query": "show me total sales"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "pseudo_sql": "SELECT SUM(amount) as total_sales FROM sales;",
            "data": [{"total_sales": 1200}]
        })
    );
}

#[tokio::test]
async fn test_query_customers_returns_seed_rows() {
    let (status, body) = post("/query", json!({"query": "list customers"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pseudo_sql"], "SELECT * FROM customers;");
    assert_eq!(
        body["data"],
        json!([
            {"id": 1, "name": "Alice", "email": "alice@example.com"},
            {"id": 2, "name": "Bob", "email": "bob@example.com"}
        ])
    );
}

#[tokio::test]
async fn test_query_fallback_returns_sales() {
    let (status, body) = post("/query", json!({"query": "How did the North do?"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pseudo_sql"], "SELECT * FROM sales;");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["region"], "North");
    assert_eq!(body["data"][1]["amount"], 700);
}

// =============================================================================
// /explain
// =============================================================================

#[tokio::test]
async fn test_explain_fallback() {
    let (status, body) = post("/explain", json!({"query": "anything else"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"explanation": "Default conversion: SELECT * FROM sales; as a fallback."})
    );
}

#[tokio::test]
async fn test_explain_total_sales_any_case() {
    let (_, body) = post("/explain", json!({"query": "TOTAL Sales please"})).await;

    assert_eq!(
        body["explanation"],
        "Converted to: SELECT SUM(amount) as total_sales FROM sales; because 'total sales' implies aggregation on the 'amount' column of the 'sales' table."
    );
}

// =============================================================================
// /validate
// =============================================================================

/// Both possible target tables always exist, so every input validates.
#[tokio::test]
async fn test_validate_is_always_valid() {
    for input in ["total sales", "customer emails", "anything", "FROM nowhere"] {
        let (status, body) = post("/validate", json!({"query": input})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"valid": true}), "input {input:?}");
    }
}

// =============================================================================
// Missing Input
// =============================================================================

#[tokio::test]
async fn test_missing_query_on_every_endpoint() {
    for path in ENDPOINTS {
        for body in [json!({}), json!({"query": ""}), json!({"question": "total sales"})] {
            let (status, response) = post(path, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(
                response,
                json!({"error": "Missing 'query' in request body."})
            );
        }
    }
}

#[tokio::test]
async fn test_non_json_body_is_missing_query() {
    for path in ENDPOINTS {
        let (status, body) = send(router(), request(path, Some("secret-key"), "total sales")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing 'query' in request body.");
    }
}

/// Falsy values count as missing; other non-string values fail the request.
#[tokio::test]
async fn test_falsy_query_is_missing() {
    for query in [Value::Null, json!(false), json!(0)] {
        let (status, body) = post("/query", json!({"query": query})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");
        assert_eq!(body["error"], "Missing 'query' in request body.");
    }
}

#[tokio::test]
async fn test_non_string_query_is_500() {
    let (status, body) = post("/query", json!({"query": 42})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "query must be a string, got number"}));

    for query in [json!(true), json!(["total sales"]), json!({"a": 1})] {
        for path in ENDPOINTS {
            let (status, body) = post(path, json!({"query": query})).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{path} {query}");
            assert_ne!(body["error"], "Missing 'query' in request body.");
        }
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_missing_api_key_is_unauthorized() {
    for path in ENDPOINTS {
        let body = json!({"query": "total sales"}).to_string();
        let (status, response) = send(router(), request(path, None, body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response, json!({"error": "Unauthorized"}));
    }
}

#[tokio::test]
async fn test_wrong_api_key_is_unauthorized() {
    let body = json!({"query": "total sales"}).to_string();
    let (status, response) = send(router(), request("/query", Some("secret"), body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response, json!({"error": "Unauthorized"}));
}

/// Auth runs before body handling: a bad body without a key is still 401.
#[tokio::test]
async fn test_auth_checked_before_body() {
    let (status, response) = send(router(), request("/query", None, "")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"], "Unauthorized");
}

#[tokio::test]
async fn test_configured_key_and_header() {
    let config = HttpServerConfig {
        api_key: "rotated".to_string(),
        api_key_header: "x-demo-key".to_string(),
        ..Default::default()
    };
    let store: Arc<dyn Store> = Arc::new(SeedStore::open_in_memory().unwrap());
    let router = HttpServer::new(config, store).unwrap().router();

    // The default header no longer authenticates
    let body = json!({"query": "total sales"}).to_string();
    let (status, _) = send(router.clone(), request("/explain", Some("secret-key"), body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("POST")
        .uri("/explain")
        .header("x-demo-key", "rotated")
        .body(Body::from(body))
        .unwrap();
    let (status, _) = send(router, req).await;
    assert_eq!(status, StatusCode::OK);
}

/// Accepts requests carrying a fixed bearer token.
#[derive(Debug)]
struct BearerAuthenticator(&'static str);

impl Authenticator for BearerAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> AuthResult<()> {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AuthError::MissingCredentials("authorization".to_string()))?;

        match value.strip_prefix("Bearer ") {
            Some(token) if token == self.0 => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

#[tokio::test]
async fn test_pluggable_authenticator() {
    let store: Arc<dyn Store> = Arc::new(SeedStore::open_in_memory().unwrap());
    let router = HttpServer::with_authenticator(
        HttpServerConfig::default(),
        store,
        Arc::new(BearerAuthenticator("t0ken")),
    )
    .router();

    let body = json!({"query": "list customers"}).to_string();

    let (status, _) = send(router.clone(), request("/query", Some("secret-key"), body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("POST")
        .uri("/query")
        .header("authorization", "Bearer t0ken")
        .body(Body::from(body))
        .unwrap();
    let (status, response) = send(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["pseudo_sql"], "SELECT * FROM customers;");
}

// =============================================================================
// Store Failures
// =============================================================================

#[derive(Debug)]
struct UnavailableStore;

impl Store for UnavailableStore {
    fn fetch_all(&self, _sql: &str) -> StoreResult<Vec<Record>> {
        Err(StoreError::LockPoisoned)
    }

    fn has_table(&self, _name: &str) -> StoreResult<bool> {
        Err(StoreError::LockPoisoned)
    }

    fn table_names(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::LockPoisoned)
    }
}

fn broken_router() -> Router {
    HttpServer::new(HttpServerConfig::default(), Arc::new(UnavailableStore))
        .unwrap()
        .router()
}

#[tokio::test]
async fn test_store_failure_is_500() {
    for path in ["/query", "/validate"] {
        let body = json!({"query": "total sales"}).to_string();
        let (status, response) = send(broken_router(), request(path, Some("secret-key"), body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        assert_eq!(
            response,
            json!({"error": "Database error: Connection lock poisoned"})
        );
    }
}

#[tokio::test]
async fn test_explain_survives_store_failure() {
    let body = json!({"query": "total sales"}).to_string();
    let (status, _) = send(broken_router(), request("/explain", Some("secret-key"), body)).await;
    assert_eq!(status, StatusCode::OK);
}
