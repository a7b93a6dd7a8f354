#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use aura_api::config::ServerConfig;
use aura_api::router::build_app_router;
use aura_api::state::AppState;
use aura_core::JobRegistry;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no callback api key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        deploy_timeout_secs: 300,
        sweep_interval_secs: 10,
        api_key: None,
    }
}

/// Build the full application router with all middleware layers, sharing
/// the given registry.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(registry: Arc<JobRegistry>) -> Router {
    build_test_app_with_config(registry, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied config (e.g. to
/// enable the callback api-key check).
pub fn build_test_app_with_config(registry: Arc<JobRegistry>, config: ServerConfig) -> Router {
    let state = AppState {
        registry,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A minimal valid deploy request body.
pub fn valid_deploy_body() -> serde_json::Value {
    serde_json::json!({
        "edition": "vanilla",
        "version": "1.21.1",
        "motd": "✨ Vanilla 1.21.1 Server ✨",
        "ram": 2,
        "serverName": "vanilla-1-21-1-test",
        "gamemode": "survival",
        "difficulty": "normal",
        "maxPlayers": 20,
        "onlineMode": false,
        "loadingScreen": { "enabled": true, "type": "percentage", "percentage": 10 },
    })
}
