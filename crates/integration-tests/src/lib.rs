//! Integration tests for Curls.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p curls-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `special_order_pricing` - Price list and calculator agreement
//! - `storefront_api` - Storefront HTTP API against a mocked order API
//!
//! No external services are needed: the order API is replaced by a
//! `wiremock` server and requests go straight into the router.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use curls_storefront::config::{OrderApiConfig, StorefrontConfig};
use curls_storefront::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// Build the storefront application pointed at `api_url`.
///
/// # Panics
///
/// Panics if `api_url` is not a valid URL.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_app(api_url: &str) -> Router {
    let config = StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        api: OrderApiConfig {
            base_url: api_url.parse().expect("invalid test API URL"),
            timeout: Duration::from_secs(5),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    };
    let state = AppState::new(&config).expect("failed to build test state");
    curls_storefront::app(state)
}

/// Send a request and return the status and JSON body.
///
/// Non-JSON bodies are returned as a JSON string.
///
/// # Panics
///
/// Panics if the router fails to respond or the body cannot be read.
#[allow(clippy::expect_used)]
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router error");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

/// Build a `GET` request.
///
/// # Panics
///
/// Panics if `uri` is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .body(Body::empty())
        .expect("invalid request")
}

/// Build a JSON `POST` request.
///
/// # Panics
///
/// Panics if `uri` is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("invalid request")
}
