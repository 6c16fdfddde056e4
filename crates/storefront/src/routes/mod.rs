//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Special orders
//! GET  /api/special-orders/pricing    - Price list
//! POST /api/special-orders/quote      - Price a configuration (live preview)
//! POST /api/special-orders/checkout   - Validate and initiate the deposit payment
//!
//! # Payments
//! GET  /payments/callback             - Verify a gateway redirect (tx_ref, type)
//! ```

pub mod payments;
pub mod special_orders;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the special-order routes router.
pub fn special_order_routes() -> Router<AppState> {
    Router::new()
        .route("/pricing", get(special_orders::pricing))
        .route("/quote", post(special_orders::quote))
        .route("/checkout", post(special_orders::checkout))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/callback", get(payments::callback))
}

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/special-orders", special_order_routes())
        .nest("/payments", payment_routes())
}

/// Build the complete application with middleware and state.
///
/// The order form is served from a separate origin, so CORS is open for the
/// JSON endpoints.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
