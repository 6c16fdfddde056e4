//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use curls_core::CheckoutError;
use serde::Serialize;
use thiserror::Error;

use crate::services::PaymentError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Special order failed checkout validation.
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    /// Order API payment operation failed.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Order API could not confirm a transaction after a gateway redirect.
    #[error("Verification error: {0}")]
    Verification(#[source] PaymentError),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Payment(_) | Self::Verification(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Checkout(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Payment(_) | Self::Verification(_) => StatusCode::BAD_GATEWAY,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Payment(_) => "Payment service error".to_string(),
            Self::Verification(_) => "Error verifying payment. Please contact support.".to_string(),
            Self::Checkout(err) => err.to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
