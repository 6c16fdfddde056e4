//! Payment gateway callback.
//!
//! After paying, the gateway sends the customer back with a transaction
//! reference. The storefront verifies it with the order API and tells the
//! page where to go next.

use axum::{
    Json,
    extract::{Query, State},
};
use curls_core::{GatewayStatus, PaymentKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters appended by the gateway redirect.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub tx_ref: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Verification outcome for the callback page.
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub status: GatewayStatus,
    pub message: &'static str,
    /// Confirmation page, present only for successful payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Verify a transaction after the gateway redirect.
#[instrument(skip_all, fields(tx_ref = ?params.tx_ref, kind = ?params.kind))]
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<CallbackResponse>> {
    let tx_ref = params
        .tx_ref
        .filter(|tx_ref| !tx_ref.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Transaction reference missing.".to_string()))?;
    let kind = PaymentKind::from_callback(params.kind.as_deref());

    let verification = state
        .payments()
        .verify(&tx_ref)
        .await
        .map_err(AppError::Verification)?;

    let response = match verification.paychangu_status {
        GatewayStatus::Success => CallbackResponse {
            status: GatewayStatus::Success,
            message: "Payment successful! Redirecting to confirmation...",
            redirect: Some(kind.confirmation_path(&tx_ref)),
        },
        GatewayStatus::Pending => CallbackResponse {
            status: GatewayStatus::Pending,
            message: "Payment is still pending. Please wait a few minutes.",
            redirect: None,
        },
        GatewayStatus::Failed => CallbackResponse {
            status: GatewayStatus::Failed,
            message: "Payment failed or cancelled. Please try again.",
            redirect: None,
        },
    };

    tracing::info!(status = ?response.status, %kind, "Payment callback handled");
    Ok(Json(response))
}
