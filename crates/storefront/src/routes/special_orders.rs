//! Special-order route handlers.
//!
//! The order form calls `quote` on every change for its live price preview,
//! then `checkout` once the customer pays the deposit. Both price through
//! the same calculator as the published price list.

use axum::{Json, extract::State};
use curls_core::{
    OrderConfiguration, PaymentInitiation, PriceBreakdown, PriceTable, SpecialOrderRequest,
    compute_price,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Response from a successful checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Hosted payment page to redirect the customer to.
    pub checkout_url: String,
    /// Prices the deposit was computed from.
    pub breakdown: PriceBreakdown,
}

/// Published special-order price list.
pub async fn pricing() -> Json<PriceTable> {
    Json(PriceTable::special_orders())
}

/// Price a configuration.
///
/// Incomplete configurations price at zero rather than failing.
#[instrument(skip_all, fields(texture = %config.texture, length = ?config.length_inches))]
pub async fn quote(Json(config): Json<OrderConfiguration>) -> Json<PriceBreakdown> {
    let breakdown = compute_price(&config);
    tracing::debug!(total = %breakdown.total_price, "Quoted special order");
    Json(breakdown)
}

/// Validate a special order and initiate its deposit payment.
#[instrument(skip_all, fields(texture = %request.texture, length = ?request.length_inches))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<SpecialOrderRequest>,
) -> Result<Json<CheckoutResponse>> {
    let breakdown = request.validate().inspect_err(|err| {
        tracing::info!(error = %err, "Special order rejected");
    })?;

    let payment = PaymentInitiation::special_order(&request, &breakdown);
    let checkout_url = state.payments().initiate(&payment).await?;

    tracing::info!(
        total = %breakdown.total_price,
        deposit = %breakdown.deposit_amount,
        "Special order checkout started"
    );

    Ok(Json(CheckoutResponse {
        checkout_url,
        breakdown,
    }))
}
