//! Payment API wire types.
//!
//! The storefront does not talk to the payment gateway directly. It asks the
//! order API to initiate a payment, which returns a hosted checkout URL, and
//! later asks the same API to verify the transaction by reference.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::SpecialOrderRequest;
use crate::pricing::PriceBreakdown;
use crate::types::{CurrencyCode, GatewayStatus, PaymentKind, Texture};

/// Body of `POST /payments/initiate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInitiation {
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    /// Amount charged now. For special orders this is the deposit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub meta: SpecialOrderMeta,
}

/// Order details the order API stores against the transaction.
///
/// The order API reconciles these against its own price list, so the
/// amounts must be exactly what [`compute_price`](crate::compute_price)
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOrderMeta {
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub texture: Texture,
    pub colour: String,
    /// Length in inches, as the form submits it.
    pub length: String,
    pub double_drawn: bool,
    pub highlight: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deposit: Decimal,
    pub district: String,
}

impl PaymentInitiation {
    /// Build the deposit payment for a validated special order.
    ///
    /// `breakdown` should come from [`SpecialOrderRequest::validate`].
    #[must_use]
    pub fn special_order(request: &SpecialOrderRequest, breakdown: &PriceBreakdown) -> Self {
        let contact = &request.contact;
        Self {
            kind: PaymentKind::Special,
            amount: breakdown.deposit_amount,
            currency: CurrencyCode::MWK,
            first_name: contact.first_name.trim().to_string(),
            last_name: contact.last_name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone_number: contact.phone.trim().to_string(),
            meta: SpecialOrderMeta {
                kind: PaymentKind::Special,
                texture: request.texture,
                colour: request.colour.clone(),
                length: request
                    .length_inches
                    .map(|length| length.to_string())
                    .unwrap_or_default(),
                double_drawn: request.double_drawn,
                highlight: request.highlight,
                total_price: breakdown.total_price,
                shipping: breakdown.shipping_fee,
                deposit: breakdown.deposit_amount,
                district: contact.district.trim().to_string(),
            },
        }
    }
}

/// Response of `POST /payments/initiate`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Hosted checkout page. Absent when the gateway refused the payment.
    #[serde(default)]
    pub checkout_url: Option<String>,
}

/// Response of `GET /payments/verify/{tx_ref}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentVerification {
    #[serde(default)]
    pub paychangu_status: GatewayStatus,
}
