//! Curls Core - Special-order pricing and checkout types.
//!
//! This crate provides the pieces shared by the Curls components:
//! - `storefront` - JSON service backing the order form and payment callback
//! - `cli` - Operator tools for quoting orders and printing the price list
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Prices computed here must agree with the order API that later
//! reconciles the payment, so the price list lives in exactly one place.
//!
//! # Modules
//!
//! - [`pricing`] - Special-order price calculator and the printed price list
//! - [`checkout`] - Validation gate in front of payment
//! - [`payment`] - Payment API request and response bodies
//! - [`types`] - Money, texture and payment status types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod payment;
pub mod pricing;
pub mod types;

pub use checkout::{CheckoutError, CustomerContact, SpecialOrderRequest};
pub use payment::{CheckoutSession, PaymentInitiation, PaymentVerification, SpecialOrderMeta};
pub use pricing::{
    OrderConfiguration, PriceBreakdown, PriceTable, TextureFamily, base_price, compute_price,
};
pub use types::*;
