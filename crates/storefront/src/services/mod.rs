//! Clients for external services.

pub mod payments;

pub use payments::{PaymentClient, PaymentError};
