//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{PaymentClient, PaymentError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the order API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    payments: PaymentClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the order API HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, PaymentError> {
        let payments = PaymentClient::new(&config.api)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { payments }),
        })
    }

    /// Get a reference to the order API payment client.
    #[must_use]
    pub fn payments(&self) -> &PaymentClient {
        &self.inner.payments
    }
}
