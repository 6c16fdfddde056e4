//! Order API client for payment initiation and verification.
//!
//! The order API wraps the payment gateway: it creates a hosted checkout for
//! a deposit and later reports the gateway's verdict for a transaction
//! reference.

use curls_core::{CheckoutSession, PaymentInitiation, PaymentVerification};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::OrderApiConfig;

/// Errors that can occur when interacting with the order API.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Payment was accepted but no checkout page was returned.
    #[error("Payment API returned no checkout URL")]
    MissingCheckoutUrl,
}

/// Order API client for payments.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PaymentClient {
    /// Create a new order API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &OrderApiConfig) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("curls-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Initiate a payment and return the hosted checkout URL.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API rejects it, or the
    /// response carries no checkout URL.
    #[instrument(skip(self, payment), fields(kind = %payment.kind, amount = %payment.amount))]
    pub async fn initiate(&self, payment: &PaymentInitiation) -> Result<String, PaymentError> {
        let url = self.endpoint(&["payments", "initiate"]);

        let response = self.client.post(url).json(payment).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %message, "Payment initiation rejected");
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: CheckoutSession = response.json().await?;
        let checkout_url = session
            .checkout_url
            .filter(|url| !url.is_empty())
            .ok_or(PaymentError::MissingCheckoutUrl)?;

        tracing::info!("Payment initiated");
        Ok(checkout_url)
    }

    /// Ask the order API for the gateway status of a transaction.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn verify(&self, tx_ref: &str) -> Result<PaymentVerification, PaymentError> {
        let url = self.endpoint(&["payments", "verify", tx_ref]);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let verification: PaymentVerification = response.json().await?;
        tracing::info!(status = ?verification.paychangu_status, "Payment verified");
        Ok(verification)
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are validated as http(s) in config, so they always have segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use curls_core::{
        CustomerContact, GatewayStatus, SpecialOrderRequest, Texture,
    };
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(base_url: &str) -> PaymentClient {
        PaymentClient::new(&OrderApiConfig {
            base_url: base_url.parse().unwrap(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn payment() -> PaymentInitiation {
        let request = SpecialOrderRequest {
            texture: Texture::Straight,
            colour: "brown_highlights".to_string(),
            length_inches: Some(12),
            double_drawn: false,
            highlight: false,
            contact: CustomerContact {
                first_name: "Chikondi".to_string(),
                last_name: "Banda".to_string(),
                email: "chikondi@example.com".to_string(),
                phone: "0999123456".to_string(),
                district: "Zomba".to_string(),
            },
            agreed_to_terms: true,
        };
        let breakdown = request.validate().unwrap();
        PaymentInitiation::special_order(&request, &breakdown)
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = client("http://localhost:8080/api");
        assert_eq!(
            api.endpoint(&["payments", "initiate"]).as_str(),
            "http://localhost:8080/api/payments/initiate"
        );

        let root = client("http://localhost:8080/");
        assert_eq!(
            root.endpoint(&["payments", "verify", "TX 1/2"]).as_str(),
            "http://localhost:8080/payments/verify/TX%201%2F2"
        );
    }

    #[tokio::test]
    async fn test_initiate_returns_checkout_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/initiate"))
            .and(body_partial_json(json!({
                "type": "special",
                "currency": "MWK",
                "amount": 206_500.0,
                "meta": { "totalPrice": 413_000.0, "shipping": 18_000.0 }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"checkout_url": "https://pay.example/c/abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let url = client(&server.uri()).initiate(&payment()).await.unwrap();
        assert_eq!(url, "https://pay.example/c/abc");
    }

    #[tokio::test]
    async fn test_initiate_without_checkout_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/initiate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "error"})))
            .mount(&server)
            .await;

        let err = client(&server.uri()).initiate(&payment()).await.unwrap_err();
        assert!(matches!(err, PaymentError::MissingCheckoutUrl));
    }

    #[tokio::test]
    async fn test_initiate_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/initiate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway down"))
            .mount(&server)
            .await;

        let err = client(&server.uri()).initiate(&payment()).await.unwrap_err();
        match err {
            PaymentError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "gateway down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_verify_parses_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payments/verify/TX-42"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"paychangu_status": "pending"})),
            )
            .mount(&server)
            .await;

        let verification = client(&server.uri()).verify("TX-42").await.unwrap();
        assert_eq!(verification.paychangu_status, GatewayStatus::Pending);
    }

    #[tokio::test]
    async fn test_verify_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payments/verify/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server.uri()).verify("missing").await.unwrap_err();
        assert!(matches!(err, PaymentError::Api { status: 404, .. }));
    }
}
