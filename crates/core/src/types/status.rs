//! Payment kinds and gateway statuses.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// What a payment is for.
///
/// Carried as the `type` field when a payment is initiated and echoed back
/// on the gateway callback so the customer lands on the right confirmation
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Ready-made wig from the international catalogue.
    International,
    /// Custom special order priced by the special-order calculator.
    Special,
    /// Wig rental booking.
    #[default]
    Booking,
}

impl PaymentKind {
    /// Resolve the `type` query parameter of a gateway callback.
    ///
    /// Anything other than `international` or `special` is treated as a
    /// booking, matching how rentals are redirected.
    #[must_use]
    pub fn from_callback(value: Option<&str>) -> Self {
        match value {
            Some("international") => Self::International,
            Some("special") => Self::Special,
            _ => Self::Booking,
        }
    }

    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::International => "international",
            Self::Special => "special",
            Self::Booking => "booking",
        }
    }

    /// The confirmation page for a successful payment.
    ///
    /// The reference is form-encoded so it stays a single query value.
    #[must_use]
    pub fn confirmation_path(self, tx_ref: &str) -> String {
        let page = match self {
            Self::International => "/orders/order-confirmation",
            Self::Special => "/orders/special-order-confirmation",
            Self::Booking => "/rent/booking-confirmation",
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("tx_ref", tx_ref)
            .finish();
        format!("{page}?{query}")
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction status reported by the payment gateway.
///
/// The gateway may report statuses beyond `success` and `pending`; all of
/// them mean the payment did not go through, as does a missing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum GatewayStatus {
    Success,
    Pending,
    #[default]
    Failed,
}

impl From<&str> for GatewayStatus {
    fn from(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "pending" => Self::Pending,
            _ => Self::Failed,
        }
    }
}

impl From<String> for GatewayStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_callback() {
        assert_eq!(
            PaymentKind::from_callback(Some("international")),
            PaymentKind::International
        );
        assert_eq!(
            PaymentKind::from_callback(Some("special")),
            PaymentKind::Special
        );
        assert_eq!(
            PaymentKind::from_callback(Some("rental")),
            PaymentKind::Booking
        );
        assert_eq!(PaymentKind::from_callback(None), PaymentKind::Booking);
    }

    #[test]
    fn test_confirmation_paths() {
        assert_eq!(
            PaymentKind::Special.confirmation_path("TX-1"),
            "/orders/special-order-confirmation?tx_ref=TX-1"
        );
        assert_eq!(
            PaymentKind::International.confirmation_path("TX-2"),
            "/orders/order-confirmation?tx_ref=TX-2"
        );
        assert_eq!(
            PaymentKind::Booking.confirmation_path("TX-3"),
            "/rent/booking-confirmation?tx_ref=TX-3"
        );
    }

    #[test]
    fn test_confirmation_path_encodes_reference() {
        assert_eq!(
            PaymentKind::Special.confirmation_path("A&type=x#frag"),
            "/orders/special-order-confirmation?tx_ref=A%26type%3Dx%23frag"
        );
        assert_eq!(
            PaymentKind::Booking.confirmation_path("TX 7"),
            "/rent/booking-confirmation?tx_ref=TX+7"
        );
    }

    #[test]
    fn test_gateway_status_unknown_is_failed() {
        let status: GatewayStatus = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(status, GatewayStatus::Success);
        let status: GatewayStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, GatewayStatus::Pending);
        let status: GatewayStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, GatewayStatus::Failed);
    }

    #[test]
    fn test_gateway_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&GatewayStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
