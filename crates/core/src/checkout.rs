//! Special-order checkout validation.
//!
//! The price calculator accepts any configuration so the form can show a
//! live preview. This module is the gate in front of payment: an order must
//! be complete, the customer must have accepted the terms, and the chosen
//! length must be offered for the chosen texture before a deposit is
//! requested.

use serde::{Deserialize, Serialize};

use crate::pricing::{OrderConfiguration, PriceBreakdown, compute_price};
use crate::types::Texture;

/// Reasons a special order cannot proceed to payment.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Texture, colour or length has not been chosen.
    #[error("Please fill texture, colour, and length.")]
    MissingSelection,
    /// A contact field is blank.
    #[error("Please fill contact details including district ({0} is missing).")]
    MissingContact(&'static str),
    /// The email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    /// Terms and conditions were not accepted.
    #[error("You must accept Terms & Conditions.")]
    TermsNotAccepted,
    /// The length is not offered for the texture.
    #[error("{length}\" is not available for {texture}")]
    UnavailableLength {
        /// Selected texture.
        texture: Texture,
        /// Selected length in inches.
        length: u32,
    },
}

/// Customer contact details collected with an order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Delivery district within Malawi.
    pub district: String,
}

impl CustomerContact {
    /// Check that every field is filled in and the email is plausible.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingContact`] naming the first blank
    /// field, or [`CheckoutError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("district", &self.district),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CheckoutError::MissingContact(name));
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(CheckoutError::InvalidEmail(email.to_string())),
        }
    }
}

/// A special order as submitted from the order form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialOrderRequest {
    pub texture: Texture,
    pub colour: String,
    pub length_inches: Option<u32>,
    pub double_drawn: bool,
    pub highlight: bool,
    #[serde(flatten)]
    pub contact: CustomerContact,
    pub agreed_to_terms: bool,
}

impl SpecialOrderRequest {
    /// The pricing inputs of this order.
    #[must_use]
    pub const fn configuration(&self) -> OrderConfiguration {
        OrderConfiguration {
            texture: self.texture,
            length_inches: self.length_inches,
            double_drawn: self.double_drawn,
            highlight: self.highlight,
        }
    }

    /// Validate the order and price it.
    ///
    /// Checks run in the order the form reports them: selection, contact
    /// details, terms, then whether the length is offered.
    ///
    /// # Errors
    ///
    /// Returns the first [`CheckoutError`] found.
    pub fn validate(&self) -> Result<PriceBreakdown, CheckoutError> {
        let length = match self.length_inches {
            Some(length) if self.texture.is_set() && !self.colour.trim().is_empty() => length,
            _ => return Err(CheckoutError::MissingSelection),
        };

        self.contact.validate()?;

        if !self.agreed_to_terms {
            return Err(CheckoutError::TermsNotAccepted);
        }

        let configuration = self.configuration();
        if !configuration.is_priceable() {
            return Err(CheckoutError::UnavailableLength {
                texture: self.texture,
                length,
            });
        }

        Ok(compute_price(&configuration))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn contact() -> CustomerContact {
        CustomerContact {
            first_name: "Chikondi".to_string(),
            last_name: "Banda".to_string(),
            email: "chikondi@example.com".to_string(),
            phone: "+265991234567".to_string(),
            district: "Lilongwe".to_string(),
        }
    }

    fn order() -> SpecialOrderRequest {
        SpecialOrderRequest {
            texture: Texture::Straight,
            colour: "brown_highlights".to_string(),
            length_inches: Some(16),
            double_drawn: true,
            highlight: false,
            contact: contact(),
            agreed_to_terms: true,
        }
    }

    #[test]
    fn test_valid_order_is_priced() {
        let breakdown = order().validate().unwrap();
        assert_eq!(breakdown.base_price, Decimal::from(455_000));
        assert_eq!(breakdown.double_drawn_addon, Decimal::from(165_000));
        assert_eq!(breakdown.total_price, Decimal::from(638_000));
        assert_eq!(breakdown.deposit_amount, Decimal::from(319_000));
    }

    #[test]
    fn test_missing_selection() {
        let mut request = order();
        request.texture = Texture::Unset;
        assert_eq!(request.validate(), Err(CheckoutError::MissingSelection));

        let mut request = order();
        request.colour = "  ".to_string();
        assert_eq!(request.validate(), Err(CheckoutError::MissingSelection));

        let mut request = order();
        request.length_inches = None;
        assert_eq!(request.validate(), Err(CheckoutError::MissingSelection));
    }

    #[test]
    fn test_missing_contact_names_first_blank_field() {
        let mut request = order();
        request.contact.phone = String::new();
        request.contact.district = String::new();
        assert_eq!(request.validate(), Err(CheckoutError::MissingContact("phone")));
    }

    #[test]
    fn test_invalid_email() {
        let mut request = order();
        request.contact.email = "chikondi.example.com".to_string();
        assert!(matches!(
            request.validate(),
            Err(CheckoutError::InvalidEmail(_))
        ));

        request.contact.email = "@example.com".to_string();
        assert!(matches!(
            request.validate(),
            Err(CheckoutError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_terms_required() {
        let mut request = order();
        request.agreed_to_terms = false;
        assert_eq!(request.validate(), Err(CheckoutError::TermsNotAccepted));
    }

    #[test]
    fn test_unavailable_length_is_rejected() {
        let mut request = order();
        request.texture = Texture::Kinky;
        request.length_inches = Some(12);
        assert_eq!(
            request.validate(),
            Err(CheckoutError::UnavailableLength {
                texture: Texture::Kinky,
                length: 12,
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CheckoutError::UnavailableLength {
                texture: Texture::WaterWave,
                length: 30,
            }
            .to_string(),
            "30\" is not available for water_wave"
        );
        assert_eq!(
            CheckoutError::TermsNotAccepted.to_string(),
            "You must accept Terms & Conditions."
        );
    }

    #[test]
    fn test_request_deserializes_flat_form() {
        let request: SpecialOrderRequest = serde_json::from_str(
            r#"{
                "texture": "body_wave",
                "colour": "brown_highlights",
                "length_inches": 20,
                "highlight": true,
                "first_name": "Chikondi",
                "last_name": "Banda",
                "email": "chikondi@example.com",
                "phone": "+265991234567",
                "district": "Lilongwe",
                "agreed_to_terms": true
            }"#,
        )
        .unwrap();

        assert_eq!(request.texture, Texture::BodyWave);
        assert!(!request.double_drawn);
        assert_eq!(request.contact.district, "Lilongwe");
        assert_eq!(
            request.validate().unwrap().total_price,
            Decimal::from(558_000)
        );
    }
}
