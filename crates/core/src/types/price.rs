//! Money amounts in the storefront's trading currency.
//!
//! All special-order amounts are Malawian kwacha. Amounts are carried as
//! [`Decimal`] so the 50% deposit keeps its tambala precision without
//! floating point drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (kwacha, not tambala).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a kwacha price.
    #[must_use]
    pub const fn mwk(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::MWK)
    }

    /// Format for display, e.g. `MWK 413,000`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.currency_code.code(), format_amount(self.amount))
    }
}

/// ISO 4217 currency codes accepted by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Malawian kwacha.
    #[default]
    MWK,
}

impl CurrencyCode {
    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MWK => "MWK",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Format an amount with thousands separators.
///
/// Trailing fractional zeros are dropped, so whole amounts print without a
/// decimal point: `413000` becomes `413,000` and `206500.50` becomes
/// `206,500.5`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (whole, fraction) = text
        .split_once('.')
        .map_or((text.as_str(), None), |(whole, fraction)| {
            (whole, Some(fraction))
        });

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if normalized.is_sign_negative() && !normalized.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(Decimal::from(395_000)), "395,000");
        assert_eq!(format_amount(Decimal::from(1_234_567)), "1,234,567");
        assert_eq!(format_amount(Decimal::from(18_000)), "18,000");
    }

    #[test]
    fn test_format_amount_small_values() {
        assert_eq!(format_amount(Decimal::ZERO), "0");
        assert_eq!(format_amount(Decimal::from(999)), "999");
        assert_eq!(format_amount(Decimal::from(1_000)), "1,000");
    }

    #[test]
    fn test_format_amount_keeps_significant_fraction() {
        assert_eq!(format_amount(Decimal::new(2_065_005, 1)), "206,500.5");
        assert_eq!(format_amount(Decimal::new(20_650_050, 2)), "206,500.5");
        assert_eq!(format_amount(Decimal::new(41_300_000, 2)), "413,000");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(Decimal::from(-25_000)), "-25,000");
    }

    #[test]
    fn test_price_display() {
        let price = Price::mwk(Decimal::from(413_000));
        assert_eq!(price.display(), "MWK 413,000");
        assert_eq!(price.currency_code, CurrencyCode::MWK);
    }

    #[test]
    fn test_currency_code_serializes_as_iso_code() {
        let json = serde_json::to_string(&CurrencyCode::MWK).unwrap();
        assert_eq!(json, "\"MWK\"");
    }
}
