//! Customer-facing special-order price list.
//!
//! Built from the calculator's own tables so the list can never drift from
//! what [`compute_price`](super::compute_price) charges.

use core::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{DOUBLE_DRAWN_RATE, HIGHLIGHT_FEE, SHIPPING_FEE, TextureFamily};
use crate::types::{CurrencyCode, Price, format_amount};

/// One line of a price-list section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTableRow {
    /// Length label, e.g. `12"`.
    pub length: String,
    /// Formatted price, e.g. `395,000`.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A titled block of the price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTableSection {
    pub title: String,
    pub rows: Vec<PriceTableRow>,
}

/// The full special-order price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    pub currency: CurrencyCode,
    pub sections: Vec<PriceTableSection>,
    pub shipping_note: String,
}

impl PriceTable {
    /// The special-order price list in display order.
    #[must_use]
    pub fn special_orders() -> Self {
        let straight = TextureFamily::StraightBodyWave;

        let sections = vec![
            PriceTableSection {
                title: "STRAIGHT & BODY WAVE HAIR (BASE PRICING)".to_string(),
                rows: base_rows(straight),
            },
            PriceTableSection {
                title: "DOUBLE-DRAWN (ADD-ON OPTION)".to_string(),
                rows: straight
                    .lengths()
                    .map(|length| PriceTableRow {
                        length: inches(length),
                        price: format!("{} per 2-inch length", amount(DOUBLE_DRAWN_RATE)),
                        note: None,
                    })
                    .collect(),
            },
            PriceTableSection {
                title: "COLOUR ADD-ON (HIGHLIGHT OPTION)".to_string(),
                rows: vec![PriceTableRow {
                    length: "All Lengths".to_string(),
                    price: format!("{} flat rate", amount(HIGHLIGHT_FEE)),
                    note: None,
                }],
            },
            PriceTableSection {
                title: "DEEP KINKY CURLY TEXTURE (BASE PRICING)".to_string(),
                rows: base_rows(TextureFamily::WaterWaveKinky),
            },
        ];

        Self {
            currency: CurrencyCode::MWK,
            sections,
            shipping_note: format!(
                "Shipping (South Africa → Malawi Express Shipping): {}",
                Price::mwk(Decimal::from(SHIPPING_FEE)).display()
            ),
        }
    }
}

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.title)?;
            writeln!(f, "  {:<16}Price ({})", "Length (inches)", self.currency)?;
            for row in &section.rows {
                match &row.note {
                    Some(note) => writeln!(f, "  {:<16}{} {note}", row.length, row.price)?,
                    None => writeln!(f, "  {:<16}{}", row.length, row.price)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.shipping_note)
    }
}

/// Rows for a base-price table.
///
/// A row whose step from the previous length differs from the table's first
/// step is annotated with the step size.
fn base_rows(family: TextureFamily) -> Vec<PriceTableRow> {
    let prices = family.base_prices();
    let regular_step = match prices {
        [(_, first), (_, second), ..] => Some(second - first),
        _ => None,
    };

    let mut rows = Vec::with_capacity(prices.len());
    let mut previous: Option<u32> = None;
    for &(length, price) in prices {
        let step = previous.map(|prev| price - prev);
        let note = match (step, regular_step) {
            (Some(step), Some(regular)) if step != regular => {
                Some(format!("(+{}k increment applied)", step / 1_000))
            }
            _ => None,
        };
        rows.push(PriceTableRow {
            length: inches(length),
            price: amount(price),
            note,
        });
        previous = Some(price);
    }
    rows
}

fn inches(length: u32) -> String {
    format!("{length}\"")
}

fn amount(value: u32) -> String {
    format_amount(Decimal::from(value))
}
