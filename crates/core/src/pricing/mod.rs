//! Special-order price calculator.
//!
//! Prices a custom wig from four inputs: texture, length, the double-drawn
//! add-on and the highlight add-on. The calculation is a pure function over
//! fixed lookup tables, so it can run on every change of an interactive
//! order form and again on the server before payment is initiated.
//!
//! # Rules
//!
//! 1. The texture selects one of two base-price tables ([`TextureFamily`]).
//!    A length missing from the table prices at zero.
//! 2. Double drawn costs [`DOUBLE_DRAWN_RATE`] per 2-inch step counted from
//!    12" inclusive, and only for [`Texture::Straight`].
//! 3. Highlight adds a flat [`HIGHLIGHT_FEE`].
//! 4. Shipping adds a flat [`SHIPPING_FEE`] once texture and length are chosen.
//! 5. The deposit is half the total, rounded to the tambala.
//!
//! Incomplete configurations never fail: an unset texture or length yields
//! [`PriceBreakdown::zero`]. Rejecting unpriceable orders is the job of the
//! checkout gate in [`crate::checkout`].

pub mod table;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Price, Texture};

pub use table::{PriceTable, PriceTableRow, PriceTableSection};

/// Flat shipping fee (South Africa to Malawi express), in MWK.
pub const SHIPPING_FEE: u32 = 18_000;

/// Flat highlight (colour) add-on, in MWK.
pub const HIGHLIGHT_FEE: u32 = 25_000;

/// Double-drawn add-on per 2-inch length step, in MWK.
pub const DOUBLE_DRAWN_RATE: u32 = 55_000;

/// Shortest length the double-drawn steps are counted from.
pub const DOUBLE_DRAWN_BASE_LENGTH: u32 = 12;

/// Straight and body wave base prices, `(inches, MWK)`.
///
/// The step is +30,000 per 2" up to 26" and +50,000 per 2" after that.
const STRAIGHT_BODY_WAVE_PRICES: [(u32, u32); 10] = [
    (12, 395_000),
    (14, 425_000),
    (16, 455_000),
    (18, 485_000),
    (20, 515_000),
    (22, 545_000),
    (24, 575_000),
    (26, 605_000),
    (28, 655_000),
    (30, 705_000),
];

/// Water wave and kinky base prices, `(inches, MWK)`.
const WATER_WAVE_KINKY_PRICES: [(u32, u32); 7] = [
    (14, 410_000),
    (16, 440_000),
    (18, 470_000),
    (20, 500_000),
    (22, 530_000),
    (24, 560_000),
    (26, 590_000),
];

/// A group of textures sharing one base-price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureFamily {
    /// [`Texture::Straight`] and [`Texture::BodyWave`].
    StraightBodyWave,
    /// [`Texture::WaterWave`] and [`Texture::Kinky`] (deep kinky curly).
    WaterWaveKinky,
}

impl TextureFamily {
    /// The literal `(inches, MWK)` base-price table, shortest length first.
    #[must_use]
    pub const fn base_prices(self) -> &'static [(u32, u32)] {
        match self {
            Self::StraightBodyWave => &STRAIGHT_BODY_WAVE_PRICES,
            Self::WaterWaveKinky => &WATER_WAVE_KINKY_PRICES,
        }
    }

    /// Lengths offered for this family, in inches.
    pub fn lengths(self) -> impl Iterator<Item = u32> {
        self.base_prices().iter().map(|&(length, _)| length)
    }

    /// Base price for a length, or `None` if the length is not offered.
    #[must_use]
    pub fn base_price(self, length_inches: u32) -> Option<Decimal> {
        self.base_prices()
            .iter()
            .find(|&&(length, _)| length == length_inches)
            .map(|&(_, price)| Decimal::from(price))
    }
}

/// Base price for a texture and length, or `None` if unpriced.
#[must_use]
pub fn base_price(texture: Texture, length_inches: u32) -> Option<Decimal> {
    texture.family()?.base_price(length_inches)
}

/// Number of double-drawn steps for a length.
///
/// Counts 2-inch steps from 12" inclusively: 12" is one step, 14" two, and
/// so on. Lengths under 12" have no steps.
#[must_use]
pub const fn double_drawn_increments(length_inches: u32) -> u32 {
    if length_inches < DOUBLE_DRAWN_BASE_LENGTH {
        0
    } else {
        (length_inches - DOUBLE_DRAWN_BASE_LENGTH) / 2 + 1
    }
}

/// A custom wig configuration as chosen on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrderConfiguration {
    #[serde(default)]
    pub texture: Texture,
    /// `None` until the customer picks a length.
    #[serde(default)]
    pub length_inches: Option<u32>,
    #[serde(default)]
    pub double_drawn: bool,
    #[serde(default)]
    pub highlight: bool,
}

impl OrderConfiguration {
    /// Create a configuration with no add-ons.
    #[must_use]
    pub const fn new(texture: Texture, length_inches: u32) -> Self {
        Self {
            texture,
            length_inches: Some(length_inches),
            double_drawn: false,
            highlight: false,
        }
    }

    /// Set the double-drawn add-on.
    #[must_use]
    pub const fn with_double_drawn(mut self, double_drawn: bool) -> Self {
        self.double_drawn = double_drawn;
        self
    }

    /// Set the highlight add-on.
    #[must_use]
    pub const fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Whether texture and length are both chosen and the length is offered
    /// for the texture.
    #[must_use]
    pub fn is_priceable(&self) -> bool {
        self.length_inches
            .and_then(|length| base_price(self.texture, length))
            .is_some()
    }
}

/// Itemised price of a special order, in MWK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub double_drawn_addon: Decimal,
    pub highlight_addon: Decimal,
    pub shipping_fee: Decimal,
    pub total_price: Decimal,
    /// Half of the total, paid up front.
    pub deposit_amount: Decimal,
    /// What remains after the deposit.
    pub balance_amount: Decimal,
}

impl PriceBreakdown {
    /// The breakdown of an incomplete configuration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            base_price: Decimal::ZERO,
            double_drawn_addon: Decimal::ZERO,
            highlight_addon: Decimal::ZERO,
            shipping_fee: Decimal::ZERO,
            total_price: Decimal::ZERO,
            deposit_amount: Decimal::ZERO,
            balance_amount: Decimal::ZERO,
        }
    }

    /// Subtotal before shipping.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.base_price + self.double_drawn_addon + self.highlight_addon
    }

    /// The total as a [`Price`].
    #[must_use]
    pub const fn total(&self) -> Price {
        Price::mwk(self.total_price)
    }

    /// The deposit as a [`Price`].
    #[must_use]
    pub const fn deposit(&self) -> Price {
        Price::mwk(self.deposit_amount)
    }
}

/// Price a special order.
///
/// Never fails. Unset texture or length gives [`PriceBreakdown::zero`]; a
/// length outside the texture's table gives a zero base price while the
/// add-ons and shipping still apply.
///
/// # Example
///
/// ```
/// use curls_core::{OrderConfiguration, Texture, compute_price};
/// use rust_decimal::Decimal;
///
/// let config = OrderConfiguration::new(Texture::WaterWave, 22).with_highlight(true);
/// let price = compute_price(&config);
///
/// assert_eq!(price.total_price, Decimal::from(573_000));
/// assert_eq!(price.deposit_amount, Decimal::from(286_500));
/// ```
#[must_use]
pub fn compute_price(config: &OrderConfiguration) -> PriceBreakdown {
    let (Some(family), Some(length)) = (config.texture.family(), config.length_inches) else {
        return PriceBreakdown::zero();
    };

    let base_price = family.base_price(length).unwrap_or(Decimal::ZERO);

    // Body wave shares the straight table but has no double-drawn pricing.
    let double_drawn_addon = if config.double_drawn && config.texture == Texture::Straight {
        Decimal::from(double_drawn_increments(length)) * Decimal::from(DOUBLE_DRAWN_RATE)
    } else {
        Decimal::ZERO
    };

    let highlight_addon = if config.highlight {
        Decimal::from(HIGHLIGHT_FEE)
    } else {
        Decimal::ZERO
    };

    let shipping_fee = Decimal::from(SHIPPING_FEE);
    let total_price = base_price + double_drawn_addon + highlight_addon + shipping_fee;
    let deposit_amount = deposit_for(total_price);

    PriceBreakdown {
        base_price,
        double_drawn_addon,
        highlight_addon,
        shipping_fee,
        total_price,
        deposit_amount,
        balance_amount: total_price - deposit_amount,
    }
}

/// Half of `total`, rounded half-up to two decimal places.
#[must_use]
pub fn deposit_for(total: Decimal) -> Decimal {
    (total / Decimal::TWO).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
