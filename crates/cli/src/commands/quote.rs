//! Quote a single special-order configuration.

use curls_core::{OrderConfiguration, PriceBreakdown, Price, Texture, compute_price};
use tracing::{info, warn};

/// Price a configuration and log the itemised breakdown.
pub fn run(texture: Texture, length: u32, double_drawn: bool, highlight: bool) {
    let config = OrderConfiguration::new(texture, length)
        .with_double_drawn(double_drawn)
        .with_highlight(highlight);

    if !config.is_priceable() {
        warn!(%texture, length, "Length is not offered for this texture; base price is zero");
    }
    if double_drawn && texture != Texture::Straight {
        warn!(%texture, "Double drawn is only priced for straight hair");
    }

    let breakdown = compute_price(&config);

    info!("Special order quote: {texture} {length}\"");
    for line in breakdown_lines(&breakdown) {
        info!("  {line}");
    }
    info!(
        "Pay {} now to secure the {} order",
        breakdown.deposit().display(),
        breakdown.total().display()
    );
}

/// Format a breakdown as `label: amount` lines.
fn breakdown_lines(breakdown: &PriceBreakdown) -> Vec<String> {
    [
        ("Base price", breakdown.base_price),
        ("Double drawn", breakdown.double_drawn_addon),
        ("Highlight", breakdown.highlight_addon),
        ("Shipping", breakdown.shipping_fee),
        ("Total", breakdown.total_price),
        ("Deposit (50%)", breakdown.deposit_amount),
        ("Balance", breakdown.balance_amount),
    ]
    .into_iter()
    .map(|(label, amount)| format!("{label:<14}{}", Price::mwk(amount).display()))
    .collect()
}
