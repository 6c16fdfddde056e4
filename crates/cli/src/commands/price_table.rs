//! Print the special-order price list.

use curls_core::PriceTable;
use tracing::info;

/// Log the published price list, one line per row.
pub fn run() {
    let table = PriceTable::special_orders();
    for line in table.to_string().lines() {
        info!("{line}");
    }
}
