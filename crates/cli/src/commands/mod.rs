//! CLI command implementations.

pub mod price_table;
pub mod quote;
