//! Core types for the Curls storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod price;
pub mod status;
pub mod texture;

pub use price::{CurrencyCode, Price, format_amount};
pub use status::*;
pub use texture::{Texture, TextureError};
