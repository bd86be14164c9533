//! Core types for Brulerie.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod quantity;

pub use id::*;
pub use money::{CurrencyCode, Money, format_eur};
pub use quantity::{MAX_QUANTITY, MIN_QUANTITY, Quantity};
