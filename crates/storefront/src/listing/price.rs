//! Price resolution across the two product payload shapes.

use rust_decimal::Decimal;
use thiserror::Error;

use brulerie_core::format_eur;

use crate::catalog::types::{ProductItem, RefinedProduct};

/// The payload a listed price is read from.
///
/// Search items carry the legacy `price_range`; swatch refinements carry
/// view-style prices. The two never mix, so the discriminant is explicit.
#[derive(Debug, Clone, Copy)]
pub enum PricedItem<'a> {
    /// Catalog search item with `price_range` on the legacy record.
    Catalog(&'a ProductItem),
    /// Swatch-refined product with `priceRange`/`price`.
    Refined(&'a RefinedProduct),
}

/// Which tier and price kind to resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFlags {
    /// Read the maximum tier instead of the minimum.
    pub use_maximum: bool,
    /// Read the final (discounted) price instead of the regular one.
    pub use_final: bool,
}

/// Price resolution failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The requested tier or price kind is absent from the payload.
    #[error("price data missing for the requested tier")]
    Missing,
}

/// Resolve the numeric amount for a listed product.
///
/// Refined products fall back from the range minimum to the flat price
/// when range data is absent; the maximum tier has no such fallback.
///
/// # Errors
///
/// Returns [`PriceError::Missing`] when the selected tier or price kind
/// is not populated.
pub fn resolve_price(item: PricedItem<'_>, flags: PriceFlags) -> Result<Decimal, PriceError> {
    match item {
        PricedItem::Catalog(product_item) => {
            let range = product_item
                .product
                .price_range
                .as_ref()
                .ok_or(PriceError::Missing)?;

            let tier = if flags.use_maximum {
                range.maximum_price.as_ref()
            } else {
                range.minimum_price.as_ref()
            }
            .ok_or(PriceError::Missing)?;

            let price = if flags.use_final {
                tier.final_price.as_ref()
            } else {
                tier.regular_price.as_ref()
            }
            .ok_or(PriceError::Missing)?;

            Ok(price.value)
        }
        PricedItem::Refined(refined) => {
            let tier = if flags.use_maximum {
                refined.price_range.as_ref().and_then(|r| r.maximum.as_ref())
            } else {
                refined
                    .price_range
                    .as_ref()
                    .and_then(|r| r.minimum.as_ref())
                    .or(refined.price.as_ref())
            }
            .ok_or(PriceError::Missing)?;

            let amount = if flags.use_final {
                tier.r#final.as_ref()
            } else {
                tier.regular.as_ref()
            }
            .ok_or(PriceError::Missing)?;

            amount
                .amount
                .as_ref()
                .map(|m| m.value)
                .ok_or(PriceError::Missing)
        }
    }
}

/// Resolve and format for display.
///
/// # Errors
///
/// Propagates [`PriceError::Missing`] from [`resolve_price`].
pub fn resolve_display_price(
    item: PricedItem<'_>,
    flags: PriceFlags,
) -> Result<String, PriceError> {
    resolve_price(item, flags).map(format_eur)
}
