//! Derived view state for the product listing.
//!
//! Pure transformations between catalog payloads and what the widget
//! renders: display ordering, promo tile placement, discount detection,
//! and per-product attribute lookups. Nothing in here touches the network
//! or holds state across renders.

pub mod price;
pub mod sort;
pub mod state;
pub mod translation;
pub mod url_state;

use brulerie_core::ProductId;
use rust_decimal::Decimal;

use crate::catalog::types::{ProductItem, ProductLabel, ProductView, PromoTile, ViewPrice};

use price::{PriceFlags, PricedItem, resolve_price};

/// Reorder a page of results so in-stock products lead.
///
/// The partition is stable: relative order within each group is preserved.
#[must_use]
pub fn in_stock_first(items: Vec<ProductItem>) -> Vec<ProductItem> {
    let (in_stock, out_of_stock): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|item| item.product_view.in_stock);

    in_stock.into_iter().chain(out_of_stock).collect()
}

/// Promo tile pinned to a listing slot, if any.
///
/// Tile positions are 1-based strings on the wire; `index` is the 0-based
/// listing index.
#[must_use]
pub fn promo_tile_at(tiles: &[PromoTile], index: usize) -> Option<&PromoTile> {
    let position = (index + 1).to_string();
    tiles.iter().find(|tile| tile.position == position)
}

/// First value of the named product view attribute.
#[must_use]
pub fn attribute_value<'a>(view: &'a ProductView, name: &str) -> Option<&'a str> {
    view.attributes
        .iter()
        .find(|attribute| attribute.name == name)
        .map(|attribute| attribute.value.as_str())
}

/// Labels attached to a given product.
#[must_use]
pub fn labels_for<'a>(labels: &'a [ProductLabel], product_id: ProductId) -> Vec<&'a ProductLabel> {
    labels
        .iter()
        .filter(|label| label.product_id == product_id)
        .collect()
}

/// Whether a listed product is discounted.
///
/// True when the minimum regular price strictly exceeds the final price.
/// Catalog items also check the product view's flat price, since complex
/// products may only discount at the view level. Missing data never counts
/// as a discount.
#[must_use]
pub fn has_discount(item: PricedItem<'_>) -> bool {
    let regular = resolve_price(item, PriceFlags::default());
    let final_price = resolve_price(
        item,
        PriceFlags {
            use_final: true,
            ..PriceFlags::default()
        },
    );

    if matches!((regular, final_price), (Ok(r), Ok(f)) if r > f) {
        return true;
    }

    match item {
        PricedItem::Catalog(product_item) => {
            view_price_pair(product_item.product_view.price.as_ref())
                .is_some_and(|(regular, final_price)| regular > final_price)
        }
        PricedItem::Refined(_) => false,
    }
}

/// Regular and final amounts of a view-style price, when both exist.
fn view_price_pair(price: Option<&ViewPrice>) -> Option<(Decimal, Decimal)> {
    let price = price?;
    let regular = price.regular.as_ref()?.amount.as_ref()?.value;
    let final_price = price.r#final.as_ref()?.amount.as_ref()?.value;
    Some((regular, final_price))
}

/// Capsule count split shown under a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapsuleBreakdown {
    /// A single group of capsules.
    Single(u32),
    /// Coffee and milk capsules packed pairwise.
    Paired { coffee: u32, milk: u32 },
}

/// Derive the capsule breakdown from product view attributes.
///
/// Products without a `number_pods` attribute show nothing. A
/// `pods_per_cup` of `"2"` splits the count into coffee and milk halves.
#[must_use]
pub fn capsule_breakdown(view: &ProductView) -> Option<CapsuleBreakdown> {
    let capsules: u32 = attribute_value(view, "number_pods")?.parse().ok()?;

    if attribute_value(view, "pods_per_cup") == Some("2") {
        Some(CapsuleBreakdown::Paired {
            coffee: capsules / 2,
            milk: capsules / 2,
        })
    } else {
        Some(CapsuleBreakdown::Single(capsules))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(sku: &str, in_stock: bool) -> ProductItem {
        serde_json::from_value(serde_json::json!({
            "product": { "id": 1, "sku": sku },
            "productView": { "id": sku, "sku": sku, "inStock": in_stock }
        }))
        .unwrap()
    }

    fn view_with_attributes(attributes: serde_json::Value) -> ProductView {
        serde_json::from_value(serde_json::json!({
            "id": "dmlldw==",
            "sku": "CAFE-AU-LAIT-12",
            "inStock": true,
            "attributes": attributes
        }))
        .unwrap()
    }

    #[test]
    fn test_in_stock_first_is_a_stable_partition() {
        let items = vec![
            item("a", false),
            item("b", true),
            item("c", false),
            item("d", true),
        ];
        let ordered = in_stock_first(items);
        let skus: Vec<&str> = ordered.iter().map(|i| i.product.sku.as_str()).collect();
        assert_eq!(skus, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_promo_tile_positions_are_one_based() {
        let tiles = vec![
            PromoTile {
                position: "1".to_string(),
                url: None,
                image: None,
                title: None,
            },
            PromoTile {
                position: "4".to_string(),
                url: None,
                image: None,
                title: None,
            },
        ];

        assert_eq!(promo_tile_at(&tiles, 0).map(|t| t.position.as_str()), Some("1"));
        assert_eq!(promo_tile_at(&tiles, 1), None);
        assert_eq!(promo_tile_at(&tiles, 3).map(|t| t.position.as_str()), Some("4"));
    }

    #[test]
    fn test_attribute_value_finds_first_match() {
        let view = view_with_attributes(serde_json::json!([
            { "name": "coffee_intensity", "value": "8" },
            { "name": "flavor_characteristic", "value": "Intense et corsé" }
        ]));

        assert_eq!(attribute_value(&view, "coffee_intensity"), Some("8"));
        assert_eq!(attribute_value(&view, "cup_type"), None);
    }

    #[test]
    fn test_labels_for_filters_by_product() {
        let labels = vec![
            ProductLabel {
                product_id: ProductId::new(1),
                txt: Some("Nouveau".to_string()),
                style: None,
            },
            ProductLabel {
                product_id: ProductId::new(2),
                txt: Some("Promo".to_string()),
                style: None,
            },
        ];

        let matched = labels_for(&labels, ProductId::new(2));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.first().unwrap().txt.as_deref(), Some("Promo"));
    }

    #[test]
    fn test_has_discount_on_price_range() {
        let discounted: ProductItem = serde_json::from_value(serde_json::json!({
            "product": {
                "id": 1,
                "sku": "CAFE-NOIR-16",
                "price_range": {
                    "minimum_price": {
                        "regular_price": { "value": 5.0 },
                        "final_price": { "value": 4.0 }
                    }
                }
            },
            "productView": { "id": "a", "sku": "CAFE-NOIR-16", "inStock": true }
        }))
        .unwrap();

        assert!(has_discount(PricedItem::Catalog(&discounted)));
    }

    #[test]
    fn test_has_discount_falls_back_to_view_price() {
        let view_only: ProductItem = serde_json::from_value(serde_json::json!({
            "product": { "id": 1, "sku": "CAFE-NOIR-16" },
            "productView": {
                "id": "a",
                "sku": "CAFE-NOIR-16",
                "inStock": true,
                "price": {
                    "regular": { "amount": { "value": 5.0 } },
                    "final": { "amount": { "value": 4.5 } }
                }
            }
        }))
        .unwrap();

        assert!(has_discount(PricedItem::Catalog(&view_only)));
    }

    #[test]
    fn test_no_discount_when_prices_equal_or_missing() {
        let flat = item("CAFE-NOIR-16", true);
        assert!(!has_discount(PricedItem::Catalog(&flat)));
    }

    #[test]
    fn test_capsule_breakdown_single_group() {
        let view = view_with_attributes(serde_json::json!([
            { "name": "number_pods", "value": "16" }
        ]));
        assert_eq!(capsule_breakdown(&view), Some(CapsuleBreakdown::Single(16)));
    }

    #[test]
    fn test_capsule_breakdown_halves_paired_packs() {
        let view = view_with_attributes(serde_json::json!([
            { "name": "number_pods", "value": "16" },
            { "name": "pods_per_cup", "value": "2" }
        ]));
        assert_eq!(
            capsule_breakdown(&view),
            Some(CapsuleBreakdown::Paired { coffee: 8, milk: 8 })
        );
    }

    #[test]
    fn test_capsule_breakdown_absent_without_attribute() {
        let view = view_with_attributes(serde_json::json!([]));
        assert_eq!(capsule_breakdown(&view), None);
    }
}
