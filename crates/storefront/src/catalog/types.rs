//! Domain types for the Catalog Service API.
//!
//! Search items carry two parallel records per product: the legacy catalog
//! `product` (snake_case fields, `price_range`) and the newer `productView`
//! (camelCase fields, view-style prices). Both shapes survive here as-is;
//! the listing layer decides which one to read.

use brulerie_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Money Types
// =============================================================================

/// A price amount as the wire reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyValue {
    /// Decimal amount, sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
}

/// One price tier of the legacy `price_range`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PriceTier {
    #[serde(default)]
    pub regular_price: Option<MoneyValue>,
    #[serde(default)]
    pub final_price: Option<MoneyValue>,
}

/// Legacy catalog price range (minimum and maximum tiers).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PriceRange {
    #[serde(default)]
    pub minimum_price: Option<PriceTier>,
    #[serde(default)]
    pub maximum_price: Option<PriceTier>,
}

/// View-style amount wrapper (`{ amount: { value, currency } }`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewAmount {
    #[serde(default)]
    pub amount: Option<MoneyValue>,
}

/// View-style price with regular and final amounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewPrice {
    #[serde(default)]
    pub regular: Option<ViewAmount>,
    #[serde(default, rename = "final")]
    pub r#final: Option<ViewAmount>,
}

/// View-style price range on complex products.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewPriceRange {
    #[serde(default)]
    pub minimum: Option<ViewPrice>,
    #[serde(default)]
    pub maximum: Option<ViewPrice>,
}

// =============================================================================
// Product Types
// =============================================================================

/// One search result item: the legacy record and its product view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductItem {
    pub product: CatalogProduct,
    #[serde(rename = "productView")]
    pub product_view: ProductView,
}

/// Legacy catalog product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
    pub id: ProductId,
    pub sku: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default)]
    pub short_description: Option<HtmlBlock>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

/// Image reference on the legacy record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// HTML fragment wrapper (`{ html }`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HtmlBlock {
    #[serde(default)]
    pub html: Option<String>,
}

/// Product view record from the search index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
    pub id: String,
    pub sku: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "urlKey")]
    pub url_key: Option<String>,
    #[serde(default, rename = "inStock")]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<ProductViewMedia>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(default)]
    pub options: Vec<ProductViewOption>,
    /// Flat price on simple product views.
    #[serde(default)]
    pub price: Option<ViewPrice>,
    /// Price range on complex product views.
    #[serde(default, rename = "priceRange")]
    pub price_range: Option<ViewPriceRange>,
}

/// Media entry on a product view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductViewMedia {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Indexed attribute on a product view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub value: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Selectable option on a complex product view (e.g., color swatches).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductViewOption {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub values: Vec<SwatchValue>,
}

/// One swatch value of a product view option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwatchValue {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Product refined by a swatch selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinedProduct {
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "inStock")]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<ProductViewMedia>,
    /// Flat price on simple refinements.
    #[serde(default)]
    pub price: Option<ViewPrice>,
    /// Price range when the refinement still spans variants.
    #[serde(default, rename = "priceRange")]
    pub price_range: Option<ViewPriceRange>,
}

// =============================================================================
// Search Types
// =============================================================================

/// Result of a product search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductSearchResult {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub items: Vec<ProductItem>,
    #[serde(default)]
    pub facets: Vec<Facet>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

/// One facet of the search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facet {
    pub attribute: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub buckets: Vec<FacetBucket>,
}

/// One bucket of a facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetBucket {
    pub title: String,
    #[serde(default)]
    pub count: i64,
}

/// Pagination info echoed by the search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct PageInfo {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

// =============================================================================
// Sort Types
// =============================================================================

/// Sort direction as the wire expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    /// Parse a query-string or CLI value.
    ///
    /// Only the exact wire tokens are accepted; anything else falls back
    /// to ascending.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "DESC" => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Wire token for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire-level sort directive for a product search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GqlSortInput {
    pub attribute: String,
    pub direction: SortDirection,
}

/// Sortable attribute descriptor from attribute metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortMetadata {
    pub label: String,
    pub attribute: String,
    #[serde(default)]
    pub numeric: bool,
}

/// Attribute metadata for the current store view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttributeMetadata {
    #[serde(default)]
    pub sortable: Vec<SortMetadata>,
    #[serde(default, rename = "filterableInSearch")]
    pub filterable_in_search: Vec<SortMetadata>,
}

// =============================================================================
// Promo Tile and Label Types
// =============================================================================

/// Marketing tile pinned into the listing grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoTile {
    /// 1-based listing slot, a string on the wire.
    pub position: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Merchandising label attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLabel {
    pub product_id: ProductId,
    #[serde(default)]
    pub txt: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// Cart summary returned by cart mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub total_quantity: u32,
}

/// Mutation-level user error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUserError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// One line of an add-to-cart request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemInput {
    pub sku: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<String>,
}
