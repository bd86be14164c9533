//! Cache types for Catalog Service responses.

use super::types::{AttributeMetadata, ProductSearchResult};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Search(ProductSearchResult),
    Metadata(AttributeMetadata),
}
