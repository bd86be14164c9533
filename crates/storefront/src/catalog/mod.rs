//! Catalog Service API client implementation.
//!
//! Hand-written GraphQL documents with `graphql_client`'s response envelope,
//! sent over `reqwest`. Attribute metadata and category-browse searches are
//! cached using `moka` (5-minute TTL); refinements and cart mutations always
//! hit the service.

mod cache;
mod error;
pub mod queries;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use graphql_client::Response;
use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;

use cache::CacheValue;
use queries::{
    ADD_PRODUCTS_TO_CART_MUTATION, ATTRIBUTE_METADATA_QUERY, PRODUCT_SEARCH_QUERY,
    REFINE_PRODUCT_QUERY, SearchVariables,
};
use types::{AttributeMetadata, Cart, CartItemInput, CartUserError, ProductSearchResult, RefinedProduct};

pub use error::{CatalogError, GraphQLError, GraphQLErrorLocation};

/// Marker embedded in sandbox API URLs.
const SANDBOX_MARKER: &str = "cs-graphql-sandbox";
/// Replacement for the sandbox marker on the derived endpoint.
const PRODUCTION_MARKER: &str = "graphql";
/// Cache key for attribute metadata (one store view per client).
const METADATA_CACHE_KEY: &str = "attribute-metadata";

/// Derive the GraphQL endpoint from a configured API URL.
///
/// Sandbox URLs embed `cs-graphql-sandbox`; the first occurrence is swapped
/// for `graphql` in place and nothing else changes. Any other URL gets the
/// `/graphql` suffix appended.
#[must_use]
pub fn derive_endpoint(api_url: &str) -> String {
    if api_url.contains(SANDBOX_MARKER) {
        api_url.replacen(SANDBOX_MARKER, PRODUCTION_MARKER, 1)
    } else {
        format!("{api_url}/graphql")
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the Catalog Service API.
///
/// Provides typed access to product search, swatch refinement, attribute
/// metadata, and cart mutations. Every request is a single attempt: no
/// retry, no timeout, no in-flight coordination.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    store_code: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new Catalog Service client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint: derive_endpoint(&config.api_url),
                store_code: config.store_code.clone(),
                cache,
            }),
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Execute a GraphQL operation.
    async fn execute<D: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<D, CatalogError> {
        let request_body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            // The store view code scopes every query and mutation
            .header("Store", &self.inner.store_code)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&response_text, 500),
                "catalog service returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: truncate(&response_text, 200),
            });
        }

        let envelope: Response<D> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %truncate(&response_text, 500),
                    "failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(CatalogError::GraphQL(
                errors.into_iter().map(convert_graphql_error).collect(),
            ));
        }

        envelope.data.ok_or_else(|| {
            tracing::error!(
                body = %truncate(&response_text, 500),
                "catalog response has no data and no errors"
            );
            CatalogError::MissingData
        })
    }

    // =========================================================================
    // Search Methods
    // =========================================================================

    /// Run a product search.
    ///
    /// Category-browse requests (empty phrase) are cached per variable set;
    /// phrase searches always hit the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the response envelope fails.
    #[instrument(skip(self), fields(phrase = %variables.phrase))]
    pub async fn product_search(
        &self,
        variables: &SearchVariables,
    ) -> Result<ProductSearchResult, CatalogError> {
        let is_browse = variables.phrase.is_empty();
        let cache_key = format!("search:{}", serde_json::to_string(variables)?);

        if is_browse
            && let Some(CacheValue::Search(result)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for product search");
            return Ok(result);
        }

        let data: ProductSearchData = self
            .execute(PRODUCT_SEARCH_QUERY, serde_json::to_value(variables)?)
            .await?;
        let result = data.product_search;

        if is_browse {
            self.inner
                .cache
                .insert(cache_key, CacheValue::Search(result.clone()))
                .await;
        }

        Ok(result)
    }

    /// Fetch a product refined by the selected swatch options.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the service knows no such refinement.
    #[instrument(skip(self, option_ids), fields(sku = %sku))]
    pub async fn refine_product(
        &self,
        option_ids: &[String],
        sku: &str,
    ) -> Result<RefinedProduct, CatalogError> {
        let variables = serde_json::json!({
            "optionIds": option_ids,
            "sku": sku,
        });

        let data: RefineProductData = self.execute(REFINE_PRODUCT_QUERY, variables).await?;

        data.refine_product
            .ok_or_else(|| CatalogError::NotFound(format!("product not found: {sku}")))
    }

    /// Fetch sortable and filterable attribute metadata for the store view.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the response envelope fails.
    #[instrument(skip(self))]
    pub async fn attribute_metadata(&self) -> Result<AttributeMetadata, CatalogError> {
        if let Some(CacheValue::Metadata(metadata)) =
            self.inner.cache.get(METADATA_CACHE_KEY).await
        {
            debug!("Cache hit for attribute metadata");
            return Ok(metadata);
        }

        let data: AttributeMetadataData = self
            .execute(ATTRIBUTE_METADATA_QUERY, serde_json::json!({}))
            .await?;
        let metadata = data.attribute_metadata;

        self.inner
            .cache
            .insert(
                METADATA_CACHE_KEY.to_string(),
                CacheValue::Metadata(metadata.clone()),
            )
            .await;

        Ok(metadata)
    }

    // =========================================================================
    // Cart Methods (not cached - mutable state)
    // =========================================================================

    /// Add items to a cart.
    ///
    /// # Errors
    ///
    /// Returns `UserError` when the mutation reports user errors, and an
    /// envelope error otherwise.
    #[instrument(skip(self, items), fields(cart_id = %cart_id))]
    pub async fn add_products_to_cart(
        &self,
        cart_id: &str,
        items: &[CartItemInput],
    ) -> Result<Cart, CatalogError> {
        let variables = serde_json::json!({
            "cartId": cart_id,
            "cartItems": items,
        });

        let data: AddProductsToCartData =
            self.execute(ADD_PRODUCTS_TO_CART_MUTATION, variables).await?;

        if let Some(result) = data.add_products_to_cart {
            if !result.user_errors.is_empty() {
                return Err(CatalogError::UserError(
                    result
                        .user_errors
                        .into_iter()
                        .map(|e| e.message)
                        .collect::<Vec<_>>()
                        .join("; "),
                ));
            }

            if let Some(cart) = result.cart {
                return Ok(cart);
            }
        }

        Err(CatalogError::MissingData)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate cached attribute metadata.
    pub async fn invalidate_metadata(&self) {
        self.inner.cache.invalidate(METADATA_CACHE_KEY).await;
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

/// Convert an envelope error into the client's error type.
fn convert_graphql_error(error: graphql_client::Error) -> GraphQLError {
    GraphQLError {
        message: error.message,
        locations: error.locations.map_or_else(Vec::new, |locs| {
            locs.into_iter()
                .map(|l| GraphQLErrorLocation {
                    line: i64::from(l.line),
                    column: i64::from(l.column),
                })
                .collect()
        }),
        path: error.path.map_or_else(Vec::new, |p| {
            p.into_iter()
                .map(|fragment| match fragment {
                    graphql_client::PathFragment::Key(s) => serde_json::Value::String(s),
                    graphql_client::PathFragment::Index(i) => serde_json::Value::Number(i.into()),
                })
                .collect()
        }),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

// =============================================================================
// Response Data Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct ProductSearchData {
    #[serde(rename = "productSearch")]
    product_search: ProductSearchResult,
}

#[derive(Debug, Deserialize)]
struct RefineProductData {
    #[serde(rename = "refineProduct")]
    refine_product: Option<RefinedProduct>,
}

#[derive(Debug, Deserialize)]
struct AttributeMetadataData {
    #[serde(rename = "attributeMetadata")]
    attribute_metadata: AttributeMetadata,
}

#[derive(Debug, Deserialize)]
struct AddProductsToCartData {
    #[serde(rename = "addProductsToCart")]
    add_products_to_cart: Option<AddProductsToCartPayload>,
}

#[derive(Debug, Deserialize)]
struct AddProductsToCartPayload {
    cart: Option<Cart>,
    #[serde(default)]
    user_errors: Vec<CartUserError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn config(api_url: &str) -> CatalogConfig {
        CatalogConfig {
            api_url: api_url.to_string(),
            store_code: "fr_store".to_string(),
            display_out_of_stock: "0".to_string(),
            category_url_path: None,
            page_size: 12,
        }
    }

    #[test]
    fn test_derive_endpoint_replaces_sandbox_marker_in_place() {
        assert_eq!(
            derive_endpoint("https://commerce.example.com/cs-graphql-sandbox"),
            "https://commerce.example.com/graphql"
        );
        // Nothing is appended after a marker substitution
        assert_eq!(
            derive_endpoint("https://commerce.example.com/cs-graphql-sandbox/v1"),
            "https://commerce.example.com/graphql/v1"
        );
    }

    #[test]
    fn test_derive_endpoint_replaces_first_occurrence_only() {
        assert_eq!(
            derive_endpoint("https://cs-graphql-sandbox.example.com/cs-graphql-sandbox"),
            "https://graphql.example.com/cs-graphql-sandbox"
        );
    }

    #[test]
    fn test_derive_endpoint_appends_suffix_without_marker() {
        assert_eq!(
            derive_endpoint("https://commerce.example.com/api"),
            "https://commerce.example.com/api/graphql"
        );
    }

    #[test]
    fn test_client_derives_endpoint_from_config() {
        let client = CatalogClient::new(&config("https://commerce.example.com/api"));
        assert_eq!(client.endpoint(), "https://commerce.example.com/api/graphql");

        let sandbox = CatalogClient::new(&config("https://commerce.example.com/cs-graphql-sandbox"));
        assert_eq!(sandbox.endpoint(), "https://commerce.example.com/graphql");
    }
}
