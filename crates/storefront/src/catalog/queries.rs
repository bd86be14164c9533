//! GraphQL documents and variable types for the Catalog Service API.
//!
//! Documents are sent verbatim; variables serialize into the JSON body the
//! service expects. The schema is owned by the service and not mirrored
//! here, so response shapes live in [`super::types`].

use serde::{Deserialize, Serialize};

use super::types::GqlSortInput;

/// Product search over the listing surface.
pub const PRODUCT_SEARCH_QUERY: &str = r"
query productSearch(
  $phrase: String!
  $pageSize: Int
  $currentPage: Int
  $filter: [SearchClauseInput!]
  $sort: [ProductSearchSortInput!]
) {
  productSearch(
    phrase: $phrase
    page_size: $pageSize
    current_page: $currentPage
    filter: $filter
    sort: $sort
  ) {
    total_count
    items {
      product {
        __typename
        id
        sku
        name
        canonical_url
        image {
          url
        }
        short_description {
          html
        }
        price_range {
          minimum_price {
            regular_price { value currency }
            final_price { value currency }
          }
          maximum_price {
            regular_price { value currency }
            final_price { value currency }
          }
        }
      }
      productView {
        __typename
        id
        sku
        name
        urlKey
        inStock
        images {
          url
          label
          roles
        }
        attributes {
          name
          label
          value
          roles
        }
        ... on SimpleProductView {
          price {
            regular { amount { value currency } }
            final { amount { value currency } }
          }
        }
        ... on ComplexProductView {
          priceRange {
            minimum {
              regular { amount { value currency } }
              final { amount { value currency } }
            }
            maximum {
              regular { amount { value currency } }
              final { amount { value currency } }
            }
          }
          options {
            id
            title
            values {
              ... on ProductViewOptionValueSwatch {
                id
                title
                type
                value
              }
            }
          }
        }
      }
    }
    facets {
      attribute
      title
      buckets {
        ... on ScalarBucket { title count }
        ... on RangeBucket { title count }
      }
    }
    page_info {
      current_page
      page_size
      total_pages
    }
  }
}
";

/// Refinement fetch after a swatch selection.
pub const REFINE_PRODUCT_QUERY: &str = r"
query refineProduct($optionIds: [String!]!, $sku: String!) {
  refineProduct(optionIds: $optionIds, sku: $sku) {
    __typename
    sku
    name
    inStock
    images {
      url
      label
      roles
    }
    ... on SimpleProductView {
      price {
        regular { amount { value currency } }
        final { amount { value currency } }
      }
    }
    ... on ComplexProductView {
      priceRange {
        minimum {
          regular { amount { value currency } }
          final { amount { value currency } }
        }
        maximum {
          regular { amount { value currency } }
          final { amount { value currency } }
        }
      }
    }
  }
}
";

/// Sortable and filterable attribute descriptors for the store view.
pub const ATTRIBUTE_METADATA_QUERY: &str = r"
query attributeMetadata {
  attributeMetadata {
    sortable {
      label
      attribute
      numeric
    }
    filterableInSearch {
      label
      attribute
      numeric
    }
  }
}
";

/// Add items to an existing cart.
pub const ADD_PRODUCTS_TO_CART_MUTATION: &str = r"
mutation addProductsToCart($cartId: String!, $cartItems: [CartItemInput!]!) {
  addProductsToCart(cartId: $cartId, cartItems: $cartItems) {
    cart {
      id
      total_quantity
    }
    user_errors {
      code
      message
    }
  }
}
";

/// Variables for [`PRODUCT_SEARCH_QUERY`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchVariables {
    pub phrase: String,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(rename = "currentPage", skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<SearchFilterInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<GqlSortInput>>,
}

/// One search filter clause.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilterInput {
    pub attribute: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub r#in: Option<Vec<String>>,
}
