//! Brulerie storefront library.
//!
//! Data layer for the product-listing widget set: a Catalog Service
//! GraphQL client plus the view state the listing renders from (sort
//! choices, price display, query-string sort persistence).
//!
//! Rendering lives elsewhere; everything here is payloads in, derived
//! values out.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod listing;

pub use catalog::{CatalogClient, CatalogError};
pub use config::{CatalogConfig, ConfigError};
