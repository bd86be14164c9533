//! Brulerie Core - Shared types library.
//!
//! This crate provides common types used across all Brulerie components:
//! - `storefront` - Catalog client and product-listing view state
//! - `cli` - Command-line tools for querying a store
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
