//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_API_URL` - Catalog Service base URL; sandbox URLs carry the
//!   `cs-graphql-sandbox` marker and are rewritten by the client
//! - `CATALOG_STORE_CODE` - store view code sent in the `Store` header
//!
//! ## Optional
//! - `CATALOG_DISPLAY_OUT_OF_STOCK` - `"1"` to surface out-of-stock
//!   products (default: `"0"`)
//! - `CATALOG_CATEGORY_URL_PATH` - category path when the listing is
//!   mounted on a category page (absent: search context)
//! - `CATALOG_PAGE_SIZE` - products per listing page (default: 12)

use thiserror::Error;

const DEFAULT_PAGE_SIZE: u32 = 12;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog Service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog Service base URL
    pub api_url: String,
    /// Store view code sent with every request
    pub store_code: String,
    /// Raw out-of-stock display flag; downstream compares it against `"1"`
    pub display_out_of_stock: String,
    /// Category path when the listing is mounted on a category page
    pub category_url_path: Option<String>,
    /// Products per listing page
    pub page_size: u32,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let page_size = match std::env::var("CATALOG_PAGE_SIZE") {
            Ok(value) => parse_page_size(&value)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_url: get_required_env("CATALOG_API_URL")?,
            store_code: get_required_env("CATALOG_STORE_CODE")?,
            display_out_of_stock: get_env_or_default("CATALOG_DISPLAY_OUT_OF_STOCK", "0"),
            category_url_path: get_optional_env("CATALOG_CATEGORY_URL_PATH"),
            page_size,
        })
    }

    /// Category path as the listing sees it; empty means search context.
    #[must_use]
    pub fn category_path(&self) -> &str {
        self.category_url_path.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the page size variable.
fn parse_page_size(value: &str) -> Result<u32, ConfigError> {
    value
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_PAGE_SIZE".to_string(), e.to_string()))
}
