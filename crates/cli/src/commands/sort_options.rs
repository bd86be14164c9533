//! Sort options command.

#![allow(clippy::print_stdout)]

use brulerie_storefront::listing::sort::sort_options_from_metadata;
use brulerie_storefront::listing::translation::Translation;
use brulerie_storefront::{CatalogClient, CatalogConfig};

/// Fetch attribute metadata and print the derived sort choices.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env()?;
    let client = CatalogClient::new(&config);

    let metadata = client.attribute_metadata().await?;
    let options = sort_options_from_metadata(
        &Translation::default(),
        &metadata.sortable,
        &config.display_out_of_stock,
        config.category_path(),
    );

    for option in options {
        println!("{:<24} {}", option.value, option.label);
    }

    Ok(())
}
