//! Product search command.

// Listing output is the command's purpose
#![allow(clippy::print_stdout)]

use brulerie_storefront::catalog::queries::SearchVariables;
use brulerie_storefront::catalog::types::SortDirection;
use brulerie_storefront::listing::price::{PriceFlags, PricedItem, resolve_display_price};
use brulerie_storefront::listing::{has_discount, in_stock_first};
use brulerie_storefront::listing::sort::gql_sort_input;
use brulerie_storefront::{CatalogClient, CatalogConfig};

/// Run a search and print the listing in display order.
pub async fn run(
    phrase: String,
    sort: Option<String>,
    direction: Option<String>,
    page: u32,
    page_size: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env()?;
    let client = CatalogClient::new(&config);

    let direction = direction.as_deref().map(SortDirection::from_param);
    let sort_input = sort
        .as_deref()
        .and_then(|attribute| gql_sort_input(attribute, direction));

    let variables = SearchVariables {
        phrase,
        page_size: Some(page_size.unwrap_or(config.page_size)),
        current_page: Some(page),
        filter: Vec::new(),
        sort: sort_input,
    };

    let result = client.product_search(&variables).await?;

    println!("{} products", result.total_count);
    if let Some(page_info) = result.page_info {
        println!(
            "page {} of {} ({} per page)",
            page_info.current_page, page_info.total_pages, page_info.page_size
        );
    }
    println!();

    for item in in_stock_first(result.items) {
        let priced = PricedItem::Catalog(&item);
        let price = resolve_display_price(priced, PriceFlags::default())
            .unwrap_or_else(|_| "n/a".to_string());

        let mut markers = String::new();
        if has_discount(priced) {
            let final_price = resolve_display_price(
                priced,
                PriceFlags {
                    use_final: true,
                    ..PriceFlags::default()
                },
            )
            .unwrap_or_else(|_| "n/a".to_string());
            markers.push_str(&format!("  promo {final_price}"));
        }
        if !item.product_view.in_stock {
            markers.push_str("  [out of stock]");
        }

        println!(
            "{:<24} {:>14}  {}{}",
            item.product.sku,
            price,
            item.product.name.as_deref().unwrap_or("-"),
            markers
        );
    }

    Ok(())
}
