//! Cart commands.

#![allow(clippy::print_stdout)]

use brulerie_core::Quantity;
use brulerie_storefront::catalog::types::CartItemInput;
use brulerie_storefront::{CatalogClient, CatalogConfig};

/// Add a single SKU to an existing cart.
pub async fn add(
    cart_id: &str,
    sku: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env()?;
    let client = CatalogClient::new(&config);

    let quantity = Quantity::new(quantity);
    let items = vec![CartItemInput {
        sku: sku.to_string(),
        quantity: quantity.get(),
        selected_options: Vec::new(),
    }];

    let cart = client.add_products_to_cart(cart_id, &items).await?;

    println!("cart {} now holds {} items", cart.id, cart.total_quantity);
    Ok(())
}
