//! Brulerie CLI - Catalog queries from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog
//! brulerie search "lungo" --sort price --direction DESC
//!
//! # Browse the configured category (empty phrase)
//! brulerie search
//!
//! # Print the sort choices the store exposes
//! brulerie sort-options
//!
//! # Add an item to a cart
//! brulerie add-to-cart --cart-id <id> --sku CAFE-NOIR-16 --quantity 2
//! ```
//!
//! Configuration comes from the environment (see `CatalogConfig`):
//! `CATALOG_API_URL`, `CATALOG_STORE_CODE`, and the optional listing flags.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "brulerie")]
#[command(author, version, about = "Brulerie catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and print the listing
    Search {
        /// Search phrase; empty browses the configured category
        #[arg(default_value = "")]
        phrase: String,

        /// Sort attribute code (e.g. `price`, `name`)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort direction, `ASC` or `DESC`
        #[arg(short, long)]
        direction: Option<String>,

        /// Page to fetch
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Page size override
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Print the sort choices the store exposes
    SortOptions,
    /// Add an item to a cart
    AddToCart {
        /// Cart identifier from the commerce backend
        #[arg(long)]
        cart_id: String,

        /// Product SKU
        #[arg(long)]
        sku: String,

        /// Quantity to add (clamped to the storefront bounds)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Search {
            phrase,
            sort,
            direction,
            page,
            page_size,
        } => {
            commands::search::run(phrase, sort, direction, page, page_size).await?;
        }
        Commands::SortOptions => commands::sort_options::run().await?,
        Commands::AddToCart {
            cart_id,
            sku,
            quantity,
        } => commands::cart::add(&cart_id, &sku, quantity).await?,
    }
    Ok(())
}
