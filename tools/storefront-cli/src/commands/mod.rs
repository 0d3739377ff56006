//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod dashboard;
pub mod product;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args, Debug, Default)]
pub struct ProductsArgs {
    /// Case-insensitive text to match in name, description or category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category id (e.g. "electronics"), or "all".
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Only trending products.
    #[arg(long)]
    pub trending: bool,

    /// Minimum star rating (0-5).
    #[arg(long)]
    pub min_rating: Option<u8>,

    /// Sort key: featured, price-low, price-high, rating, reviews.
    #[arg(long)]
    pub sort: Option<String>,

    /// Show the detailed list layout instead of the grid.
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the product command.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the shop command.
#[derive(Args, Debug)]
pub struct ShopArgs {
    /// Apply a JSON array of intents instead of prompting, then print the
    /// resulting session.
    #[arg(long)]
    pub intents: Option<String>,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File to write; a `.json` name writes JSON.
        #[arg(long, default_value = "storefront.toml")]
        path: String,
    },
}
