//! Storefront CLI - Browse the storefront demo from the terminal.
//!
//! Commands:
//! - `storefront products` - List products with filters and sorting
//! - `storefront product` - Show one product
//! - `storefront categories` - List categories
//! - `storefront dashboard` - Show the sales dashboard
//! - `storefront shop` - Interactive shopping session
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ProductArgs, ProductsArgs, ShopArgs};

/// Storefront CLI - Browse, filter and shop the demo catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show product details
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Show the sales dashboard
    Dashboard,

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    storefront_observability::init(ctx.config.logging.verbose(cli.verbose));
    tracing::debug!(config = ?ctx.config_path, "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Dashboard => commands::dashboard::run(&ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
