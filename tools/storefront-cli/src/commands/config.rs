//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, path } => init_config(&path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let config = &ctx.config;

    ctx.output.line("");
    ctx.output.line("[catalog]");
    ctx.output.kv(
        "path",
        config.catalog.path.as_deref().unwrap_or("(built-in demo)"),
    );

    ctx.output.line("");
    ctx.output.line("[pricing]");
    ctx.output.kv(
        "tax_rate_percent",
        &config.pricing.tax_rate_percent.to_string(),
    );
    ctx.output.kv(
        "free_shipping_threshold",
        &config.pricing.free_shipping_threshold.to_string(),
    );
    ctx.output.kv("flat_shipping", &config.pricing.flat_shipping.to_string());

    ctx.output.line("");
    ctx.output.line("[browse]");
    ctx.output.kv("default_sort", &config.browse.default_sort);
    ctx.output.kv("default_layout", &config.browse.default_layout);

    ctx.output.line("");
    ctx.output.line("[logging]");
    ctx.output.kv("level", config.logging.level.as_directive());
    ctx.output.kv("format", config.logging.format.as_str());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let target = config_path.to_string_lossy();
    if target.ends_with(".json") {
        StorefrontConfig::default().save(&target)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
