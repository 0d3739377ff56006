//! Dashboard command.

use anyhow::Result;
use storefront_commerce::dashboard::Dashboard;

use crate::context::Context;
use crate::render;

/// Run the dashboard command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let dashboard = Dashboard::demo(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&dashboard);
        return Ok(());
    }

    render::dashboard(&ctx.output, &dashboard);
    Ok(())
}
