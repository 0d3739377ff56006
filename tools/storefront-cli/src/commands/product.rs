//! Product detail command.

use anyhow::Result;
use storefront_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::render;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    render::product_detail(&ctx.output, product);
    Ok(())
}
