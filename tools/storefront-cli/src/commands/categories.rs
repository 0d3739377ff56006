//! Category listing command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::{Catalog, Category};

use crate::context::Context;
use crate::render;

#[derive(Serialize)]
struct CategoryRow<'a> {
    #[serde(flatten)]
    category: &'a Category,
    matching: usize,
}

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&rows(&catalog));
        return Ok(());
    }

    ctx.output.header("Categories");
    render::categories(&ctx.output, &catalog);
    Ok(())
}

fn rows(catalog: &Catalog) -> Vec<CategoryRow<'_>> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryRow {
            category,
            matching: if category.is_all() {
                catalog.len()
            } else {
                catalog.matching_count(&category.id)
            },
        })
        .collect()
}
