//! Product listing command.

use anyhow::{Context as _, Result};
use storefront_commerce::money::{Currency, Money};
use storefront_commerce::search::{self, FilterCriteria, SortKey};
use storefront_commerce::session::LayoutMode;

use super::ProductsArgs;
use crate::context::Context;
use crate::render;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let criteria = criteria_from_args(&args, ctx.config.browse.sort()?)?;
    ctx.output.debug(&format!("criteria: {:?}", criteria));

    let visible = search::visible_products(&catalog, &criteria);

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    let layout = if args.list {
        LayoutMode::List
    } else {
        ctx.config.browse.layout()?
    };

    ctx.output.header("Products");
    render::products(&ctx.output, &visible, layout, None);
    Ok(())
}

/// Translate command-line flags into filter criteria.
fn criteria_from_args(args: &ProductsArgs, default_sort: SortKey) -> Result<FilterCriteria> {
    let defaults = FilterCriteria::default();

    let sort = match &args.sort {
        Some(key) => key.parse().context("Invalid --sort")?,
        None => default_sort,
    };

    let mut criteria = FilterCriteria::new().with_sort(sort).with_price_range(
        args.min_price
            .map(dollars)
            .unwrap_or(defaults.price_range.min),
        args.max_price
            .map(dollars)
            .unwrap_or(defaults.price_range.max),
    );

    if let Some(query) = &args.search {
        criteria = criteria.with_query(query.as_str());
    }
    if let Some(category) = &args.category {
        criteria = criteria.with_category(category.as_str());
    }
    if args.in_stock {
        criteria = criteria.in_stock_only();
    }
    if args.trending {
        criteria = criteria.trending_only();
    }
    if let Some(rating) = args.min_rating {
        criteria = criteria.with_min_rating(rating);
    }

    Ok(criteria)
}

fn dollars(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Catalog;
    use storefront_commerce::ProductId;

    #[test]
    fn test_no_flags_is_default_criteria() {
        let criteria = criteria_from_args(&ProductsArgs::default(), SortKey::Featured).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_flags_map_to_criteria() {
        let args = ProductsArgs {
            category: Some("electronics".to_string()),
            max_price: Some(600.0),
            in_stock: true,
            min_rating: Some(4),
            sort: Some("price-high".to_string()),
            ..ProductsArgs::default()
        };
        let criteria = criteria_from_args(&args, SortKey::Featured).unwrap();
        assert_eq!(criteria.sort, SortKey::PriceHigh);
        assert_eq!(criteria.price_range.max, Money::usd(60000));

        let visible = search::visible_products(&Catalog::demo(), &criteria);
        assert_eq!(visible.ids(), vec![ProductId::new(1)]);
    }

    #[test]
    fn test_configured_sort_applies_without_flag() {
        let criteria =
            criteria_from_args(&ProductsArgs::default(), SortKey::Reviews).unwrap();
        assert_eq!(criteria.sort, SortKey::Reviews);
    }

    #[test]
    fn test_unknown_sort_is_error() {
        let args = ProductsArgs {
            sort: Some("cheapest".to_string()),
            ..ProductsArgs::default()
        };
        assert!(criteria_from_args(&args, SortKey::Featured).is_err());
    }
}
