//! Search module.
//!
//! Computes the visible product list from the catalog and the current
//! [`FilterCriteria`]. The list is derived on every call; nothing is cached.

mod criteria;
mod filter;
mod results;
mod sort;

pub use criteria::{
    CategoryFilter, FilterCriteria, PriceRange, DEFAULT_MAX_PRICE_CENTS, MAX_MIN_RATING,
};
pub use filter::Filter;
pub use results::VisibleProducts;
pub use sort::SortKey;

pub(crate) use filter::category_matches;

use std::sync::Arc;

use crate::catalog::Catalog;

/// Filter and sort the catalog.
///
/// A product is kept when all of the criteria's filters match. The sort is
/// stable, so products that compare equal keep their catalog order.
pub fn visible_products(catalog: &Catalog, criteria: &FilterCriteria) -> VisibleProducts {
    let filters = criteria.filters();

    let mut items: Vec<Arc<_>> = catalog
        .products()
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .cloned()
        .collect();

    items.sort_by(|a, b| criteria.sort.compare(a, b));

    VisibleProducts::new(items, catalog.len())
}
