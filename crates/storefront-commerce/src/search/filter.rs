//! Product filters.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single predicate over products.
///
/// A product is visible when every active filter matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring of name, description or category.
    Text(String),
    /// Category name equals the id, ignoring case.
    Category(CategoryId),
    /// Price within a closed interval.
    PriceRange { min: Money, max: Money },
    /// Only show in-stock items.
    InStock,
    /// Only show trending items.
    Trending,
    /// Rating at or above a threshold.
    Rating { min: u8 },
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Money, max: Money) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product.category.to_lowercase().contains(&needle)
            }
            Filter::Category(id) => category_matches(product, id),
            Filter::PriceRange { min, max } => {
                min.amount_cents <= product.price.amount_cents
                    && product.price.amount_cents <= max.amount_cents
            }
            Filter::InStock => product.in_stock,
            Filter::Trending => product.trending,
            Filter::Rating { min } => product.rating >= f64::from(*min),
        }
    }
}

/// Category membership as the sidebar applies it.
pub(crate) fn category_matches(product: &Product, id: &CategoryId) -> bool {
    product.category.to_lowercase() == id.as_str().to_lowercase()
}
