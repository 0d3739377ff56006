//! Filter criteria controlled from the browse sidebar.

use serde::{Deserialize, Serialize};

use crate::catalog::ALL_CATEGORIES;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::{Filter, SortKey};

/// Highest selectable minimum rating.
pub const MAX_MIN_RATING: u8 = 5;

/// Upper bound of the default price range, in cents.
pub const DEFAULT_MAX_PRICE_CENTS: i64 = 100_000;

/// Category selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products in this category.
    Only(CategoryId),
}

impl CategoryFilter {
    /// Parse a sidebar id, treating `"all"` as no restriction.
    pub fn from_id(id: impl Into<CategoryId>) -> Self {
        let id = id.into();
        if id.as_str().eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    /// The sidebar id of this selection.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id.as_str(),
        }
    }
}

/// Closed price interval.
///
/// `min <= max` is expected but not enforced; an inverted range simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Check whether the range is inverted.
    pub fn is_inverted(&self) -> bool {
        self.min.amount_cents > self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Money::usd(0), Money::usd(DEFAULT_MAX_PRICE_CENTS))
    }
}

/// The current combination of search, filter and sort inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Free-text search.
    pub search_query: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Accepted price interval.
    pub price_range: PriceRange,
    /// Hide out-of-stock products.
    pub in_stock_only: bool,
    /// Hide non-trending products.
    pub trending_only: bool,
    /// Minimum rating, 0 disables the filter.
    pub min_rating: u8,
    /// Ordering of the visible list.
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Create criteria with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.search_query = q.into();
        self
    }

    /// Restrict to a category id (`"all"` clears the restriction).
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category = CategoryFilter::from_id(id);
        self
    }

    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    pub fn trending_only(mut self) -> Self {
        self.trending_only = true;
        self
    }

    /// Set the minimum rating, clamped to 5.
    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = rating.min(MAX_MIN_RATING);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Restore every setting except the search query.
    pub fn reset(&mut self) {
        *self = Self {
            search_query: std::mem::take(&mut self.search_query),
            ..Self::default()
        };
    }

    /// Check if any sidebar filter differs from its default.
    pub fn has_active_filters(&self) -> bool {
        let defaults = Self::default();
        self.category != defaults.category
            || self.price_range != defaults.price_range
            || self.in_stock_only
            || self.trending_only
            || self.min_rating > 0
    }

    /// The filters these criteria impose. Inactive settings add nothing.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        if !self.search_query.is_empty() {
            filters.push(Filter::Text(self.search_query.clone()));
        }
        if let CategoryFilter::Only(id) = &self.category {
            filters.push(Filter::Category(id.clone()));
        }
        filters.push(Filter::PriceRange {
            min: self.price_range.min,
            max: self.price_range.max,
        });
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        if self.trending_only {
            filters.push(Filter::Trending);
        }
        if self.min_rating > 0 {
            filters.push(Filter::Rating {
                min: self.min_rating,
            });
        }

        filters
    }
}
