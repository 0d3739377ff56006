//! Dashboard aggregates.
//!
//! Read-only views over the static sales data and the catalog.

mod sales;
mod stats;

pub use sales::{demo_series, sales_bars, SalesBar, SalesPoint};
pub use stats::{stat_cards, DashboardStats, StatCard};

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, Product};

/// Number of products in the dashboard's top list.
pub const TOP_PRODUCTS: usize = 5;

/// Products ranked by rating times review count, best first.
///
/// Ties keep catalog order.
pub fn top_products(catalog: &Catalog, limit: usize) -> Vec<Arc<Product>> {
    let mut ranked: Vec<Arc<Product>> = catalog.products().to_vec();
    ranked.sort_by(|a, b| popularity(b).total_cmp(&popularity(a)));
    ranked.truncate(limit);
    ranked
}

fn popularity(p: &Product) -> f64 {
    p.rating * f64::from(p.reviews)
}

/// Everything the dashboard view renders.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub cards: Vec<StatCard>,
    pub sales: Vec<SalesBar>,
    pub top_products: Vec<Arc<Product>>,
}

impl Dashboard {
    pub fn build(catalog: &Catalog, stats: &DashboardStats, series: &[SalesPoint]) -> Self {
        Self {
            cards: stat_cards(stats),
            sales: sales_bars(series),
            top_products: top_products(catalog, TOP_PRODUCTS),
        }
    }

    /// Dashboard over the demo figures.
    pub fn demo(catalog: &Catalog) -> Self {
        Self::build(catalog, &DashboardStats::demo(), &demo_series())
    }
}
