//! Headline dashboard numbers.

use serde::{Deserialize, Serialize};

use crate::money::{group_thousands, Money};

/// Summary figures shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: Money,
    pub total_orders: u32,
    pub total_products: u32,
    pub avg_rating: f64,
    /// Revenue growth in percent.
    pub revenue_growth: f64,
    /// Order growth in percent.
    pub order_growth: f64,
}

impl DashboardStats {
    /// The published demo figures.
    pub fn demo() -> Self {
        Self {
            total_revenue: Money::usd(403_000 * 100),
            total_orders: 2144,
            total_products: 12,
            avg_rating: 4.7,
            revenue_growth: 12.5,
            order_growth: 8.3,
        }
    }

    /// The four stat cards, formatted for display.
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total Revenue",
                value: self.total_revenue.display_whole(),
                change: Some(format!("+{}%", self.revenue_growth)),
            },
            StatCard {
                title: "Total Orders",
                value: group_thousands(u64::from(self.total_orders)),
                change: Some(format!("+{}%", self.order_growth)),
            },
            StatCard {
                title: "Products",
                value: self.total_products.to_string(),
                change: None,
            },
            StatCard {
                title: "Avg Rating",
                value: format!("{:.1}", self.avg_rating),
                change: None,
            },
        ]
    }
}

/// Format the stat cards for a set of figures.
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    stats.cards()
}

/// A formatted dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: Option<String>,
}
