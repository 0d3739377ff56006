//! Monthly sales series.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Sales figures for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub sales: Money,
    pub orders: u32,
}

impl SalesPoint {
    pub fn new(month: impl Into<String>, sales_dollars: i64, orders: u32) -> Self {
        Self {
            month: month.into(),
            sales: Money::usd(sales_dollars * 100),
            orders,
        }
    }
}

/// One bar of the sales chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesBar {
    pub month: String,
    /// Sales in thousands, e.g. "$45k".
    pub label: String,
    /// Bar width relative to the best month, in percent.
    pub width_percent: f64,
    pub orders: u32,
}

/// Sales for January through July.
pub fn demo_series() -> Vec<SalesPoint> {
    vec![
        SalesPoint::new("Jan", 45_000, 234),
        SalesPoint::new("Feb", 52_000, 287),
        SalesPoint::new("Mar", 48_000, 256),
        SalesPoint::new("Apr", 61_000, 324),
        SalesPoint::new("May", 58_000, 298),
        SalesPoint::new("Jun", 67_000, 356),
        SalesPoint::new("Jul", 72_000, 389),
    ]
}

/// Scale each month against the best month.
pub fn sales_bars(series: &[SalesPoint]) -> Vec<SalesBar> {
    let max = series
        .iter()
        .map(|p| p.sales.amount_cents)
        .max()
        .unwrap_or(0);

    series
        .iter()
        .map(|p| {
            let width_percent = if max > 0 {
                p.sales.amount_cents as f64 / max as f64 * 100.0
            } else {
                0.0
            };
            SalesBar {
                month: p.month.clone(),
                label: format!(
                    "{}{}k",
                    p.sales.currency.symbol(),
                    (p.sales.to_decimal() / 1000.0).round() as i64
                ),
                width_percent,
                orders: p.orders,
            }
        })
        .collect()
}
