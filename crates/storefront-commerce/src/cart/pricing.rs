//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::ids::ProductId;
use crate::money::Money;

/// Tax, shipping and free-shipping rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Tax as a percentage of the subtotal.
    pub tax_rate_percent: f64,
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Money,
    /// Shipping charged otherwise.
    pub flat_shipping: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate_percent: 10.0,
            free_shipping_threshold: Money::usd(5000),
            flat_shipping: Money::usd(999),
        }
    }
}

impl PricingPolicy {
    /// Price a set of cart entries.
    ///
    /// A subtotal exactly equal to the threshold still pays shipping, and an
    /// empty cart is priced like any other: zero subtotal plus flat shipping.
    ///
    /// Tax is rounded half away from zero to the cent before it is added, so
    /// `total` is always the exact sum of the three displayed amounts. On a
    /// half-cent tax this can be 1 cent above a total that sums unrounded tax.
    pub fn price(&self, entries: &[CartEntry]) -> CartPricing {
        let currency = self.flat_shipping.currency;

        let line_items: Vec<LineItemPricing> = entries
            .iter()
            .map(|e| LineItemPricing {
                product_id: e.product.id,
                unit_price: e.product.price,
                quantity: e.quantity,
                total: e.line_total(),
            })
            .collect();

        let subtotal = Money::sum(line_items.iter().map(|l| &l.total), currency);
        let tax = subtotal.percentage(self.tax_rate_percent);
        let shipping = if subtotal.amount_cents > self.free_shipping_threshold.amount_cents {
            Money::zero(currency)
        } else {
            self.flat_shipping
        };

        CartPricing {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            free_shipping_threshold: self.free_shipping_threshold,
            line_items,
        }
    }
}

/// Price the entries under the default policy.
pub fn price_summary(entries: &[CartEntry]) -> CartPricing {
    PricingPolicy::default().price(entries)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Subtotal + tax + shipping.
    pub total: Money,
    /// Threshold the subtotal must exceed for free shipping.
    pub free_shipping_threshold: Money,
    /// Per-entry breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Check if shipping is waived.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more to spend to reach the free-shipping threshold.
    ///
    /// `None` once shipping is free.
    pub fn free_shipping_remaining(&self) -> Option<Money> {
        if self.has_free_shipping() {
            return None;
        }
        self.free_shipping_threshold.try_subtract(&self.subtotal)
    }
}

/// Pricing breakdown for a single cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Product;
    use std::sync::Arc;

    fn cart_with(lines: &[(u32, i64, i64)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, price_cents, quantity) in lines {
            let product = Arc::new(Product::new(
                ProductId::new(id),
                "Item",
                "Audio",
                Money::usd(price_cents),
            ));
            cart.toggle(product);
            cart.update_quantity(ProductId::new(id), quantity);
        }
        cart
    }

    #[test]
    fn test_single_entry_over_threshold() {
        let cart = cart_with(&[(1, 10000, 2)]);
        let pricing = price_summary(cart.entries());
        assert_eq!(pricing.subtotal, Money::usd(20000));
        assert_eq!(pricing.tax, Money::usd(2000));
        assert_eq!(pricing.shipping, Money::usd(0));
        assert_eq!(pricing.total, Money::usd(22000));
        assert!(pricing.has_free_shipping());
        assert_eq!(pricing.free_shipping_remaining(), None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let at = price_summary(cart_with(&[(1, 5000, 1)]).entries());
        assert_eq!(at.shipping, Money::usd(999));
        assert_eq!(at.free_shipping_remaining(), Some(Money::usd(0)));

        let above = price_summary(cart_with(&[(1, 5001, 1)]).entries());
        assert_eq!(above.shipping, Money::usd(0));
    }

    #[test]
    fn test_empty_cart_still_charges_shipping() {
        let pricing = price_summary(&[]);
        assert_eq!(pricing.subtotal, Money::usd(0));
        assert_eq!(pricing.tax, Money::usd(0));
        assert_eq!(pricing.shipping, Money::usd(999));
        assert_eq!(pricing.total, Money::usd(999));
        assert!(pricing.line_items.is_empty());
    }

    #[test]
    fn test_multiple_entries() {
        // 2 x 12.99 + 1 x 9.50 = 35.48, tax 3.548 -> 3.55
        let cart = cart_with(&[(1, 1299, 2), (2, 950, 1)]);
        let pricing = cart.pricing(&PricingPolicy::default());
        assert_eq!(pricing.subtotal, Money::usd(3548));
        assert_eq!(pricing.tax, Money::usd(355));
        assert_eq!(pricing.shipping, Money::usd(999));
        assert_eq!(pricing.total, Money::usd(3548 + 355 + 999));
        assert_eq!(pricing.free_shipping_remaining(), Some(Money::usd(1452)));
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[0].total, Money::usd(2598));
    }

    #[test]
    fn test_half_cent_tax_rounds_before_total() {
        // 12.35 x 10% = 1.235 -> 1.24
        let pricing = price_summary(cart_with(&[(1, 1235, 1)]).entries());
        assert_eq!(pricing.tax, Money::usd(124));
        assert_eq!(pricing.total, Money::usd(1235 + 124 + 999));
        assert_eq!(
            pricing.total,
            pricing.subtotal + pricing.tax + pricing.shipping
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            tax_rate_percent: 0.0,
            free_shipping_threshold: Money::usd(10000),
            flat_shipping: Money::usd(500),
        };
        let pricing = cart_with(&[(1, 6000, 1)]).pricing(&policy);
        assert_eq!(pricing.tax, Money::usd(0));
        assert_eq!(pricing.shipping, Money::usd(500));
        assert_eq!(pricing.total, Money::usd(6500));
    }
}
