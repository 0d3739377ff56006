//! Cart and cart entry types.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Product;
use crate::cart::{CartPricing, PricingPolicy};
use crate::ids::ProductId;
use crate::money::Money;

/// Smallest quantity an entry can hold.
pub const MIN_QUANTITY: u32 = 1;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartEntry {
    /// Shared, read-only catalog product.
    pub product: Arc<Product>,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: MIN_QUANTITY,
        }
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}

/// A shopping cart, unique by product id, in the order items were added.
///
/// Adding a product that is already present is not an increment: `toggle`
/// removes it instead.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product with quantity 1, or remove it if already present.
    ///
    /// Returns `true` when the product is in the cart afterwards.
    pub fn toggle(&mut self, product: Arc<Product>) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.entries.push(CartEntry::new(product));
            true
        }
    }

    /// Set an entry's quantity, flooring at 1. No upper bound.
    ///
    /// Returns `false` (and changes nothing) when the product is absent.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let quantity = clamp_quantity(quantity);
        match self.entry_mut(id) {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Raise an entry's quantity by one.
    pub fn increment(&mut self, id: ProductId) -> bool {
        match self.quantity(id) {
            Some(q) => self.update_quantity(id, i64::from(q) + 1),
            None => false,
        }
    }

    /// Lower an entry's quantity by one, never below 1.
    pub fn decrement(&mut self, id: ProductId) -> bool {
        match self.quantity(id) {
            Some(q) => self.update_quantity(id, i64::from(q) - 1),
            None => false,
        }
    }

    /// Remove an entry regardless of quantity. Returns whether it was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product.id != id);
        self.entries.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Get an entry by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == id)
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product.id == id)
    }

    /// Quantity of a product, if present.
    pub fn quantity(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(|e| e.quantity)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Product ids in insertion order.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.entries.iter().map(|e| e.product.id)
    }

    /// Number of distinct products (the header badge).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Price the cart under the given policy.
    pub fn pricing(&self, policy: &PricingPolicy) -> CartPricing {
        policy.price(&self.entries)
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX)) as u32
}
