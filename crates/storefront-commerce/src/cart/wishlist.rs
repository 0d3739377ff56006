//! Wishlist membership.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;

/// A set of saved product ids.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    ///
    /// Returns `true` when the id is saved afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Remove an id. Returns whether it was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// Saved products in catalog order.
    pub fn products(&self, catalog: &Catalog) -> Vec<Arc<Product>> {
        catalog
            .products()
            .iter()
            .filter(|p| self.contains(p.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new(3);
        assert!(wishlist.toggle(id));
        assert!(wishlist.contains(id));
        assert!(!wishlist.toggle(id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle_twice_keeps_other_members() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(1));
        let before = wishlist.clone();
        wishlist.toggle(ProductId::new(3));
        wishlist.toggle(ProductId::new(3));
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(4));
        assert!(wishlist.remove(ProductId::new(4)));
        assert!(!wishlist.remove(ProductId::new(4)));
    }

    #[test]
    fn test_products_follow_catalog_order() {
        let catalog = Catalog::demo();
        let mut wishlist = Wishlist::new();
        for id in [12, 2, 7] {
            wishlist.toggle(ProductId::new(id));
        }
        wishlist.toggle(ProductId::new(404));

        let ids: Vec<u32> = wishlist
            .products(&catalog)
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![2, 7, 12]);
    }
}
