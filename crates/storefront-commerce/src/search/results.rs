//! The visible product list.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Product;
use crate::ids::ProductId;

/// Filtered, sorted products plus the size of the catalog they came from.
#[derive(Debug, Clone, Serialize)]
pub struct VisibleProducts {
    /// The products, in display order.
    pub items: Vec<Arc<Product>>,
    /// Number of products in the catalog.
    pub catalog_size: usize,
}

impl VisibleProducts {
    pub fn new(items: Vec<Arc<Product>>, catalog_size: usize) -> Self {
        Self {
            items,
            catalog_size,
        }
    }

    /// Check if no products survived the filters.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Product ids in display order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter().map(|p| p.as_ref())
    }

    /// Summary line, e.g. "Showing 3 of 12 products".
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.len(), self.catalog_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_summary() {
        let p = Arc::new(Product::new(ProductId::new(4), "Chair", "Furniture", Money::usd(1)));
        let visible = VisibleProducts::new(vec![p], 12);
        assert_eq!(visible.summary(), "Showing 1 of 12 products");
        assert_eq!(visible.ids(), vec![ProductId::new(4)]);
        assert!(!visible.is_empty());
    }

    #[test]
    fn test_empty() {
        let visible = VisibleProducts::new(Vec::new(), 12);
        assert!(visible.is_empty());
        assert_eq!(visible.len(), 0);
    }
}
