//! Product catalog module.
//!
//! The catalog is a fixed, read-only collection of products and categories
//! built once at startup. Products are handed out as shared `Arc`s so cart
//! entries can hold them without copying.

mod category;
mod loader;
mod product;
pub mod seed;

pub use category::{Category, CategoryIcon, ALL_CATEGORIES};
pub use product::{Product, Specification};

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::search::{category_matches, CategoryFilter};

/// Immutable store of products and categories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, validating the product data.
    ///
    /// Category `count` values are not checked against membership.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CommerceError> {
        validate(&products, &categories)?;
        let catalog = Self::assemble(products, categories);
        catalog.log_loaded();
        Ok(catalog)
    }

    /// The built-in demo catalog.
    pub fn demo() -> Self {
        let catalog = Self::assemble(seed::products(), seed::categories());
        catalog.log_loaded();
        catalog
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let doc: loader::CatalogDocument = serde_json::from_str(json)?;
        let products = doc.products.into_iter().map(Product::from).collect();
        let categories = doc.categories.into_iter().map(Category::from).collect();
        Self::new(products, categories)
    }

    fn assemble(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
            categories,
        }
    }

    fn log_loaded(&self) {
        info!(
            products = self.len(),
            categories = self.categories.len(),
            "catalog loaded"
        );
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().map(|p| p.as_ref())
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    pub fn require(&self, id: ProductId) -> Result<&Arc<Product>, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sidebar categories, including the catch-all entry.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Number of products the category filter keeps for this id.
    ///
    /// May differ from the displayed `Category::count`.
    pub fn matching_count(&self, id: &CategoryId) -> usize {
        match CategoryFilter::from_id(id.clone()) {
            CategoryFilter::All => self.len(),
            CategoryFilter::Only(id) => self.iter().filter(|p| category_matches(p, &id)).count(),
        }
    }
}

fn validate(products: &[Product], categories: &[Category]) -> Result<(), CommerceError> {
    let mut seen = HashSet::new();
    for p in products {
        if !seen.insert(p.id) {
            return Err(CommerceError::InvalidCatalog(format!(
                "duplicate product id {}",
                p.id
            )));
        }
        if p.price.is_negative() {
            return Err(CommerceError::InvalidCatalog(format!(
                "product {} has a negative price",
                p.id
            )));
        }
        if let Some(original) = p.original_price {
            if original < p.price {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has an original price below its price",
                    p.id
                )));
            }
        }
        if !(0.0..=5.0).contains(&p.rating) {
            return Err(CommerceError::InvalidCatalog(format!(
                "product {} has rating {} outside 0-5",
                p.id, p.rating
            )));
        }
    }

    let mut seen = HashSet::new();
    for c in categories {
        if !seen.insert(c.id.as_str()) {
            return Err(CommerceError::InvalidCatalog(format!(
                "duplicate category id {}",
                c.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::search::{self, FilterCriteria};
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.categories().len(), 10);
        assert!(validate(&seed::products(), &seed::categories()).is_ok());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::demo();
        let lens = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(lens.name, "Professional Camera Lens");
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(matches!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_category_counts_are_not_recomputed() {
        let catalog = Catalog::demo();
        let electronics = CategoryId::new("electronics");
        assert_eq!(catalog.category(&electronics).unwrap().count, 4);
        assert_eq!(catalog.matching_count(&electronics), 3);
        assert_eq!(catalog.matching_count(&CategoryId::new("all")), 12);
    }

    #[test]
    fn test_matching_count_agrees_with_filter() {
        let catalog = Catalog::new(
            vec![
                Product::new(ProductId::new(1), "Casque", "Électronique", Money::usd(100)),
                Product::new(ProductId::new(2), "Speaker", "Audio", Money::usd(200)),
            ],
            vec![],
        )
        .unwrap();

        for id in ["électronique", "ÉLECTRONIQUE", "ALL", "All", "audio", "gaming"] {
            let criteria = FilterCriteria::new().with_category(id);
            let visible = search::visible_products(&catalog, &criteria);
            assert_eq!(catalog.matching_count(&CategoryId::new(id)), visible.len(), "{id}");
        }
        assert_eq!(catalog.matching_count(&CategoryId::new("électronique")), 1);
        assert_eq!(catalog.matching_count(&CategoryId::new("ALL")), 2);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_demo_logs_catalog_loaded() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            Catalog::demo();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("catalog loaded"), "{logs}");
        assert!(logs.contains("products=12"), "{logs}");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let p = Product::new(ProductId::new(1), "A", "Audio", Money::usd(100));
        let result = Catalog::new(vec![p.clone(), p], vec![]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_bad_original_price() {
        let p = Product::new(ProductId::new(1), "A", "Audio", Money::usd(1000))
            .with_original_price(Money::usd(900));
        assert!(Catalog::new(vec![p], vec![]).is_err());
    }

    #[test]
    fn test_rejects_rating_out_of_range() {
        let p = Product::new(ProductId::new(1), "A", "Audio", Money::usd(1000))
            .with_rating(5.5, 3);
        assert!(Catalog::new(vec![p], vec![]).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "products": [{
                "id": 1,
                "name": "Premium Wireless Headphones",
                "category": "Electronics",
                "price": 299.99,
                "originalPrice": 399.99,
                "rating": 4.8,
                "reviews": 1234,
                "description": "Noise cancelling.",
                "inStock": true,
                "trending": true,
                "featured": true,
                "tags": ["wireless"],
                "specifications": {"Weight": "250g", "Battery Life": "30 hours"}
            }],
            "categories": [
                {"id": "all", "name": "All Products", "icon": "LayoutGrid", "count": 1},
                {"id": "gaming", "name": "Gaming", "icon": "Gamepad2", "count": 0}
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let p = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(p.price, Money::usd(29999));
        assert_eq!(p.original_price, Some(Money::usd(39999)));
        assert_eq!(p.specifications[0].label, "Weight");
        assert_eq!(p.specifications[1].label, "Battery Life");
        assert_eq!(catalog.categories()[1].icon, CategoryIcon::Gamepad);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Catalog::from_json("{\"products\": 3}").unwrap_err();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
