//! JSON catalog documents.
//!
//! The document shape mirrors the published storefront data: camelCase keys,
//! prices as decimal dollars, and specifications as a JSON object whose key
//! order is the display order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::catalog::{Category, CategoryIcon, Product, Specification};
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};

/// Top-level catalog document.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogDocument {
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRecord {
    id: u32,
    name: String,
    category: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    original_price: Option<f64>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    reviews: u32,
    #[serde(default)]
    image: String,
    #[serde(default = "default_true")]
    in_stock: bool,
    #[serde(default)]
    trending: bool,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "ordered_specifications")]
    specifications: Vec<Specification>,
}

fn default_true() -> bool {
    true
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Product {
            id: ProductId::new(r.id),
            name: r.name,
            category: r.category,
            description: r.description,
            price: Money::from_decimal(r.price, Currency::USD),
            original_price: r
                .original_price
                .map(|p| Money::from_decimal(p, Currency::USD)),
            rating: r.rating,
            reviews: r.reviews,
            image: r.image,
            in_stock: r.in_stock,
            trending: r.trending,
            featured: r.featured,
            tags: r.tags,
            specifications: r.specifications,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRecord {
    id: String,
    name: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    count: u32,
}

impl From<CategoryRecord> for Category {
    fn from(r: CategoryRecord) -> Self {
        let icon = r
            .icon
            .as_deref()
            .and_then(CategoryIcon::from_name)
            .unwrap_or_default();
        Category {
            id: CategoryId::new(r.id),
            name: r.name,
            icon,
            count: r.count,
        }
    }
}

/// Read a `{label: value}` object into rows, keeping document order.
fn ordered_specifications<'de, D>(deserializer: D) -> Result<Vec<Specification>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SpecVisitor;

    impl<'de> Visitor<'de> for SpecVisitor {
        type Value = Vec<Specification>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of specification labels to values")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rows = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, value)) = map.next_entry::<String, String>()? {
                rows.push(Specification { label, value });
            }
            Ok(rows)
        }
    }

    deserializer.deserialize_map(SpecVisitor)
}
