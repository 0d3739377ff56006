//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; the catalog and cart
/// share them behind `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category display name (e.g., "Smart Home").
    pub category: String,
    /// Description shown on cards and the detail view.
    pub description: String,
    /// Current price.
    pub price: Money,
    /// Price before discount, never below `price`.
    pub original_price: Option<Money>,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Image URL.
    pub image: String,
    /// Whether the product can be added to the cart.
    pub in_stock: bool,
    /// Whether the product is flagged as trending.
    pub trending: bool,
    /// Whether the product sorts first under the featured ordering.
    pub featured: bool,
    /// Tags for display.
    pub tags: Vec<String>,
    /// Labelled specifications, in display order.
    pub specifications: Vec<Specification>,
}

impl Product {
    /// Create an in-stock product with no discount, rating or tags.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: String::new(),
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            image: String::new(),
            in_stock: true,
            trending: false,
            featured: false,
            tags: Vec::new(),
            specifications: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Append a specification row.
    pub fn with_spec(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification::new(label, value));
        self
    }

    /// Lowercased category name, comparable with category ids.
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }

    /// Check if this product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount off the original price, rounded to a whole percent.
    pub fn discount_percentage(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.amount_cents <= 0 || original.amount_cents <= self.price.amount_cents {
            return None;
        }
        let savings = (original.amount_cents - self.price.amount_cents) as f64;
        Some((savings / original.amount_cents as f64 * 100.0).round() as u32)
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|_| self.is_on_sale())
            .and_then(|op| op.try_subtract(&self.price))
    }

    /// Number of filled stars for a five-star display.
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }

    /// Look up a specification value by label.
    pub fn specification(&self, label: &str) -> Option<&str> {
        self.specifications
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value.as_str())
    }
}

/// A labelled specification row (e.g., Battery Life: 30 hours).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

impl Specification {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
