//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the edges of the storefront core.
///
/// Cart, wishlist and filter operations are total and never fail; these
/// variants cover parsing user input and loading catalog data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Unrecognized sort key.
    #[error("Unknown sort key: {0} (expected featured, price-low, price-high, rating or reviews)")]
    UnknownSortKey(String),

    /// Unrecognized top-level view.
    #[error("Unknown view: {0} (expected dashboard or products)")]
    UnknownView(String),

    /// Unrecognized layout mode.
    #[error("Unknown layout: {0} (expected grid or list)")]
    UnknownLayout(String),

    /// Catalog data failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
