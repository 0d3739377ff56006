//! User intents and view-level enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use crate::search::SortKey;

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Products,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Products => "products",
        }
    }
}

impl FromStr for View {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(View::Dashboard),
            "products" => Ok(View::Products),
            _ => Err(CommerceError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the product list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Grid => "grid",
            LayoutMode::List => "list",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(LayoutMode::Grid),
            "list" => Ok(LayoutMode::List),
            _ => Err(CommerceError::UnknownLayout(s.to_string())),
        }
    }
}

/// State of a product's add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CartButton {
    /// Disabled: the product cannot be bought.
    OutOfStock,
    /// The product is in the cart; pressing removes it.
    InCart,
    /// Pressing adds one to the cart.
    AddToCart,
}

impl CartButton {
    pub fn label(&self) -> &'static str {
        match self {
            CartButton::OutOfStock => "Out of Stock",
            CartButton::InCart => "In Cart",
            CartButton::AddToCart => "Add to Cart",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, CartButton::OutOfStock)
    }
}

/// A user action routed through [`Session::dispatch`](crate::session::Session::dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    ShowView { view: View },
    SetLayout { layout: LayoutMode },
    Search { query: String },
    SelectCategory { category: CategoryId },
    SetPriceRange { min: Money, max: Money },
    SetInStockOnly { enabled: bool },
    SetTrendingOnly { enabled: bool },
    SetMinRating { rating: u8 },
    SetSort { sort: SortKey },
    ResetFilters,
    ToggleCart { product_id: ProductId },
    UpdateCartQuantity { product_id: ProductId, quantity: i64 },
    IncrementCartQuantity { product_id: ProductId },
    DecrementCartQuantity { product_id: ProductId },
    RemoveFromCart { product_id: ProductId },
    ToggleWishlist { product_id: ProductId },
    RemoveFromWishlist { product_id: ProductId },
    AddWishlistToCart,
    OpenCart,
    CloseCart,
    OpenWishlist,
    CloseWishlist,
    SelectProduct { product_id: ProductId },
    CloseProduct,
    Checkout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse() {
        assert_eq!("Products".parse::<View>().unwrap(), View::Products);
        assert!(matches!(
            "admin".parse::<View>(),
            Err(CommerceError::UnknownView(_))
        ));
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("list".parse::<LayoutMode>().unwrap(), LayoutMode::List);
        assert!("table".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_cart_button() {
        assert!(!CartButton::OutOfStock.is_enabled());
        assert_eq!(CartButton::InCart.label(), "In Cart");
    }

    #[test]
    fn test_intent_json() {
        let intent: Intent =
            serde_json::from_str(r#"{"type": "toggle_cart", "product_id": 3}"#).unwrap();
        assert_eq!(
            intent,
            Intent::ToggleCart {
                product_id: ProductId::new(3)
            }
        );

        let json = serde_json::to_string(&Intent::SetSort {
            sort: SortKey::PriceLow,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"set_sort","sort":"price-low"}"#);
    }
}
