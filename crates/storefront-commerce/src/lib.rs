//! Storefront domain types and logic.
//!
//! This crate holds everything a storefront demo needs apart from rendering:
//!
//! - **Catalog**: Products, categories, the demo seed and a JSON loader
//! - **Search**: Filter criteria, sort keys and the visible product list
//! - **Cart**: Cart, wishlist and price summary
//! - **Dashboard**: Stat cards, sales chart and top products
//! - **Session**: Per-shopper view state driven by [`Intent`]s
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut session = Session::new(Catalog::demo());
//! session.set_category("electronics");
//! session.set_sort(SortKey::PriceLow);
//!
//! let visible = session.visible_products();
//! assert_eq!(visible.len(), 3);
//!
//! session.toggle_cart(ProductId::new(1));
//! let pricing = session.price_summary();
//! println!("Total: {}", pricing.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartEntry, CartPricing, PricingPolicy, Wishlist};
    pub use crate::catalog::{Catalog, Category, CategoryIcon, Product, ALL_CATEGORIES};
    pub use crate::dashboard::{Dashboard, DashboardStats};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::search::{visible_products, FilterCriteria, SortKey, VisibleProducts};
    pub use crate::session::{CartButton, Intent, LayoutMode, Session, View};
}
