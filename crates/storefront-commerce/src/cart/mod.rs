//! Shopping cart module.
//!
//! Contains the cart, the wishlist, and cart pricing.

mod cart;
mod pricing;
mod wishlist;

pub use cart::{Cart, CartEntry, MIN_QUANTITY};
pub use pricing::{price_summary, CartPricing, LineItemPricing, PricingPolicy};
pub use wishlist::Wishlist;
