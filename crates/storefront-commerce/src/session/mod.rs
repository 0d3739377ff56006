//! Browsing session state.
//!
//! A [`Session`] owns everything a single shopper can change: the active
//! view, filter criteria, cart, wishlist and open panels. Derived data (the
//! visible list, cart totals) is recomputed from this state on every read.

mod intent;

pub use intent::{CartButton, Intent, LayoutMode, View};

use std::sync::Arc;

use tracing::{debug, info};

use crate::cart::{Cart, CartPricing, PricingPolicy, Wishlist};
use crate::catalog::{Catalog, Product};
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use crate::search::{self, CategoryFilter, FilterCriteria, PriceRange, SortKey, VisibleProducts};

/// Single-shopper view controller.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    pricing: PricingPolicy,
    view: View,
    layout: LayoutMode,
    criteria: FilterCriteria,
    cart: Cart,
    wishlist: Wishlist,
    cart_open: bool,
    wishlist_open: bool,
    selected: Option<ProductId>,
}

impl Session {
    /// Start a session over a catalog with default settings.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            pricing: PricingPolicy::default(),
            view: View::default(),
            layout: LayoutMode::default(),
            criteria: FilterCriteria::default(),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            cart_open: false,
            wishlist_open: false,
            selected: None,
        }
    }

    /// Use a different pricing policy.
    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = pricing;
        self
    }

    /// Start with a different initial sort.
    ///
    /// `reset_filters` still returns to the featured ordering.
    pub fn with_initial_sort(mut self, sort: SortKey) -> Self {
        self.criteria.sort = sort;
        self
    }

    /// Start with a different product layout.
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    // ---- accessors ----

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn pricing_policy(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_wishlist_open(&self) -> bool {
        self.wishlist_open
    }

    // ---- view ----

    pub fn set_view(&mut self, view: View) {
        debug!(view = %view, "switch view");
        self.view = view;
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    // ---- criteria ----

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        debug!(query = %self.criteria.search_query, "search");
    }

    /// Select a sidebar category; `"all"` clears the restriction.
    pub fn set_category(&mut self, id: impl Into<CategoryId>) {
        self.criteria.category = CategoryFilter::from_id(id);
        debug!(category = self.criteria.category.as_str(), "select category");
    }

    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.criteria.price_range = PriceRange::new(min, max);
        debug!(min = %min, max = %max, "set price range");
    }

    pub fn set_in_stock_only(&mut self, enabled: bool) {
        self.criteria.in_stock_only = enabled;
    }

    pub fn set_trending_only(&mut self, enabled: bool) {
        self.criteria.trending_only = enabled;
    }

    /// Set the minimum rating, clamped to 5.
    pub fn set_min_rating(&mut self, rating: u8) {
        self.criteria.min_rating = rating.min(search::MAX_MIN_RATING);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
        debug!(sort = %sort, "set sort");
    }

    /// Restore filter defaults. The search query, cart and wishlist are kept.
    pub fn reset_filters(&mut self) {
        self.criteria.reset();
        debug!("reset filters");
    }

    // ---- cart ----

    /// Add a product to the cart, or remove it if present.
    ///
    /// Unknown ids are ignored.
    pub fn toggle_cart(&mut self, id: ProductId) {
        let Some(product) = self.catalog.get(id).cloned() else {
            debug!(product_id = %id, "toggle cart ignored: unknown product");
            return;
        };
        let added = self.cart.toggle(product);
        debug!(product_id = %id, added, "toggle cart");
    }

    /// Set a cart quantity, flooring at 1. Ignored when the product is not
    /// in the cart.
    pub fn update_cart_quantity(&mut self, id: ProductId, quantity: i64) {
        if !self.cart.update_quantity(id, quantity) {
            debug!(product_id = %id, "quantity update ignored: not in cart");
        }
    }

    pub fn increment_cart_quantity(&mut self, id: ProductId) {
        self.cart.increment(id);
    }

    pub fn decrement_cart_quantity(&mut self, id: ProductId) {
        self.cart.decrement(id);
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    // ---- wishlist ----

    /// Save or unsave a product. Unknown ids are ignored.
    pub fn toggle_wishlist(&mut self, id: ProductId) {
        if !self.catalog.contains(id) {
            debug!(product_id = %id, "toggle wishlist ignored: unknown product");
            return;
        }
        let saved = self.wishlist.toggle(id);
        debug!(product_id = %id, saved, "toggle wishlist");
    }

    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.wishlist.remove(id);
    }

    /// Put every in-stock wishlisted product into the cart.
    ///
    /// Products already in the cart are left as they are. Returns the ids
    /// that were added.
    pub fn add_wishlist_to_cart(&mut self) -> Vec<ProductId> {
        let to_add: Vec<Arc<Product>> = self
            .wishlist
            .products(&self.catalog)
            .into_iter()
            .filter(|p| p.in_stock && !self.cart.contains(p.id))
            .collect();

        let added: Vec<ProductId> = to_add.iter().map(|p| p.id).collect();
        for product in to_add {
            self.cart.toggle(product);
        }
        debug!(count = added.len(), "add wishlist to cart");
        added
    }

    // ---- panels ----

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn open_wishlist(&mut self) {
        self.wishlist_open = true;
    }

    pub fn close_wishlist(&mut self) {
        self.wishlist_open = false;
    }

    /// Open the detail view for a product. Unknown ids are ignored.
    pub fn select_product(&mut self, id: ProductId) {
        if self.catalog.contains(id) {
            self.selected = Some(id);
        } else {
            debug!(product_id = %id, "select ignored: unknown product");
        }
    }

    pub fn close_product(&mut self) {
        self.selected = None;
    }

    /// Checkout does not process payments; it reports the current totals and
    /// leaves the cart unchanged.
    pub fn checkout(&self) -> CartPricing {
        let pricing = self.price_summary();
        info!(
            items = self.cart.len(),
            total = %pricing.total,
            "checkout requested, no payment taken"
        );
        pricing
    }

    // ---- derived ----

    /// The filtered, sorted product list for the current criteria.
    pub fn visible_products(&self) -> VisibleProducts {
        search::visible_products(&self.catalog, &self.criteria)
    }

    /// Totals for the current cart.
    pub fn price_summary(&self) -> CartPricing {
        self.cart.pricing(&self.pricing)
    }

    /// Wishlisted products in catalog order.
    pub fn wishlist_products(&self) -> Vec<Arc<Product>> {
        self.wishlist.products(&self.catalog)
    }

    /// The product open in the detail view.
    pub fn selected_product(&self) -> Option<&Arc<Product>> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    /// Distinct products in the cart (header badge).
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(id)
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Add-to-cart button state for a product.
    pub fn cart_button(&self, product: &Product) -> CartButton {
        if !product.in_stock {
            CartButton::OutOfStock
        } else if self.cart.contains(product.id) {
            CartButton::InCart
        } else {
            CartButton::AddToCart
        }
    }

    // ---- dispatch ----

    /// Apply a user intent.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        match intent {
            Intent::ShowView { view } => self.set_view(view),
            Intent::SetLayout { layout } => self.set_layout(layout),
            Intent::Search { query } => self.set_search_query(query),
            Intent::SelectCategory { category } => self.set_category(category),
            Intent::SetPriceRange { min, max } => self.set_price_range(min, max),
            Intent::SetInStockOnly { enabled } => self.set_in_stock_only(enabled),
            Intent::SetTrendingOnly { enabled } => self.set_trending_only(enabled),
            Intent::SetMinRating { rating } => self.set_min_rating(rating),
            Intent::SetSort { sort } => self.set_sort(sort),
            Intent::ResetFilters => self.reset_filters(),
            Intent::ToggleCart { product_id } => self.toggle_cart(product_id),
            Intent::UpdateCartQuantity {
                product_id,
                quantity,
            } => self.update_cart_quantity(product_id, quantity),
            Intent::IncrementCartQuantity { product_id } => {
                self.increment_cart_quantity(product_id)
            }
            Intent::DecrementCartQuantity { product_id } => {
                self.decrement_cart_quantity(product_id)
            }
            Intent::RemoveFromCart { product_id } => self.remove_from_cart(product_id),
            Intent::ToggleWishlist { product_id } => self.toggle_wishlist(product_id),
            Intent::RemoveFromWishlist { product_id } => self.remove_from_wishlist(product_id),
            Intent::AddWishlistToCart => {
                self.add_wishlist_to_cart();
            }
            Intent::OpenCart => self.open_cart(),
            Intent::CloseCart => self.close_cart(),
            Intent::OpenWishlist => self.open_wishlist(),
            Intent::CloseWishlist => self.close_wishlist(),
            Intent::SelectProduct { product_id } => self.select_product(product_id),
            Intent::CloseProduct => self.close_product(),
            Intent::Checkout => {
                self.checkout();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Catalog::demo())
    }

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.view(), View::Dashboard);
        assert_eq!(s.layout(), LayoutMode::Grid);
        assert_eq!(s.criteria(), &FilterCriteria::default());
        assert!(s.cart().is_empty());
        assert!(s.wishlist().is_empty());
        assert!(!s.is_cart_open());
        assert!(!s.is_wishlist_open());
        assert!(s.selected_product().is_none());
    }

    #[test]
    fn test_toggle_cart_unknown_id_is_noop() {
        let mut s = session();
        s.toggle_cart(id(404));
        assert!(s.cart().is_empty());
    }

    #[test]
    fn test_toggle_cart_shares_catalog_product() {
        let mut s = session();
        s.toggle_cart(id(1));
        let entry = s.cart().get(id(1)).unwrap();
        let in_catalog = s.catalog().get(id(1)).unwrap();
        assert!(Arc::ptr_eq(&entry.product, in_catalog));
    }

    #[test]
    fn test_toggle_wishlist_twice() {
        let mut s = session();
        s.toggle_wishlist(id(3));
        assert!(s.is_in_wishlist(id(3)));
        s.toggle_wishlist(id(3));
        assert!(s.wishlist().is_empty());

        s.toggle_wishlist(id(404));
        assert!(s.wishlist().is_empty());
    }

    #[test]
    fn test_quantity_flow() {
        let mut s = session();
        s.toggle_cart(id(11));
        s.update_cart_quantity(id(11), 0);
        assert_eq!(s.cart().quantity(id(11)), Some(1));
        s.update_cart_quantity(id(11), -5);
        assert_eq!(s.cart().quantity(id(11)), Some(1));
        s.increment_cart_quantity(id(11));
        assert_eq!(s.cart().quantity(id(11)), Some(2));
        s.decrement_cart_quantity(id(11));
        s.decrement_cart_quantity(id(11));
        assert_eq!(s.cart().quantity(id(11)), Some(1));

        s.update_cart_quantity(id(2), 5);
        assert!(!s.is_in_cart(id(2)));
    }

    #[test]
    fn test_reset_filters_keeps_search_cart_and_wishlist() {
        let mut s = session();
        s.set_search_query("pro");
        s.set_category("electronics");
        s.set_price_range(Money::usd(1000), Money::usd(2000));
        s.set_in_stock_only(true);
        s.set_trending_only(true);
        s.set_min_rating(4);
        s.set_sort(SortKey::Reviews);
        s.toggle_cart(id(1));
        s.toggle_wishlist(id(2));

        s.reset_filters();

        assert_eq!(s.criteria(), &FilterCriteria::new().with_query("pro"));
        assert!(s.is_in_cart(id(1)));
        assert!(s.is_in_wishlist(id(2)));
    }

    #[test]
    fn test_visible_products_follow_latest_state() {
        let mut s = session();
        assert_eq!(s.visible_products().len(), 12);
        s.set_category("electronics");
        s.set_min_rating(4);
        assert_eq!(s.visible_products().len(), 3);
        s.set_in_stock_only(true);
        assert_eq!(s.visible_products().ids(), vec![id(1), id(5)]);
        s.set_category("all");
        s.set_search_query("zzz");
        assert!(s.visible_products().is_empty());
    }

    #[test]
    fn test_price_summary_tracks_cart() {
        let mut s = session();
        assert_eq!(s.price_summary().total, Money::usd(999));

        s.toggle_cart(id(11)); // 49.99
        let pricing = s.price_summary();
        assert_eq!(pricing.subtotal, Money::usd(4999));
        assert_eq!(pricing.shipping, Money::usd(999));
        assert_eq!(pricing.free_shipping_remaining(), Some(Money::usd(1)));

        s.update_cart_quantity(id(11), 2);
        let pricing = s.price_summary();
        assert_eq!(pricing.subtotal, Money::usd(9998));
        assert_eq!(pricing.tax, Money::usd(1000));
        assert!(pricing.has_free_shipping());
        assert_eq!(pricing.total, Money::usd(10998));
    }

    #[test]
    fn test_add_wishlist_to_cart_skips_out_of_stock_and_present() {
        let mut s = session();
        for n in [1, 7, 8] {
            s.toggle_wishlist(id(n));
        }
        s.toggle_cart(id(7));
        s.update_cart_quantity(id(7), 3);

        let added = s.add_wishlist_to_cart();

        assert_eq!(added, vec![id(1)]);
        assert!(s.is_in_cart(id(1)));
        assert_eq!(s.cart().quantity(id(7)), Some(3));
        assert!(!s.is_in_cart(id(8))); // monitor is out of stock
        assert_eq!(s.wishlist_count(), 3);
    }

    #[test]
    fn test_cart_button_states() {
        let mut s = session();
        let monitor = s.catalog().get(id(8)).unwrap().clone();
        let lens = s.catalog().get(id(3)).unwrap().clone();
        assert_eq!(s.cart_button(&monitor), CartButton::OutOfStock);
        assert_eq!(s.cart_button(&lens), CartButton::AddToCart);
        s.toggle_cart(id(3));
        assert_eq!(s.cart_button(&lens), CartButton::InCart);
    }

    #[test]
    fn test_panels_and_selection() {
        let mut s = session();
        s.open_cart();
        s.open_wishlist();
        assert!(s.is_cart_open() && s.is_wishlist_open());
        s.close_cart();
        s.close_wishlist();
        assert!(!s.is_cart_open() && !s.is_wishlist_open());

        s.select_product(id(4));
        assert_eq!(s.selected_product().map(|p| p.id), Some(id(4)));
        s.select_product(id(404));
        assert_eq!(s.selected_product().map(|p| p.id), Some(id(4)));
        s.close_product();
        assert!(s.selected_product().is_none());
    }

    #[test]
    fn test_checkout_is_noop() {
        let mut s = session();
        s.toggle_cart(id(1));
        let before = s.cart().clone();
        let pricing = s.checkout();
        assert_eq!(pricing.subtotal, Money::usd(29999));
        assert_eq!(s.cart(), &before);
    }

    #[test]
    fn test_header_counts_distinct_products() {
        let mut s = session();
        s.toggle_cart(id(1));
        s.toggle_cart(id(2));
        s.update_cart_quantity(id(2), 5);
        s.toggle_wishlist(id(3));
        assert_eq!(s.cart_count(), 2);
        assert_eq!(s.wishlist_count(), 1);
    }

    #[test]
    fn test_dispatch() {
        let mut s = session();
        let intents = vec![
            Intent::ShowView {
                view: View::Products,
            },
            Intent::SetLayout {
                layout: LayoutMode::List,
            },
            Intent::SelectCategory {
                category: CategoryId::new("electronics"),
            },
            Intent::SetSort {
                sort: SortKey::PriceLow,
            },
            Intent::ToggleCart {
                product_id: id(5),
            },
            Intent::UpdateCartQuantity {
                product_id: id(5),
                quantity: 2,
            },
            Intent::ToggleWishlist {
                product_id: id(8),
            },
            Intent::OpenCart,
            Intent::SelectProduct {
                product_id: id(1),
            },
        ];
        for intent in intents {
            s.dispatch(intent);
        }

        assert_eq!(s.view(), View::Products);
        assert_eq!(s.layout(), LayoutMode::List);
        assert_eq!(s.visible_products().ids(), vec![id(1), id(8), id(5)]);
        assert_eq!(s.cart().quantity(id(5)), Some(2));
        assert!(s.is_in_wishlist(id(8)));
        assert!(s.is_cart_open());
        assert_eq!(s.selected_product().map(|p| p.id), Some(id(1)));

        s.dispatch(Intent::ResetFilters);
        assert_eq!(s.visible_products().len(), 12);
    }

    #[test]
    fn test_initial_sort_and_custom_pricing() {
        let s = Session::new(Catalog::demo())
            .with_initial_sort(SortKey::PriceLow)
            .with_layout(LayoutMode::List)
            .with_pricing(PricingPolicy {
                tax_rate_percent: 0.0,
                ..PricingPolicy::default()
            });
        assert_eq!(s.visible_products().ids()[0], id(11));
        assert_eq!(s.layout(), LayoutMode::List);
        assert_eq!(s.price_summary().tax, Money::usd(0));
    }
}
