//! Interactive shopping session.
//!
//! Every menu choice becomes an [`Intent`] dispatched to the session, so the
//! scripted mode (`--intents`) and the prompts go through the same path.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::{Input, Select};
use serde::Serialize;
use storefront_commerce::cart::CartPricing;
use storefront_commerce::dashboard::Dashboard;
use storefront_commerce::money::{Currency, Money};
use storefront_commerce::search::{FilterCriteria, SortKey, MAX_MIN_RATING};
use storefront_commerce::session::{CartButton, Intent, LayoutMode, Session, View};
use storefront_commerce::{CategoryId, ProductId};

use super::ShopArgs;
use crate::context::Context;
use crate::output::Output;
use crate::render;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;

    if let Some(path) = args.intents {
        let path = ctx.cwd.join(path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read intents: {}", path.display()))?;
        let applied = apply_intents(&mut session, &content)?;
        ctx.output.debug(&format!("applied {} intent(s)", applied));
        return print_snapshot(&session, &ctx.output);
    }

    if ctx.output.is_json() {
        bail!("The interactive shop has no JSON output. Use --intents <file> instead.");
    }

    interactive(&mut session, &ctx.output)
}

/// Dispatch a JSON array of intents. Returns how many were applied.
fn apply_intents(session: &mut Session, json: &str) -> Result<usize> {
    let intents: Vec<Intent> = serde_json::from_str(json).context("Invalid intents JSON")?;
    let count = intents.len();
    for intent in intents {
        session.dispatch(intent);
    }
    Ok(count)
}

#[derive(Debug, Serialize)]
struct CartLine {
    product_id: ProductId,
    quantity: u32,
}

/// Session state as printed after a scripted run.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    view: View,
    layout: LayoutMode,
    criteria: &'a FilterCriteria,
    visible: Vec<ProductId>,
    cart: Vec<CartLine>,
    wishlist: Vec<ProductId>,
    pricing: CartPricing,
    cart_open: bool,
    wishlist_open: bool,
    selected: Option<ProductId>,
}

impl<'a> Snapshot<'a> {
    fn of(session: &'a Session) -> Self {
        Self {
            view: session.view(),
            layout: session.layout(),
            criteria: session.criteria(),
            visible: session.visible_products().ids(),
            cart: session
                .cart()
                .entries()
                .iter()
                .map(|e| CartLine {
                    product_id: e.product.id,
                    quantity: e.quantity,
                })
                .collect(),
            wishlist: session.wishlist().ids().collect(),
            pricing: session.price_summary(),
            cart_open: session.is_cart_open(),
            wishlist_open: session.is_wishlist_open(),
            selected: session.selected_product().map(|p| p.id),
        }
    }
}

fn print_snapshot(session: &Session, out: &Output) -> Result<()> {
    if out.is_json() {
        out.json(&Snapshot::of(session));
        return Ok(());
    }

    render_view(session, out);
    if let Some(product) = session.selected_product() {
        render::product_detail(out, product);
    }
    if session.is_wishlist_open() {
        out.header(&format!("Wishlist ({})", session.wishlist_count()));
        render::wishlist(out, session);
    }
    out.header(&format!("Cart ({})", session.cart_count()));
    render::cart(out, session.cart(), &session.price_summary());
    Ok(())
}

fn render_view(session: &Session, out: &Output) {
    match session.view() {
        View::Dashboard => render::dashboard(out, &Dashboard::demo(session.catalog())),
        View::Products => {
            out.header("Products");
            render::products(
                out,
                &session.visible_products(),
                session.layout(),
                Some(session),
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Browse,
    Dashboard,
    Search,
    Category,
    PriceRange,
    InStock,
    Trending,
    Rating,
    Sort,
    Layout,
    Reset,
    Product,
    Cart,
    Wishlist,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 15] = [
        MenuAction::Browse,
        MenuAction::Dashboard,
        MenuAction::Search,
        MenuAction::Category,
        MenuAction::PriceRange,
        MenuAction::InStock,
        MenuAction::Trending,
        MenuAction::Rating,
        MenuAction::Sort,
        MenuAction::Layout,
        MenuAction::Reset,
        MenuAction::Product,
        MenuAction::Cart,
        MenuAction::Wishlist,
        MenuAction::Quit,
    ];

    /// Menu label, showing the current setting where there is one.
    fn label(&self, session: &Session) -> String {
        let criteria = session.criteria();
        match self {
            MenuAction::Browse => "Browse products".to_string(),
            MenuAction::Dashboard => "Dashboard".to_string(),
            MenuAction::Search => match criteria.search_query.as_str() {
                "" => "Search".to_string(),
                q => format!("Search [{}]", q),
            },
            MenuAction::Category => format!("Category [{}]", criteria.category.as_str()),
            MenuAction::PriceRange => format!(
                "Price range [{} - {}]",
                criteria.price_range.min.display(),
                criteria.price_range.max.display()
            ),
            MenuAction::InStock => format!("In stock only [{}]", on_off(criteria.in_stock_only)),
            MenuAction::Trending => format!("Trending only [{}]", on_off(criteria.trending_only)),
            MenuAction::Rating => match criteria.min_rating {
                0 => "Minimum rating [any]".to_string(),
                r => format!("Minimum rating [{}+]", r),
            },
            MenuAction::Sort => format!("Sort by [{}]", criteria.sort.display_name()),
            MenuAction::Layout => format!("Layout [{}]", session.layout().as_str()),
            MenuAction::Reset => "Reset filters".to_string(),
            MenuAction::Product => "View a product".to_string(),
            MenuAction::Cart => format!("Cart ({})", session.cart_count()),
            MenuAction::Wishlist => format!("Wishlist ({})", session.wishlist_count()),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn interactive(session: &mut Session, out: &Output) -> Result<()> {
    loop {
        render_view(session, out);
        out.line("");

        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.label(session)).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let intent = match MenuAction::ALL[choice] {
            MenuAction::Browse => Some(Intent::ShowView {
                view: View::Products,
            }),
            MenuAction::Dashboard => Some(Intent::ShowView {
                view: View::Dashboard,
            }),
            MenuAction::Search => {
                let query: String = Input::new()
                    .with_prompt("Search products (empty to clear)")
                    .allow_empty(true)
                    .with_initial_text(session.criteria().search_query.clone())
                    .interact_text()?;
                Some(Intent::Search { query })
            }
            MenuAction::Category => pick_category(session)?,
            MenuAction::PriceRange => Some(pick_price_range(session)?),
            MenuAction::InStock => Some(Intent::SetInStockOnly {
                enabled: !session.criteria().in_stock_only,
            }),
            MenuAction::Trending => Some(Intent::SetTrendingOnly {
                enabled: !session.criteria().trending_only,
            }),
            MenuAction::Rating => {
                let items: Vec<String> = (0..=MAX_MIN_RATING)
                    .map(|r| match r {
                        0 => "Any rating".to_string(),
                        r => format!("{}+ stars", r),
                    })
                    .collect();
                let rating = Select::new()
                    .with_prompt("Minimum rating")
                    .items(&items)
                    .default(usize::from(session.criteria().min_rating))
                    .interact()?;
                Some(Intent::SetMinRating {
                    rating: u8::try_from(rating).unwrap_or(MAX_MIN_RATING),
                })
            }
            MenuAction::Sort => {
                let items: Vec<&str> = SortKey::ALL.iter().map(|k| k.display_name()).collect();
                let current = SortKey::ALL
                    .iter()
                    .position(|k| *k == session.criteria().sort)
                    .unwrap_or(0);
                let index = Select::new()
                    .with_prompt("Sort by")
                    .items(&items)
                    .default(current)
                    .interact()?;
                Some(Intent::SetSort {
                    sort: SortKey::ALL[index],
                })
            }
            MenuAction::Layout => Some(Intent::SetLayout {
                layout: match session.layout() {
                    LayoutMode::Grid => LayoutMode::List,
                    LayoutMode::List => LayoutMode::Grid,
                },
            }),
            MenuAction::Reset => Some(Intent::ResetFilters),
            MenuAction::Product => {
                product_panel(session, out)?;
                None
            }
            MenuAction::Cart => {
                cart_panel(session, out)?;
                None
            }
            MenuAction::Wishlist => {
                wishlist_panel(session, out)?;
                None
            }
            MenuAction::Quit => break,
        };

        if let Some(intent) = intent {
            session.dispatch(intent);
        }
    }

    out.success("Thanks for shopping!");
    Ok(())
}

fn pick_category(session: &Session) -> Result<Option<Intent>> {
    let categories = session.catalog().categories();
    if categories.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = categories
        .iter()
        .map(|c| format!("{} {} ({})", c.icon.glyph(), c.name, c.count))
        .collect();
    let current = categories
        .iter()
        .position(|c| c.id.as_str() == session.criteria().category.as_str())
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(current)
        .interact()?;

    Ok(Some(Intent::SelectCategory {
        category: CategoryId::new(categories[index].id.as_str()),
    }))
}

fn pick_price_range(session: &Session) -> Result<Intent> {
    let range = session.criteria().price_range;
    let min: f64 = Input::new()
        .with_prompt("Minimum price ($)")
        .default(range.min.to_decimal())
        .interact_text()?;
    let max: f64 = Input::new()
        .with_prompt("Maximum price ($)")
        .default(range.max.to_decimal())
        .interact_text()?;

    Ok(Intent::SetPriceRange {
        min: Money::from_decimal(min, Currency::USD),
        max: Money::from_decimal(max, Currency::USD),
    })
}

/// Pick one of the visible products and act on it until the user goes back.
fn product_panel(session: &mut Session, out: &Output) -> Result<()> {
    let visible = session.visible_products();
    if visible.is_empty() {
        out.info("No products found. Try adjusting your filters.");
        return Ok(());
    }

    let items: Vec<String> = visible
        .iter()
        .map(|p| format!("{}  {}", p.name, p.price.display()))
        .collect();
    let index = Select::new()
        .with_prompt("Product")
        .items(&items)
        .default(0)
        .interact()?;
    let id = visible.items[index].id;

    session.dispatch(Intent::SelectProduct { product_id: id });

    while let Some(product) = session.selected_product().cloned() {
        render::product_detail(out, &product);

        let button = session.cart_button(&product);
        let cart_label = match button {
            CartButton::InCart => "Remove from cart",
            other => other.label(),
        };
        let wishlist_label = if session.is_in_wishlist(id) {
            "Remove from wishlist"
        } else {
            "Save to wishlist"
        };

        let choice = Select::new()
            .with_prompt(product.name.as_str())
            .items(&[cart_label, wishlist_label, "Back"])
            .default(0)
            .interact()?;

        let intent = match choice {
            0 if button.is_enabled() => Intent::ToggleCart { product_id: id },
            0 => {
                out.warn("This product is out of stock.");
                continue;
            }
            1 => Intent::ToggleWishlist { product_id: id },
            _ => Intent::CloseProduct,
        };
        session.dispatch(intent);
    }

    Ok(())
}

fn cart_panel(session: &mut Session, out: &Output) -> Result<()> {
    session.dispatch(Intent::OpenCart);

    while session.is_cart_open() {
        out.header(&format!("Cart ({})", session.cart_count()));
        render::cart(out, session.cart(), &session.price_summary());

        let actions = [
            "Increase quantity",
            "Decrease quantity",
            "Set quantity",
            "Remove item",
            "Checkout",
            "Close",
        ];
        let choice = Select::new()
            .with_prompt("Cart")
            .items(&actions)
            .default(actions.len() - 1)
            .interact()?;

        let intent = match choice {
            0..=3 => {
                let Some(product_id) = pick_cart_item(session)? else {
                    continue;
                };
                match choice {
                    0 => Intent::IncrementCartQuantity { product_id },
                    1 => Intent::DecrementCartQuantity { product_id },
                    2 => {
                        let quantity: i64 = Input::new()
                            .with_prompt("Quantity")
                            .default(i64::from(
                                session.cart().quantity(product_id).unwrap_or(1),
                            ))
                            .interact_text()?;
                        Intent::UpdateCartQuantity {
                            product_id,
                            quantity,
                        }
                    }
                    _ => Intent::RemoveFromCart { product_id },
                }
            }
            4 => {
                session.dispatch(Intent::Checkout);
                out.info("Checkout is not available in this demo. Your cart was kept.");
                continue;
            }
            _ => Intent::CloseCart,
        };
        session.dispatch(intent);
    }

    Ok(())
}

fn pick_cart_item(session: &Session) -> Result<Option<ProductId>> {
    let entries = session.cart().entries();
    if entries.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{} x{}", e.product.name, e.quantity))
        .collect();
    let index = Select::new()
        .with_prompt("Item")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(entries[index].product.id))
}

fn wishlist_panel(session: &mut Session, out: &Output) -> Result<()> {
    session.dispatch(Intent::OpenWishlist);

    while session.is_wishlist_open() {
        out.header(&format!("Wishlist ({})", session.wishlist_count()));
        render::wishlist(out, session);

        let actions = ["Add all to cart", "Remove item", "Close"];
        let choice = Select::new()
            .with_prompt("Wishlist")
            .items(&actions)
            .default(actions.len() - 1)
            .interact()?;

        let intent = match choice {
            0 => {
                let before = session.cart_count();
                session.dispatch(Intent::AddWishlistToCart);
                out.success(&format!(
                    "Added {} item(s) to cart",
                    session.cart_count() - before
                ));
                continue;
            }
            1 => {
                let saved = session.wishlist_products();
                if saved.is_empty() {
                    continue;
                }
                let items: Vec<&str> = saved.iter().map(|p| p.name.as_str()).collect();
                let index = Select::new()
                    .with_prompt("Remove")
                    .items(&items)
                    .default(0)
                    .interact()?;
                Intent::RemoveFromWishlist {
                    product_id: saved[index].id,
                }
            }
            _ => Intent::CloseWishlist,
        };
        session.dispatch(intent);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Catalog;

    #[test]
    fn test_apply_intents() {
        let mut session = Session::new(Catalog::demo());
        let applied = apply_intents(
            &mut session,
            r#"[
                {"type": "show_view", "view": "products"},
                {"type": "select_category", "category": "electronics"},
                {"type": "set_sort", "sort": "price-low"},
                {"type": "toggle_cart", "product_id": 1},
                {"type": "update_cart_quantity", "product_id": 1, "quantity": 0},
                {"type": "toggle_wishlist", "product_id": 8},
                {"type": "add_wishlist_to_cart"},
                {"type": "open_cart"}
            ]"#,
        )
        .unwrap();

        assert_eq!(applied, 8);
        let snapshot = Snapshot::of(&session);
        assert_eq!(snapshot.view, View::Products);
        assert_eq!(
            snapshot.visible,
            vec![ProductId::new(1), ProductId::new(8), ProductId::new(5)]
        );
        assert_eq!(snapshot.cart.len(), 1);
        assert_eq!(snapshot.cart[0].quantity, 1);
        assert_eq!(snapshot.wishlist, vec![ProductId::new(8)]);
        assert!(snapshot.cart_open);
        assert_eq!(snapshot.pricing.total, Money::usd(32999));
    }

    #[test]
    fn test_apply_intents_rejects_unknown_type() {
        let mut session = Session::new(Catalog::demo());
        let result = apply_intents(&mut session, r#"[{"type": "teleport"}]"#);
        assert!(result.is_err());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_menu_labels_reflect_state() {
        let mut session = Session::new(Catalog::demo());
        assert_eq!(MenuAction::InStock.label(&session), "In stock only [off]");
        assert_eq!(MenuAction::Category.label(&session), "Category [all]");

        session.set_in_stock_only(true);
        session.set_min_rating(4);
        session.toggle_cart(ProductId::new(2));
        assert_eq!(MenuAction::InStock.label(&session), "In stock only [on]");
        assert_eq!(MenuAction::Rating.label(&session), "Minimum rating [4+]");
        assert_eq!(MenuAction::Cart.label(&session), "Cart (1)");
        assert_eq!(
            MenuAction::PriceRange.label(&session),
            "Price range [$0.00 - $1000.00]"
        );
    }
}
