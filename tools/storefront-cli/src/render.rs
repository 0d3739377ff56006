//! Text views shared by the one-shot commands and the shop session.

use console::style;
use storefront_commerce::cart::{Cart, CartPricing};
use storefront_commerce::catalog::{Catalog, Product};
use storefront_commerce::dashboard::Dashboard;
use storefront_commerce::search::VisibleProducts;
use storefront_commerce::session::{LayoutMode, Session};

use crate::output::{bar, cart_button_label, price_tag, stars, stock_badge, Output};

const GRID_WIDTHS: [usize; 6] = [4, 32, 14, 24, 16, 12];
const CHART_WIDTH: usize = 40;

/// Print the visible products in the given layout.
///
/// With a session, each row also shows the cart and wishlist state.
pub fn products(
    out: &Output,
    visible: &VisibleProducts,
    layout: LayoutMode,
    session: Option<&Session>,
) {
    out.line(&style(visible.summary()).dim().to_string());

    if visible.is_empty() {
        out.info("No products found. Try adjusting your filters.");
        return;
    }

    match layout {
        LayoutMode::Grid => {
            out.table_row(
                &["ID", "NAME", "CATEGORY", "PRICE", "RATING", "STOCK"],
                &GRID_WIDTHS,
            );
            for product in visible.iter() {
                let name = match session {
                    Some(s) if s.is_in_wishlist(product.id) => format!("♥ {}", product.name),
                    _ => product.name.clone(),
                };
                out.table_row(
                    &[
                        &product.id.to_string(),
                        &name,
                        &product.category,
                        &price_tag(product),
                        &format!("{} {:.1}", stars(product), product.rating),
                        &stock_badge(product.in_stock),
                    ],
                    &GRID_WIDTHS,
                );
            }
        }
        LayoutMode::List => {
            for product in visible.iter() {
                out.line("");
                out.line(&format!(
                    "{} {}{}",
                    style(format!("#{}", product.id)).dim(),
                    style(&product.name).bold(),
                    badges(product)
                ));
                out.kv("Category", &product.category);
                out.kv("Price", &price_tag(product));
                out.kv("Rating", &rating_line(product));
                out.kv("Stock", &stock_badge(product.in_stock));
                if !product.description.is_empty() {
                    out.kv("About", &product.description);
                }
                if let Some(s) = session {
                    out.kv("Cart", &cart_button_label(s.cart_button(product)));
                }
            }
        }
    }
}

/// Print every detail of one product.
pub fn product_detail(out: &Output, product: &Product) {
    out.header(&format!("{}{}", product.name, badges(product)));
    out.kv("ID", &product.id.to_string());
    out.kv("Category", &product.category);
    out.kv("Price", &price_tag(product));
    if let Some(savings) = product.savings() {
        out.kv("You save", &savings.display());
    }
    out.kv("Rating", &rating_line(product));
    out.kv("Stock", &stock_badge(product.in_stock));

    if !product.description.is_empty() {
        out.line("");
        out.line(&format!("  {}", product.description));
    }

    if !product.specifications.is_empty() {
        out.line("");
        out.line(&style("  Specifications").bold().to_string());
        for spec in &product.specifications {
            out.kv(&spec.label, &spec.value);
        }
    }

    if !product.tags.is_empty() {
        out.line("");
        let tags: Vec<String> = product.tags.iter().map(|t| format!("#{}", t)).collect();
        out.kv("Tags", &tags.join(" "));
    }
}

/// Print the category sidebar with real membership counts.
pub fn categories(out: &Output, catalog: &Catalog) {
    let widths = [3, 14, 14, 8, 8];
    out.table_row(&["", "ID", "NAME", "COUNT", "MATCHING"], &widths);
    for category in catalog.categories() {
        let matching = if category.is_all() {
            catalog.len()
        } else {
            catalog.matching_count(&category.id)
        };
        out.table_row(
            &[
                category.icon.glyph(),
                category.id.as_str(),
                &category.name,
                &category.count.to_string(),
                &matching.to_string(),
            ],
            &widths,
        );
    }
}

/// Print cart contents and the price summary.
pub fn cart(out: &Output, cart: &Cart, pricing: &CartPricing) {
    if cart.is_empty() {
        out.info("Your cart is empty.");
    } else {
        let widths = [4, 32, 10, 5, 10];
        out.table_row(&["ID", "ITEM", "PRICE", "QTY", "TOTAL"], &widths);
        for line in cart.entries() {
            out.table_row(
                &[
                    &line.product.id.to_string(),
                    &line.product.name,
                    &line.product.price.display(),
                    &line.quantity.to_string(),
                    &line.line_total().display(),
                ],
                &widths,
            );
        }
    }
    price_summary(out, pricing);
}

/// Print subtotal, tax, shipping and total.
pub fn price_summary(out: &Output, pricing: &CartPricing) {
    out.line("");
    out.kv("Subtotal", &pricing.subtotal.display());
    out.kv("Tax", &pricing.tax.display());
    let shipping = if pricing.has_free_shipping() {
        style("FREE").green().to_string()
    } else {
        pricing.shipping.display()
    };
    out.kv("Shipping", &shipping);
    out.kv("Total", &style(pricing.total.display()).bold().to_string());
    if let Some(remaining) = pricing.free_shipping_remaining() {
        out.info(&format!(
            "Add {} more for free shipping!",
            remaining.display()
        ));
    }
}

/// Print saved products.
pub fn wishlist(out: &Output, session: &Session) {
    let saved = session.wishlist_products();
    if saved.is_empty() {
        out.info("Your wishlist is empty.");
        return;
    }
    for product in &saved {
        out.list_item(&format!(
            "#{} {}  {}  {}",
            product.id,
            product.name,
            price_tag(product),
            cart_button_label(session.cart_button(product))
        ));
    }
}

/// Print the dashboard.
pub fn dashboard(out: &Output, dashboard: &Dashboard) {
    out.header("Dashboard");
    for card in &dashboard.cards {
        let change = card
            .change
            .as_deref()
            .map(|c| format!(" {}", style(c).green()))
            .unwrap_or_default();
        out.kv(card.title, &format!("{}{}", style(&card.value).bold(), change));
    }

    out.header("Sales Overview");
    for point in &dashboard.sales {
        out.line(&format!(
            "  {:<4}{:<w$} {:>6}  {}",
            point.month,
            bar(point.width_percent, CHART_WIDTH),
            point.label,
            style(format!("{} orders", point.orders)).dim(),
            w = CHART_WIDTH
        ));
    }

    out.header("Top Products");
    for (rank, product) in dashboard.top_products.iter().enumerate() {
        out.line(&format!(
            "  {}. {}  {}  {}",
            rank + 1,
            style(&product.name).bold(),
            product.price.display(),
            rating_line(product)
        ));
    }
}

fn rating_line(product: &Product) -> String {
    format!(
        "{} {:.1} ({} reviews)",
        stars(product),
        product.rating,
        product.reviews
    )
}

fn badges(product: &Product) -> String {
    let mut out = String::new();
    if product.trending {
        out.push_str(&format!(" {}", style("Trending").magenta()));
    }
    if product.featured {
        out.push_str(&format!(" {}", style("Featured").yellow()));
    }
    out
}
