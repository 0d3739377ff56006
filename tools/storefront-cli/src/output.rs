//! Output formatting for the CLI.

use console::style;
use storefront_commerce::catalog::Product;
use storefront_commerce::session::CartButton;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad to a display width, ignoring ANSI styling, truncating long text.
fn pad(text: &str, width: usize) -> String {
    let visible = console::measure_text_width(text);
    if visible > width {
        console::truncate_str(text, width, "…").into_owned()
    } else {
        format!("{}{}", text, " ".repeat(width - visible))
    }
}

/// Five-star rating, e.g. "★★★★☆".
pub fn stars(product: &Product) -> String {
    let full = usize::from(product.full_stars().min(5));
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Colored stock state.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In Stock").green().to_string()
    } else {
        style("Out of Stock").red().to_string()
    }
}

/// Current price, with the struck-through original when on sale.
pub fn price_tag(product: &Product) -> String {
    match (product.original_price, product.discount_percentage()) {
        (Some(original), Some(percent)) => format!(
            "{} {} {}",
            style(product.price.display()).bold(),
            style(original.display()).dim().strikethrough(),
            style(format!("-{}%", percent)).red()
        ),
        _ => style(product.price.display()).bold().to_string(),
    }
}

/// Styled add-to-cart button label.
pub fn cart_button_label(button: CartButton) -> String {
    match button {
        CartButton::OutOfStock => style(button.label()).dim().to_string(),
        CartButton::InCart => style(button.label()).green().to_string(),
        CartButton::AddToCart => style(button.label()).cyan().to_string(),
    }
}

/// A horizontal bar `width_percent` of `max_width` cells long.
pub fn bar(width_percent: f64, max_width: usize) -> String {
    let cells = (width_percent.clamp(0.0, 100.0) / 100.0 * max_width as f64).round() as usize;
    "█".repeat(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Catalog;
    use storefront_commerce::ProductId;

    #[test]
    fn test_pad_plain_and_styled() {
        assert_eq!(pad("ab", 4), "ab  ");
        let styled = style("ab").red().to_string();
        assert_eq!(console::measure_text_width(&pad(&styled, 4)), 4);
        assert_eq!(console::measure_text_width(&pad("abcdefgh", 4)), 4);
    }

    #[test]
    fn test_stars() {
        let catalog = Catalog::demo();
        let headphones = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(stars(headphones), "★★★★☆");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(100.0, 10).chars().count(), 10);
        assert_eq!(bar(62.5, 40).chars().count(), 25);
        assert_eq!(bar(0.0, 40), "");
    }
}
