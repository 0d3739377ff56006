//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::PricingPolicy;
use storefront_commerce::session::LayoutMode;
use storefront_commerce::search::SortKey;
use storefront_commerce::{Currency, Money};
use storefront_observability::{LogConfig, LogFormat};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart pricing rules.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Browsing defaults.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Log output.
    #[serde(default = "default_logging")]
    pub logging: LogConfig,
}

fn default_logging() -> LogConfig {
    LogConfig::new().with_format(LogFormat::Human)
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            pricing: PricingConfig::default(),
            browse: BrowseConfig::default(),
            logging: default_logging(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file. The built-in demo data is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Pricing rules, in dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: f64,

    /// Subtotals above this ship free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    /// Shipping charged otherwise.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: f64,
}

fn default_tax_rate() -> f64 {
    10.0
}

fn default_free_shipping_threshold() -> f64 {
    50.0
}

fn default_flat_shipping() -> f64 {
    9.99
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: default_tax_rate(),
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping: default_flat_shipping(),
        }
    }
}

impl PricingConfig {
    /// Convert to the library's pricing policy.
    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            tax_rate_percent: self.tax_rate_percent,
            free_shipping_threshold: Money::from_decimal(
                self.free_shipping_threshold,
                Currency::USD,
            ),
            flat_shipping: Money::from_decimal(self.flat_shipping, Currency::USD),
        }
    }
}

/// Defaults for product browsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Initial sort key.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Initial layout, `grid` or `list`.
    #[serde(default = "default_layout")]
    pub default_layout: String,
}

fn default_sort() -> String {
    SortKey::default().as_str().to_string()
}

fn default_layout() -> String {
    LayoutMode::default().as_str().to_string()
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            default_layout: default_layout(),
        }
    }
}

impl BrowseConfig {
    pub fn sort(&self) -> Result<SortKey> {
        self.default_sort
            .parse()
            .context("Invalid browse.default_sort")
    }

    pub fn layout(&self) -> Result<LayoutMode> {
        self.default_layout
            .parse()
            .context("Invalid browse.default_layout")
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# path = "catalog.json"   # default: built-in demo dataset

[pricing]
tax_rate_percent = 10.0
free_shipping_threshold = 50.0
flat_shipping = 9.99

[browse]
default_sort = "featured"   # featured | price-low | price-high | rating | reviews
default_layout = "grid"     # grid | list

[logging]
level = "info"
format = "human"            # human | json
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_observability::LogLevel;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.pricing.tax_rate_percent, 10.0);
        assert_eq!(config.browse.sort().unwrap(), SortKey::Featured);
        assert_eq!(config.browse.layout().unwrap(), LayoutMode::Grid);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.pricing.policy(), PricingPolicy::default());
        assert_eq!(config.browse.default_sort, "featured");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_sections() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [catalog]
            path = "data/catalog.json"

            [pricing]
            flat_shipping = 4.5

            [browse]
            default_sort = "price-high"
            default_layout = "list"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path.as_deref(), Some("data/catalog.json"));
        let policy = config.pricing.policy();
        assert_eq!(policy.flat_shipping, Money::usd(450));
        assert_eq!(policy.free_shipping_threshold, Money::usd(5000));
        assert_eq!(config.browse.sort().unwrap(), SortKey::PriceHigh);
        assert_eq!(config.browse.layout().unwrap(), LayoutMode::List);
    }

    #[test]
    fn test_invalid_browse_values() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [browse]
            default_sort = "cheapest"
            default_layout = "table"
            "#,
        )
        .unwrap();
        assert!(config.browse.sort().is_err());
        assert!(config.browse.layout().is_err());
    }

    #[test]
    fn test_json_config() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"pricing": {"tax_rate_percent": 8.25}}"#).unwrap();
        assert_eq!(config.pricing.tax_rate_percent, 8.25);
        assert_eq!(config.pricing.flat_shipping, 9.99);
    }
}
