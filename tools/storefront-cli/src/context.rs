//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::session::Session;
use tracing::debug;

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => {
                    let config = StorefrontConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the demo catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.config.catalog.path else {
            debug!("using built-in demo catalog");
            return Ok(Catalog::demo());
        };

        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        Catalog::from_json(&content)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// Start a browsing session with the configured defaults.
    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(self.catalog()?)
            .with_pricing(self.config.pricing.policy())
            .with_initial_sort(self.config.browse.sort()?)
            .with_layout(self.config.browse.layout()?))
    }

    /// Resolve a path relative to the config file's directory, or the
    /// working directory when no config file was found.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| self.cwd.join(dir))
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config_path: Option<&str>) -> Context {
        Context {
            config: StorefrontConfig::default(),
            config_path: config_path.map(PathBuf::from),
            output: Output::new(false, true),
            cwd: PathBuf::from("/work/shop"),
        }
    }

    #[test]
    fn test_resolve_path_relative_to_config() {
        let ctx = context(Some("/etc/storefront/storefront.toml"));
        assert_eq!(
            ctx.resolve_path("catalog.json"),
            PathBuf::from("/etc/storefront/catalog.json")
        );
    }

    #[test]
    fn test_resolve_path_without_config() {
        let ctx = context(None);
        assert_eq!(
            ctx.resolve_path("data/catalog.json"),
            PathBuf::from("/work/shop/data/catalog.json")
        );
        assert_eq!(
            ctx.resolve_path("/tmp/catalog.json"),
            PathBuf::from("/tmp/catalog.json")
        );

        let ctx = context(Some("conf/storefront.toml"));
        assert_eq!(
            ctx.resolve_path("catalog.json"),
            PathBuf::from("/work/shop/conf/catalog.json")
        );
    }

    #[test]
    fn test_default_session_uses_demo_catalog() {
        let ctx = context(None);
        let session = ctx.session().unwrap();
        assert_eq!(session.catalog().len(), 12);
    }
}
