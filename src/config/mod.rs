//! Storefront configuration
//!
//! Settings are read from TOML and layered in this order (later wins):
//!
//! 1. Built-in defaults
//! 2. Config file: explicit `--config` path, else `./cookiebox.toml`, else
//!    the per-user config directory
//! 3. Environment variables (`COOKIEBOX_*`)

pub mod loader;

pub use loader::{get_global_config_dir, load_config, resolve_config_path};

use crate::catalog::{load_catalog, Catalog};
use crate::error::{ErrorCode, Result, ShopError};
use crate::session::DEFAULT_TIER_SIZE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// The single city the bakery delivers to
pub const DEFAULT_LOCALITY: &str = "Stockholm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Delivery city every shipping address must name
    pub locality: String,
    /// Box size the storefront opens on
    pub default_tier_size: usize,
    /// YAML catalog replacing the built-in one
    pub catalog: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            locality: DEFAULT_LOCALITY.to_string(),
            default_tier_size: DEFAULT_TIER_SIZE,
            catalog: None,
        }
    }
}

impl ShopConfig {
    /// Apply `COOKIEBOX_*` overrides from the process environment
    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup, for tests
    pub fn merge_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(log_level) = lookup("COOKIEBOX_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(locality) = lookup("COOKIEBOX_LOCALITY") {
            self.locality = locality;
        }

        if let Some(catalog) = lookup("COOKIEBOX_CATALOG") {
            self.catalog = Some(PathBuf::from(catalog));
        }
    }

    /// The configured catalog file, or the built-in storefront
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::stockholm()),
        }
    }

    /// Check settings against each other and the catalog in use
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ShopError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!(
                    "unknown log level '{}', expected one of {}",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
                None,
            ));
        }

        if self.locality.trim().is_empty() {
            return Err(ShopError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "locality must not be empty",
                None,
            ));
        }

        if catalog.tier(self.default_tier_size).is_none() {
            return Err(ShopError::config_with_code(
                ErrorCode::CONFIG_UNKNOWN_TIER,
                format!(
                    "default box size {} is not offered by the catalog",
                    self.default_tier_size
                ),
                None,
            ));
        }

        Ok(())
    }
}
