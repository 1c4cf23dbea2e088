//! # Configuration
//!
//! Where the catalog lives and how checkout is priced.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     tally path/to/products.csv                                         │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TALLY_CATALOG=stock.csv                                            │
//! │     TALLY_TAX_RATE_BPS=825                                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or ~/.config/tally/config.toml (Linux)            │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     classes/products.csv, 10% off 3+, 7% tax                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! path = "classes/products.csv"
//!
//! [pricing]
//! bulk_threshold = 3
//! bulk_discount_bps = 1000
//! tax_rate_bps = 700
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use tally_core::PricingPolicy;

use crate::error::{AppError, AppResult};

pub const ENV_CATALOG: &str = "TALLY_CATALOG";
pub const ENV_BULK_THRESHOLD: &str = "TALLY_BULK_THRESHOLD";
pub const ENV_BULK_DISCOUNT_BPS: &str = "TALLY_BULK_DISCOUNT_BPS";
pub const ENV_TAX_RATE_BPS: &str = "TALLY_TAX_RATE_BPS";

// =============================================================================
// Catalog Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Path to the catalog CSV.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("classes/products.csv")
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            path: default_catalog_path(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete Tally configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub pricing: PricingPolicy,
}

impl TallyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the default path is
    ///    skipped when absent)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if explicit || path.exists() {
                info!(?path, "Loading config from file");
                let contents =
                    std::fs::read_to_string(&path).map_err(|source| AppError::ConfigRead {
                        path: path.clone(),
                        source,
                    })?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        self.pricing.validate()?;
        Ok(())
    }

    /// Applies `TALLY_*` overrides looked up through `lookup`.
    ///
    /// Unparseable numbers are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG) {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = PathBuf::from(path);
        }

        let pricing = &mut self.pricing;
        for (key, slot) in [
            (ENV_BULK_THRESHOLD, &mut pricing.bulk_threshold),
            (ENV_BULK_DISCOUNT_BPS, &mut pricing.bulk_discount_bps),
            (ENV_TAX_RATE_BPS, &mut pricing.tax_rate_bps),
        ] {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<u32>() {
                    Ok(value) => {
                        debug!(key, value, "Overriding pricing from environment");
                        *slot = value;
                    }
                    Err(_) => warn!(key, value = %raw, "Ignoring non-numeric override"),
                }
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tally")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
