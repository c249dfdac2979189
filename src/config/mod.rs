//! Site configuration management for `tola.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                      |
//! |----------------|----------------------------------------------|
//! | `[base]`       | Site metadata (url, language, multilingual)  |
//! | `[pagination]` | Site-wide pagination overrides               |
//! | `[extra]`      | User-defined custom fields                   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.com"
//!
//! [pagination]
//! per_page = 5
//! permalink = "/blog/page:num/"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
pub mod defaults;
mod error;
pub mod pagination;

pub use base::BaseConfig;
pub use error::ConfigError;
pub use pagination::{
    DEFAULTS, LimitSetting, OneOrMany, PaginationConfig, PaginationDefaults, PaginationOverrides,
};

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Site-wide pagination overrides; absent means built-in defaults only
    #[serde(default)]
    pub pagination: Option<PaginationOverrides>,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Self::normalize_path(path);
        Ok(config)
    }

    /// Resolve the site-wide layer against `defaults` without any page overrides.
    pub fn site_pagination(&self, defaults: &PaginationDefaults) -> Result<PaginationConfig> {
        let config = pagination::resolve(
            defaults,
            self.pagination.as_ref(),
            &PaginationOverrides::default(),
        )?;
        Ok(config)
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before any page is paginated
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        self.site_pagination(&DEFAULTS)?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
