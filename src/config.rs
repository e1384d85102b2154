//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the site source
//! directory. Config files are sparse: stock defaults are used for anything
//! the user doesn't override, and unknown keys are rejected to catch typos
//! early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://example.com"  # Absolute site URL, no trailing slash
//! languages = ["ar", "en"]          # First entry is the primary language
//! # copyright_year = 2026           # Omit to use the current year
//!
//! [processing]
//! max_workers = 4                   # Omit for auto = CPU cores
//! ```
//!
//! ## Language List
//!
//! The order of `languages` matters: the first entry is the **primary**
//! language. The primary language is the `x-default` hreflang target, the
//! root redirect fallback, and the language rendered right-to-left. Every
//! listed language must have a bundle in `data/i18n.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute base URL of the published site (no trailing slash).
    pub base_url: String,
    /// Configured languages in display order. The first is the primary.
    pub languages: Vec<String>,
    /// Year stamped into the footer copyright. Defaults to the current year.
    pub copyright_year: Option<i32>,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            languages: vec!["ar".to_string(), "en".to_string()],
            copyright_year: None,
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Validation(
                "languages must list at least one language".into(),
            ));
        }
        for (i, lang) in self.languages.iter().enumerate() {
            if lang.is_empty() {
                return Err(ConfigError::Validation(
                    "languages must not contain empty codes".into(),
                ));
            }
            if self.languages[..i].contains(lang) {
                return Err(ConfigError::Validation(format!(
                    "duplicate language code: {lang}"
                )));
            }
        }
        Ok(())
    }

    /// The primary language: first entry of `languages`.
    pub fn primary_language(&self) -> &str {
        &self.languages[0]
    }

    /// Absolute URL for a page, e.g. `url_for("en", "/tools/percentage.html")`.
    ///
    /// `path` must start with `/`; `"/"` yields the language homepage URL.
    pub fn url_for(&self, lang: &str, path: &str) -> String {
        format!("{}/{}{}", self.base_url.trim_end_matches('/'), lang, path)
    }

    /// Copyright year for the footer: configured value, else the current year.
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page-rendering workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_workers: Option<usize>,
}

/// Resolve the effective worker count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_workers(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_workers.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults if the file doesn't exist. Unknown keys are
/// rejected, the result is validated, and `base_url` is normalized to have
/// no trailing slash.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let mut config: SiteConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    config.base_url = config.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Kit Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Absolute URL of the published site. Used for canonical links, hreflang
# alternates, OpenGraph URLs, and the sitemap. No trailing slash.
base_url = "https://example.com"

# Languages to build, in display order. The FIRST entry is the primary
# language: it is the x-default hreflang target, the root redirect
# fallback, and the language rendered right-to-left.
# Every listed language needs a bundle in data/i18n.json.
languages = ["ar", "en"]

# Year stamped into the footer copyright.
# Omit or comment out to use the current year.
# copyright_year = 2026

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_workers = 4
"##
}
