//! Translation catalog loading and string resolution.
//!
//! The translation catalog (`data/i18n.json`) maps each language code to a
//! locale bundle: site metadata, UI chrome strings, category labels, and
//! per-tool localized text. The document is language-first:
//!
//! ```json
//! {
//!   "ar": {
//!     "meta": { "siteName": "...", "siteSlogan": "...", ... },
//!     "ui": { "home": "...", "search": "...", ... },
//!     "categories": { "finance": { "name": "...", "icon": "💰" } },
//!     "tools": { "percentage": { "name": "...", "title": "...", ... } }
//!   },
//!   "en": { ... }
//! }
//! ```
//!
//! ## Two kinds of missing data
//!
//! - A **configured language with no bundle** is fatal: without `meta` and
//!   `ui` there is no chrome to render any page in that language.
//! - A **tool with no entry in some bundle** is not: that one page is
//!   skipped with a warning and the build continues.
//!
//! ## Fallback resolution
//!
//! Missing localized strings are resolved through explicit accessor
//! functions, each with a single documented precedence order
//! ([`LocaleBundle::tool_name`], [`LocaleBundle::tool_description`]) —
//! never through ad-hoc lookup chains at call sites.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No translation bundle for configured language: {0}")]
    MissingLanguage(String),
}

/// Site-level metadata for one language.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteMeta {
    pub site_name: String,
    pub site_slogan: String,
    pub site_description: String,
    /// Homepage meta keywords.
    pub keywords: String,
    /// OpenGraph locale tag, e.g. `ar_SA` or `en_US`.
    pub locale: String,
    /// Native name of the language, shown on its settings button.
    pub language_name: String,
}

/// UI chrome strings for one language. The key set is closed: every string
/// the generated pages or the client runtime display lives here, so nothing
/// is hard-coded per language in templates or scripts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiStrings {
    pub home: String,
    pub search: String,
    pub sidebar: String,
    pub settings: String,
    pub language: String,
    pub theme: String,
    pub theme_light: String,
    pub theme_dark: String,
    pub theme_auto: String,
    pub clear_data: String,
    pub share: String,
    pub add_favorite: String,
    pub made_with: String,
    pub copyright: String,
    pub calculate: String,
    pub result: String,
    pub how_to_use: String,
    pub tool_count: String,
    pub most_popular: String,
    pub categories: String,
    pub no_results: String,
    pub validation_message: String,
    pub data_cleared: String,
    pub link_copied: String,
    pub confirm_clear_data: String,
}

/// Localized name and icon for one category.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryText {
    pub name: String,
    pub icon: String,
}

/// Localized text for one tool.
///
/// The five required fields feed page metadata and listings. The optional
/// label fields are the closed set of values tool fragment templates may
/// reference through `{{tool.*}}` placeholders; a tool only fills the
/// labels its own template uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToolText {
    pub name: String,
    pub description: String,
    pub title: String,
    pub meta_description: String,
    pub keywords: String,
    /// Extra search-only terms (synonyms, transliterations) for the
    /// client-side search index.
    #[serde(default)]
    pub search_terms: Option<String>,
    #[serde(default)]
    pub what_is_percent: Option<String>,
    #[serde(default)]
    pub of: Option<String>,
    #[serde(default)]
    pub percent_of: Option<String>,
    #[serde(default)]
    pub is_what: Option<String>,
    #[serde(default)]
    pub is_what_percent: Option<String>,
    #[serde(default)]
    pub percent_change: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub increase: Option<String>,
    #[serde(default)]
    pub decrease: Option<String>,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub final_price: Option<String>,
    #[serde(default)]
    pub you_save: Option<String>,
    #[serde(default)]
    pub how_to_use_text: Option<String>,
}

/// Everything one language needs to render the site.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleBundle {
    pub meta: SiteMeta,
    pub ui: UiStrings,
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryText>,
    #[serde(default)]
    pub tools: BTreeMap<String, ToolText>,
}

impl LocaleBundle {
    /// Display name for a tool. Precedence: localized name → raw tool id.
    ///
    /// The fallback is silent: an untranslated tool still shows up in the
    /// sidebar and search index under its id.
    pub fn tool_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.tools.get(id).map(|t| t.name.as_str()).unwrap_or(id)
    }

    /// Short description for a tool. Precedence: localized description →
    /// empty string.
    pub fn tool_description(&self, id: &str) -> &str {
        self.tools
            .get(id)
            .map(|t| t.description.as_str())
            .unwrap_or("")
    }
}

/// The full translation catalog: language code → bundle.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TranslationCatalog {
    pub bundles: BTreeMap<String, LocaleBundle>,
}

impl TranslationCatalog {
    pub fn bundle(&self, lang: &str) -> Option<&LocaleBundle> {
        self.bundles.get(lang)
    }

    /// Check that every configured language has a bundle.
    pub fn require_languages(&self, languages: &[String]) -> Result<(), I18nError> {
        for lang in languages {
            if !self.bundles.contains_key(lang) {
                return Err(I18nError::MissingLanguage(lang.clone()));
            }
        }
        Ok(())
    }
}

/// Load the translation catalog from a JSON file.
pub fn load(path: &Path) -> Result<TranslationCatalog, I18nError> {
    let content = fs::read_to_string(path)?;
    let catalog: TranslationCatalog = serde_json::from_str(&content)?;
    Ok(catalog)
}
