//! Client-side search: record building and the matching engine.
//!
//! Every generated page embeds a per-language list of searchable tool
//! records as `window.toolsData`; the browser runtime filters that list as
//! the user types. The matching contract lives here so the `search` CLI
//! subcommand, the embedded index, and the tests all share one definition:
//!
//! - The query is split on whitespace into lowercase tokens.
//! - A tool matches iff **every** token is a substring of the lowercased
//!   concatenation of its name, keywords, search terms, category id, and
//!   category name. Token order is irrelevant; partial words match.
//! - An empty or whitespace-only query matches nothing (the dropdown
//!   closes; it does not mean "show everything").
//!
//! Conjunctive matching narrows results as the user types more words —
//! there is no ranking, no fuzziness.

use crate::catalog::Catalog;
use crate::i18n::LocaleBundle;
use serde::Serialize;

/// One searchable tool record, serialized into the page verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub name: String,
    pub keywords: String,
    pub search_terms: String,
    pub category: String,
    pub category_name: String,
    pub icon: String,
    pub url: String,
}

/// Build the localized search records for one language, in catalog order.
///
/// Untranslated tools are still listed under their raw id (same silent
/// fallback as the sidebar) with empty keywords.
pub fn build_records(catalog: &Catalog, bundle: &LocaleBundle, lang: &str) -> Vec<SearchRecord> {
    catalog
        .tools
        .iter()
        .map(|tool| {
            let text = bundle.tools.get(&tool.id);
            let category_name = bundle
                .categories
                .get(&tool.category)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            SearchRecord {
                id: tool.id.clone(),
                name: bundle.tool_name(&tool.id).to_string(),
                keywords: text.map(|t| t.keywords.clone()).unwrap_or_default(),
                search_terms: text
                    .and_then(|t| t.search_terms.clone())
                    .unwrap_or_default(),
                category: tool.category.clone(),
                category_name,
                icon: tool.icon.clone(),
                url: format!("/{}/tools/{}.html", lang, tool.id),
            }
        })
        .collect()
}

/// Serialize records as the `window.toolsData` page contract.
pub fn records_json(records: &[SearchRecord]) -> String {
    // Serialization of these plain structs cannot fail
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

fn haystack(record: &SearchRecord) -> String {
    [
        record.name.as_str(),
        record.keywords.as_str(),
        record.search_terms.as_str(),
        record.category.as_str(),
        record.category_name.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Filter records by a query. Empty query → empty result set.
pub fn search<'a>(records: &'a [SearchRecord], query: &str) -> Vec<&'a SearchRecord> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if tokens.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| {
            let text = haystack(r);
            tokens.iter().all(|t| text.contains(t.as_str()))
        })
        .collect()
}
