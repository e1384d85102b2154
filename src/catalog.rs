//! Tool catalog loading and validation.
//!
//! The catalog (`data/tools.json`) is the declarative list of tools and
//! categories that drives site generation: which pages exist, how the
//! sidebar is grouped, and which tools the homepage highlights.
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "categoryOrder": ["finance", "health"],
//!   "tools": [
//!     { "id": "percentage", "category": "finance", "icon": "🧮", "popular": true },
//!     { "id": "bmi", "category": "health", "icon": "⚖️" }
//!   ]
//! }
//! ```
//!
//! Ordering is meaningful everywhere: `categoryOrder` fixes the sidebar and
//! homepage category order, and `tools` fixes the order of tools within each
//! category and in the sitemap. Nothing is re-sorted.
//!
//! ## Validation
//!
//! Loading enforces two invariants, both fatal:
//! - tool ids are globally unique
//! - every tool's `category` appears in `categoryOrder`

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate tool id: {0}")]
    DuplicateToolId(String),
    #[error("Tool {tool} references unknown category: {category}")]
    UnknownCategory { tool: String, category: String },
}

/// One tool entry from the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tool {
    /// Stable unique identifier; also the page slug and template filename.
    pub id: String,
    /// Category id; must appear in `categoryOrder`.
    pub category: String,
    /// Emoji or short glyph shown next to the tool name.
    pub icon: String,
    /// Highlighted on the homepage when set.
    #[serde(default)]
    pub popular: bool,
}

/// The tool catalog: ordered categories and ordered tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Catalog {
    /// Category ids in display order.
    pub category_order: Vec<String>,
    /// Tools in display order.
    pub tools: Vec<Tool>,
}

impl Catalog {
    /// Enforce catalog invariants: unique tool ids, resolvable categories.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateToolId(tool.id.clone()));
            }
            if !self.category_order.contains(&tool.category) {
                return Err(CatalogError::UnknownCategory {
                    tool: tool.id.clone(),
                    category: tool.category.clone(),
                });
            }
        }
        Ok(())
    }

    /// Tools belonging to a category, in catalog order.
    pub fn tools_in(&self, category: &str) -> impl Iterator<Item = &Tool> {
        self.tools.iter().filter(move |t| t.category == category)
    }

    /// Tools flagged popular, in catalog order (no re-ranking).
    pub fn popular_tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter().filter(|t| t.popular)
    }

    /// Live tool count for a category, computed from the catalog so it can
    /// never go stale.
    pub fn category_count(&self, category: &str) -> usize {
        self.tools_in(category).count()
    }
}

/// Load and validate the catalog from a JSON file.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}
