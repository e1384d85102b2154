//! Tool page composition.
//!
//! A tool page is the tool's on-disk fragment template
//! (`tools/<id>.html`), run through placeholder substitution with the
//! tool's localized text, wrapped in the full page skeleton.
//!
//! This is the pipeline's only graceful-degradation path: a tool missing
//! either its translation entry for the current language or its fragment
//! template yields [`Outcome::Skipped`] — the page is omitted with a
//! warning and the build carries on. Everything else (unreadable template,
//! unrecognized placeholder) is a hard error.

use crate::catalog::Tool;
use crate::page::{self, PageContext, SiteView};
use crate::template::{self, TemplateError};
use maud::{Markup, PreEscaped};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a tool page was omitted from the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTranslation,
    MissingTemplate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingTranslation => write!(f, "no translation entry"),
            SkipReason::MissingTemplate => write!(f, "no fragment template"),
        }
    }
}

/// Result of composing one (tool, language) page.
#[derive(Debug)]
pub enum Outcome {
    Rendered(Markup),
    Skipped(SkipReason),
}

#[derive(Error, Debug)]
pub enum ToolPageError {
    #[error("failed to read template for {tool_id}: {source}")]
    Io {
        tool_id: String,
        source: std::io::Error,
    },
    #[error("template for {tool_id}: {source}")]
    Template {
        tool_id: String,
        source: TemplateError,
    },
}

/// Compose the full document for one tool in the view's language.
///
/// The translation check runs before the template check, so a tool missing
/// both reports the missing translation.
pub fn compose(view: &SiteView, tool: &Tool, source_dir: &Path) -> Result<Outcome, ToolPageError> {
    let Some(text) = view.bundle.tools.get(&tool.id) else {
        return Ok(Outcome::Skipped(SkipReason::MissingTranslation));
    };

    let template_path = source_dir.join("tools").join(format!("{}.html", tool.id));
    if !template_path.exists() {
        return Ok(Outcome::Skipped(SkipReason::MissingTemplate));
    }

    let raw = fs::read_to_string(&template_path).map_err(|e| ToolPageError::Io {
        tool_id: tool.id.clone(),
        source: e,
    })?;
    let content = template::substitute(&raw, text, &view.bundle.ui).map_err(|e| {
        ToolPageError::Template {
            tool_id: tool.id.clone(),
            source: e,
        }
    })?;

    let canonical = format!("/tools/{}.html", tool.id);
    let ctx = PageContext {
        title: &text.title,
        meta_description: &text.meta_description,
        keywords: &text.keywords,
        canonical_path: &canonical,
        tool_id: Some(&tool.id),
        tool_name: Some(&text.name),
        category_name: view
            .bundle
            .categories
            .get(&tool.category)
            .map(|c| c.name.as_str()),
        content: PreEscaped(content),
        is_home: false,
    };
    Ok(Outcome::Rendered(page::render_page(view, ctx)))
}
