//! Sidebar navigation builder.
//!
//! Derives the navigation tree (home link, then categories with their
//! tools) from the catalog. Ordering is catalog-declared, never
//! alphabetical: categories follow `categoryOrder`, tools follow their
//! position in `tools`.
//!
//! Active-state marking drives the CSS:
//! - the home entry is `active` iff the page has no active tool
//! - a tool entry is `active` iff its id matches the active tool
//! - a category section is `open` iff it contains the active tool
//!
//! A category with no localized entry in the current bundle is omitted
//! entirely. A tool with no localized name falls back to its raw id.

use crate::catalog::Catalog;
use crate::i18n::LocaleBundle;
use maud::{Markup, html};

fn section_arrow() -> Markup {
    html! {
        svg.nav-section-arrow.sidebar-text width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" {
            path d="m6 9 6 6 6-6" {}
        }
    }
}

/// Build the sidebar navigation fragment for one language.
pub fn build(
    catalog: &Catalog,
    bundle: &LocaleBundle,
    lang: &str,
    active_tool: Option<&str>,
) -> Markup {
    html! {
        a.nav-item.active[active_tool.is_none()] href={ "/" (lang) "/" } {
            span.nav-item-icon { "🏠" }
            span.sidebar-text { (bundle.ui.home) }
        }
        @for cat_id in &catalog.category_order {
            @if let Some(cat) = bundle.categories.get(cat_id) {
                @let has_active = catalog
                    .tools_in(cat_id)
                    .any(|t| Some(t.id.as_str()) == active_tool);
                div.nav-section.open[has_active] {
                    div.nav-section-title {
                        span {
                            span.nav-section-icon { (cat.icon) }
                            span.sidebar-text { (cat.name) }
                        }
                        (section_arrow())
                    }
                    div.nav-section-items {
                        @for tool in catalog.tools_in(cat_id) {
                            @let is_active = Some(tool.id.as_str()) == active_tool;
                            a.nav-item.active[is_active] href={ "/" (lang) "/tools/" (tool.id) ".html" } {
                                span.nav-item-icon { (tool.icon) }
                                span.sidebar-text { (bundle.tool_name(&tool.id)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
