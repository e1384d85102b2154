//! Homepage composition.
//!
//! The homepage is a hero (site name, slogan, a second search box), the
//! popular-tools grid, and the category summary cards. Popular tools are
//! the catalog entries flagged `popular`, in catalog order — there is no
//! popularity ranking. Category cards show a live tool count computed from
//! the catalog, so the number can never drift from the actual tool list.

use crate::page::{self, PageContext, SiteView};
use maud::{Markup, html};

/// Compose the homepage content fragment.
pub fn compose(view: &SiteView) -> Markup {
    let ui = &view.bundle.ui;
    let meta = &view.bundle.meta;
    html! {
        div.hero {
            h1.hero-title { (meta.site_name) }
            p.hero-subtitle { (meta.site_slogan) }
            div.hero-search { (page::search_box(ui)) }
        }

        section.tools-section {
            div.section-header {
                h2.section-title { "⭐ " (ui.most_popular) }
            }
            div.tools-grid {
                @for tool in view.catalog.popular_tools() {
                    a.tool-grid-card href={ "/" (view.lang) "/tools/" (tool.id) ".html" } {
                        div.tool-grid-icon { (tool.icon) }
                        div.tool-grid-info {
                            h3 { (view.bundle.tool_name(&tool.id)) }
                            p { (view.bundle.tool_description(&tool.id)) }
                        }
                    }
                }
            }
        }

        section.tools-section {
            div.section-header {
                h2.section-title { "📂 " (ui.categories) }
            }
            div.categories-grid {
                @for cat_id in &view.catalog.category_order {
                    @if let Some(cat) = view.bundle.categories.get(cat_id) {
                        div.category-card {
                            div.category-icon { (cat.icon) }
                            div.category-name { (cat.name) }
                            div.category-count { (view.catalog.category_count(cat_id)) " " (ui.tool_count) }
                        }
                    }
                }
            }
        }
    }
}

/// Render the complete homepage document for one language.
pub fn render(view: &SiteView) -> Markup {
    let meta = &view.bundle.meta;
    let title = format!("{} - {}", meta.site_name, meta.site_slogan);
    let ctx = PageContext {
        title: &title,
        meta_description: &meta.site_description,
        keywords: &meta.keywords,
        canonical_path: "/",
        tool_id: None,
        tool_name: None,
        category_name: None,
        content: compose(view),
        is_home: true,
    };
    page::render_page(view, ctx)
}
