//! Full-page HTML rendering.
//!
//! Every generated document shares one skeleton: head metadata (SEO,
//! OpenGraph, hreflang alternates, JSON-LD), sidebar, header with
//! breadcrumb and actions, the page-specific content fragment, footer,
//! settings panel, and the client runtime hooks (`window.toolsData`,
//! `body[data-tool-id]`, `/assets/js/app.js`).
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): templates are
//! type-safe Rust with automatic escaping. The only pre-escaped insertions
//! are the JSON-LD / search-index scripts (serialized by `serde_json`) and
//! the tool content fragment, which has already passed the closed
//! placeholder validation — all of it trusted build-time data authored in
//! the site repository, never user input.
//!
//! ## Language direction
//!
//! The primary language renders `dir="rtl"`, every other language
//! `dir="ltr"` — the directory's first language is the right-to-left one.
//!
//! ## Breadcrumb
//!
//! Always starts with the home link; appends the category label when
//! present; appends the tool name as the non-linked current crumb unless
//! the page is the homepage.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::i18n::{I18nError, LocaleBundle, TranslationCatalog, UiStrings};
use crate::search;
use crate::sidebar;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Per-language view of the site: config, catalog, and the resolved locale
/// bundle, plus the serialized search index every page embeds. Built once
/// per language and shared by all page renders.
pub struct SiteView<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub translations: &'a TranslationCatalog,
    pub lang: &'a str,
    pub bundle: &'a LocaleBundle,
    pub tools_json: String,
}

impl<'a> SiteView<'a> {
    pub fn new(
        config: &'a SiteConfig,
        catalog: &'a Catalog,
        translations: &'a TranslationCatalog,
        lang: &'a str,
    ) -> Result<Self, I18nError> {
        let bundle = translations
            .bundle(lang)
            .ok_or_else(|| I18nError::MissingLanguage(lang.to_string()))?;
        let records = search::build_records(catalog, bundle, lang);
        Ok(Self {
            config,
            catalog,
            translations,
            lang,
            bundle,
            tools_json: search::records_json(&records),
        })
    }

    pub fn is_primary(&self) -> bool {
        self.lang == self.config.primary_language()
    }

    /// Text direction attribute for this language.
    pub fn dir(&self) -> &'static str {
        if self.is_primary() { "rtl" } else { "ltr" }
    }

    /// Absolute URL of a page in this language.
    pub fn url_for(&self, path: &str) -> String {
        self.config.url_for(self.lang, path)
    }
}

/// Ephemeral per-page render input. Created fresh for each page and
/// consumed once by [`render_page`].
pub struct PageContext<'a> {
    pub title: &'a str,
    pub meta_description: &'a str,
    pub keywords: &'a str,
    /// Language-relative canonical path: `/` or `/tools/<id>.html`.
    pub canonical_path: &'a str,
    pub tool_id: Option<&'a str>,
    pub tool_name: Option<&'a str>,
    pub category_name: Option<&'a str>,
    pub content: Markup,
    pub is_home: bool,
}

// ============================================================================
// Inline SVG icons
// ============================================================================

fn search_icon() -> Markup {
    html! {
        svg.search-icon width="18" height="18" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" {
            circle cx="11" cy="11" r="8" {}
            path d="m21 21-4.35-4.35" {}
        }
    }
}

fn menu_icon() -> Markup {
    html! {
        svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" {
            path d="M4 6h16M4 12h16M4 18h16" {}
        }
    }
}

fn collapse_icon() -> Markup {
    html! {
        svg width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" {
            path d="M11 19l-7-7 7-7m8 14l-7-7 7-7" {}
        }
    }
}

fn share_icon() -> Markup {
    html! {
        svg width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" {
            path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" {}
            polyline points="16 6 12 2 8 6" {}
            line x1="12" y1="2" x2="12" y2="15" {}
        }
    }
}

fn gear_icon() -> Markup {
    html! {
        svg width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" {
            circle cx="12" cy="12" r="3" {}
            path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1 0 2.83 2 2 0 0 1-2.83 0l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-2 2 2 2 0 0 1-2-2v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 0 1-2.83 0 2 2 0 0 1 0-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1-2-2 2 2 0 0 1 2-2h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 0 1 0-2.83 2 2 0 0 1 2.83 0l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 2-2 2 2 0 0 1 2 2v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 0 1 2.83 0 2 2 0 0 1 0 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 2 2 2 2 0 0 1-2 2h-.09a1.65 1.65 0 0 0-1.51 1z" {}
        }
    }
}

// ============================================================================
// Shared components
// ============================================================================

/// A search input with its icon; the runtime attaches the results dropdown.
/// Used in both the sidebar and the homepage hero.
pub(crate) fn search_box(ui: &UiStrings) -> Markup {
    html! {
        div.search-input-wrapper {
            input.search-input type="text" placeholder=(ui.search) aria-label=(ui.search);
            (search_icon())
        }
    }
}

fn breadcrumb(view: &SiteView, ctx: &PageContext) -> Markup {
    html! {
        a.breadcrumb-link href={ "/" (view.lang) "/" } { (view.bundle.ui.home) }
        @if let Some(category) = ctx.category_name {
            span.breadcrumb-separator { "›" }
            span.breadcrumb-link { (category) }
        }
        @if !ctx.is_home {
            @if let Some(name) = ctx.tool_name {
                span.breadcrumb-separator { "›" }
                span.breadcrumb-current { (name) }
            }
        }
    }
}

fn settings_panel(view: &SiteView) -> Markup {
    let ui = &view.bundle.ui;
    html! {
        div.settings-overlay {}
        div.settings-panel {
            div.settings-header {
                h2.settings-title { (ui.settings) }
                button.settings-close aria-label="Close" { "✕" }
            }
            div.settings-content {
                div.settings-section {
                    div.settings-section-title { (ui.language) }
                    div.settings-option {
                        @for code in &view.config.languages {
                            @let label = view
                                .translations
                                .bundle(code)
                                .map(|b| b.meta.language_name.as_str())
                                .unwrap_or(code.as_str());
                            button.settings-btn.active[code.as_str() == view.lang] data-lang-btn=(code) { (label) }
                        }
                    }
                }
                div.settings-section {
                    div.settings-section-title { (ui.theme) }
                    div.settings-option {
                        button.settings-btn data-theme-btn="light" { "☀️ " (ui.theme_light) }
                        button.settings-btn data-theme-btn="dark" { "🌙 " (ui.theme_dark) }
                        // Server-side default; the runtime re-marks from storage
                        button.settings-btn.active data-theme-btn="auto" { "💻 " (ui.theme_auto) }
                    }
                }
                div.settings-section {
                    button.settings-btn.settings-danger data-clear-data { "🗑️ " (ui.clear_data) }
                }
            }
        }
    }
}

/// Localized strings the client runtime displays (toasts, empty search
/// results, the clear-data confirmation). Embedded per page so `app.js`
/// stays language-agnostic.
fn runtime_strings(ui: &UiStrings) -> String {
    serde_json::json!({
        "noResults": ui.no_results,
        "dataCleared": ui.data_cleared,
        "linkCopied": ui.link_copied,
        "confirmClearData": ui.confirm_clear_data,
    })
    .to_string()
}

/// JSON-LD structured data: every page is a free web application.
fn structured_data(view: &SiteView, ctx: &PageContext) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": ctx.tool_name.unwrap_or(&view.bundle.meta.site_name),
        "description": ctx.meta_description,
        "url": view.url_for(ctx.canonical_path),
        "applicationCategory": "UtilityApplication",
        "operatingSystem": "Any",
        "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
        "inLanguage": view.config.languages,
        "isAccessibleForFree": true
    })
    .to_string()
}

// ============================================================================
// Page renderer
// ============================================================================

/// Render a complete HTML document for one page.
pub fn render_page(view: &SiteView, ctx: PageContext) -> Markup {
    let ui = &view.bundle.ui;
    let meta = &view.bundle.meta;
    let canonical = view.url_for(ctx.canonical_path);
    let jsonld = structured_data(view, &ctx);
    let nav = sidebar::build(view.catalog, view.bundle, view.lang, ctx.tool_id);

    html! {
        (DOCTYPE)
        html lang=(view.lang) dir=(view.dir()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (ctx.title) }
                meta name="description" content=(ctx.meta_description);
                meta name="keywords" content=(ctx.keywords);
                meta name="author" content=(meta.site_name);
                meta name="robots" content="index, follow";

                meta property="og:type" content="website";
                meta property="og:title" content=(ctx.title);
                meta property="og:description" content=(ctx.meta_description);
                meta property="og:url" content=(canonical);
                meta property="og:site_name" content=(meta.site_name);
                meta property="og:locale" content=(meta.locale);

                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(ctx.title);
                meta name="twitter:description" content=(ctx.meta_description);

                @for code in &view.config.languages {
                    link rel="alternate" hreflang=(code) href=(view.config.url_for(code, ctx.canonical_path));
                }
                link rel="alternate" hreflang="x-default" href=(view.config.url_for(view.config.primary_language(), ctx.canonical_path));
                link rel="canonical" href=(canonical);

                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Tajawal:wght@400;500;600;700&display=swap" rel="stylesheet";
                link rel="stylesheet" href="/assets/css/main.css";

                script type="application/ld+json" { (PreEscaped(jsonld)) }
            }
            body data-tool-id=(ctx.tool_id.unwrap_or("")) {
                div.app-container {
                    div.sidebar-overlay {}

                    aside.sidebar {
                        div.sidebar-header {
                            a.logo href={ "/" (view.lang) "/" } {
                                div.logo-icon { "🔧" }
                                span.logo-text.sidebar-text { (meta.site_name) }
                            }
                        }
                        div.sidebar-search { (search_box(ui)) }
                        nav.sidebar-nav { (nav) }
                        div.sidebar-footer {
                            button.sidebar-toggle aria-label="Toggle sidebar" {
                                (collapse_icon())
                                span.sidebar-text { (ui.sidebar) }
                            }
                        }
                    }

                    div.main-content {
                        header.main-header {
                            button.header-btn.mobile-menu-btn aria-label="Menu" { (menu_icon()) }
                            nav.header-breadcrumb { (breadcrumb(view, &ctx)) }
                            div.header-actions {
                                button.header-btn data-favorite-btn aria-label=(ui.add_favorite) { "☆" }
                                button.header-btn data-share-title=(ctx.tool_name.unwrap_or(&meta.site_name)) aria-label=(ui.share) {
                                    (share_icon())
                                }
                                button.header-btn data-open-settings aria-label=(ui.settings) { (gear_icon()) }
                            }
                        }
                        main.page-content { (ctx.content) }
                        footer.main-footer {
                            p { (ui.made_with) " | " (ui.copyright) " © " (view.config.year()) " " (meta.site_name) }
                        }
                    }
                }

                (settings_panel(view))
                div.toast {}

                script { (PreEscaped(format!("window.toolsData = {};", view.tools_json))) }
                script { (PreEscaped(format!("window.uiText = {};", runtime_strings(ui)))) }
                script src="/assets/js/app.js" {}
            }
        }
    }
}
