//! Site assembly.
//!
//! The final stage of the build: loads the three input documents, validates
//! everything up front, then writes the complete site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html               # Root redirect (browser-language aware)
//! ├── sitemap.xml
//! ├── robots.txt
//! ├── assets/                  # Verbatim copy of the source assets tree
//! │   └── js/app.js            # Generator-owned client runtime
//! ├── ar/
//! │   ├── index.html           # Homepage
//! │   └── tools/
//! │       ├── percentage.html  # One page per catalog tool
//! │       └── ...
//! └── en/
//!     └── ...
//! ```
//!
//! ## Failure Ordering
//!
//! All loading and validation — config, catalog, translations, and the
//! closed-set placeholder check over every tool fragment — happens before
//! the output directory is deleted. A bad input never destroys the
//! previous build. After that point the only error paths are filesystem
//! failures.
//!
//! ## Degradation
//!
//! A (tool, language) pair missing its translation or its fragment
//! template skips that one page; the skip lands in the returned
//! [`BuildSummary`] as a warning. The sitemap still lists every catalog
//! URL for every language, skipped or not.
//!
//! ## Parallelism
//!
//! Tool pages within a language render on the rayon pool (pure functions
//! of loaded data); writes happen on the calling thread in catalog order,
//! so file contents, warning order, and the sitemap are deterministic.

use crate::catalog::{self, Catalog, CatalogError};
use crate::config::{self, ConfigError, SiteConfig};
use crate::home;
use crate::i18n::{self, I18nError, TranslationCatalog};
use crate::page::SiteView;
use crate::template::{self, TemplateError};
use crate::tool_page::{self, Outcome, SkipReason, ToolPageError};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

/// Client runtime shipped into every generated site.
const APP_JS: &str = include_str!("../static/app.js");

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Translation error: {0}")]
    I18n(#[from] I18nError),
    #[error("Template error in tools/{tool_id}.html: {source}")]
    Template {
        tool_id: String,
        source: TemplateError,
    },
    #[error(transparent)]
    ToolPage(#[from] ToolPageError),
}

/// The three loaded input documents.
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub translations: TranslationCatalog,
}

/// One page skipped by the build, with the reason for the warning line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    pub lang: String,
    pub tool_id: String,
    pub reason: SkipReason,
}

/// Per-language page counts.
#[derive(Debug, Clone)]
pub struct LanguageSummary {
    pub lang: String,
    /// Homepage plus written tool pages.
    pub pages_written: usize,
}

/// What the build produced, for display by `output.rs`.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub languages: Vec<LanguageSummary>,
    pub skipped: Vec<SkippedPage>,
    pub assets_copied: usize,
    pub sitemap_entries: usize,
}

/// What `check` found, without writing anything.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub languages: Vec<String>,
    pub tool_count: usize,
    pub category_count: usize,
    pub skipped: Vec<SkippedPage>,
}

/// Load and cross-validate the three input documents.
pub fn load_site(source: &Path) -> Result<Site, GenerateError> {
    let config = config::load_config(source)?;
    let catalog = catalog::load(&source.join("data/tools.json"))?;
    let translations = i18n::load(&source.join("data/i18n.json"))?;
    translations.require_languages(&config.languages)?;
    Ok(Site {
        config,
        catalog,
        translations,
    })
}

/// Validate every existing tool fragment against the closed placeholder
/// set. Missing templates are not an error here — they become per-page
/// skips during assembly.
fn validate_templates(source: &Path, catalog: &Catalog) -> Result<(), GenerateError> {
    for tool in &catalog.tools {
        let path = source.join("tools").join(format!("{}.html", tool.id));
        if !path.exists() {
            continue;
        }
        let raw = fs::read_to_string(&path)?;
        template::validate(&raw).map_err(|e| GenerateError::Template {
            tool_id: tool.id.clone(),
            source: e,
        })?;
    }
    Ok(())
}

/// Run the full build: validate, clean the output directory, write the site.
pub fn build(source: &Path, output: &Path) -> Result<BuildSummary, GenerateError> {
    let site = load_site(source)?;
    validate_templates(source, &site.catalog)?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config::effective_workers(&site.config.processing))
        .build_global()
        .ok();

    // Output is wholly derived; delete and recreate
    if output.exists() {
        fs::remove_dir_all(output)?;
    }
    fs::create_dir_all(output)?;

    let assets_copied = copy_assets(source, output)?;
    let runtime_dir = output.join("assets/js");
    fs::create_dir_all(&runtime_dir)?;
    fs::write(runtime_dir.join("app.js"), APP_JS)?;

    let mut languages = Vec::new();
    let mut skipped = Vec::new();

    for lang in &site.config.languages {
        let view = SiteView::new(&site.config, &site.catalog, &site.translations, lang)?;
        let lang_dir = output.join(lang);
        let tools_dir = lang_dir.join("tools");
        fs::create_dir_all(&tools_dir)?;

        fs::write(lang_dir.join("index.html"), home::render(&view).into_string())?;
        let mut pages_written = 1;

        let outcomes: Vec<Outcome> = site
            .catalog
            .tools
            .par_iter()
            .map(|tool| tool_page::compose(&view, tool, source))
            .collect::<Result<Vec<_>, _>>()?;

        for (tool, outcome) in site.catalog.tools.iter().zip(outcomes) {
            match outcome {
                Outcome::Rendered(markup) => {
                    fs::write(
                        tools_dir.join(format!("{}.html", tool.id)),
                        markup.into_string(),
                    )?;
                    pages_written += 1;
                }
                Outcome::Skipped(reason) => skipped.push(SkippedPage {
                    lang: lang.clone(),
                    tool_id: tool.id.clone(),
                    reason,
                }),
            }
        }

        languages.push(LanguageSummary {
            lang: lang.clone(),
            pages_written,
        });
    }

    let sitemap = render_sitemap(&site.config, &site.catalog);
    fs::write(output.join("sitemap.xml"), sitemap)?;
    fs::write(output.join("robots.txt"), render_robots(&site.config))?;
    fs::write(
        output.join("index.html"),
        render_redirect(&site.config, &site.translations).into_string(),
    )?;

    Ok(BuildSummary {
        languages,
        skipped,
        assets_copied,
        sitemap_entries: site.config.languages.len() * (1 + site.catalog.tools.len()),
    })
}

/// Validate the source tree and report would-be skips without writing.
pub fn check(source: &Path) -> Result<CheckReport, GenerateError> {
    let site = load_site(source)?;
    validate_templates(source, &site.catalog)?;

    let mut skipped = Vec::new();
    for lang in &site.config.languages {
        if let Some(bundle) = site.translations.bundle(lang) {
            for tool in &site.catalog.tools {
                // Same precedence as assembly: translation first, then template
                let reason = if !bundle.tools.contains_key(&tool.id) {
                    Some(SkipReason::MissingTranslation)
                } else if !source
                    .join("tools")
                    .join(format!("{}.html", tool.id))
                    .exists()
                {
                    Some(SkipReason::MissingTemplate)
                } else {
                    None
                };
                if let Some(reason) = reason {
                    skipped.push(SkippedPage {
                        lang: lang.clone(),
                        tool_id: tool.id.clone(),
                        reason,
                    });
                }
            }
        }
    }

    Ok(CheckReport {
        languages: site.config.languages.clone(),
        tool_count: site.catalog.tools.len(),
        category_count: site.catalog.category_order.len(),
        skipped,
    })
}

/// Copy the source `assets/` tree verbatim into the output directory.
/// Returns the number of files copied.
fn copy_assets(source: &Path, output: &Path) -> Result<usize, GenerateError> {
    let assets = source.join("assets");
    if !assets.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(&assets) {
        let entry = entry.map_err(std::io::Error::from)?;
        if let Ok(rel) = entry.path().strip_prefix(source) {
            let dest = output.join(rel);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)?;
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &dest)?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}

/// Render the sitemap: one entry per language × (homepage + every catalog
/// tool). Tools whose page was skipped keep their entry.
fn render_sitemap(config: &SiteConfig, catalog: &Catalog) -> String {
    let mut entries = String::new();
    for lang in &config.languages {
        entries.push_str(&format!(
            "  <url><loc>{}</loc></url>\n",
            config.url_for(lang, "/")
        ));
        for tool in &catalog.tools {
            entries.push_str(&format!(
                "  <url><loc>{}</loc></url>\n",
                config.url_for(lang, &format!("/tools/{}.html", tool.id))
            ));
        }
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>\n"
    )
}

fn render_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        config.base_url
    )
}

/// Root redirect page: picks the configured language whose code prefixes
/// the browser's reported preference, defaulting to the primary language,
/// with a meta-refresh fallback and plain links for no-JS visitors.
fn render_redirect(config: &SiteConfig, translations: &TranslationCatalog) -> Markup {
    let codes = serde_json::to_string(&config.languages).unwrap_or_else(|_| "[]".to_string());
    let script = format!(
        "var langs={codes};var pref=(navigator.language||'').toLowerCase();\
var target='{primary}';\
for(var i=0;i<langs.length;i++){{if(pref.indexOf(langs[i])===0){{target=langs[i];break;}}}}\
window.location.href='/'+target+'/';",
        primary = config.primary_language()
    );

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                script { (PreEscaped(script)) }
                meta http-equiv="refresh" content={ "0;url=/" (config.primary_language()) "/" };
            }
            body {
                @for (i, code) in config.languages.iter().enumerate() {
                    @if i > 0 { " | " }
                    a href={ "/" (code) "/" } {
                        (translations
                            .bundle(code)
                            .map(|b| b.meta.language_name.as_str())
                            .unwrap_or(code.as_str()))
                    }
                }
            }
        }
    }
}
