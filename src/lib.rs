//! # Simple Kit
//!
//! A minimal static site generator for multilingual directories of small
//! browser-side calculator tools. Two JSON documents are the data source:
//! a tool catalog (ids, categories, icons, popularity flags) and a
//! translation catalog (per-language site metadata, UI strings, and
//! per-tool text). Each tool's content is an HTML fragment template with
//! `{{key}}` placeholders drawn from a closed, validated key set.
//!
//! # Architecture: Load → Render → Write
//!
//! The build is a single pass over loaded data:
//!
//! ```text
//! 1. Load      config.toml + data/*.json   (parse, cross-validate)
//! 2. Render    catalog × languages → HTML  (pure functions, rayon fan-out)
//! 3. Write     dist/                       (pages, sitemap, robots, redirect, assets)
//! ```
//!
//! Everything is validated before the output directory is touched, so a bad
//! input never destroys the previous build. The only non-fatal condition is
//! a tool missing its translation or its fragment template for some
//! language: that single page is skipped with a warning and the build
//! continues.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading and validation (base URL, language list, workers) |
//! | [`catalog`] | Tool catalog: ids, categories, ordering, popularity |
//! | [`i18n`] | Translation catalog: locale bundles and fallback resolvers |
//! | [`template`] | Closed-set `{{key}}` placeholder validation and substitution |
//! | [`page`] | Full-page skeleton renderer (head, sidebar, header, settings, footer) |
//! | [`sidebar`] | Navigation tree with active/open marking |
//! | [`home`] | Homepage composition (hero, popular tools, category cards) |
//! | [`tool_page`] | Per-tool page composition with graceful skips |
//! | [`search`] | Search records and the conjunctive matching engine |
//! | [`client`] | Reference model of the browser runtime state (theme, favorites, recent) |
//! | [`generate`] | Site assembly: clean, copy assets, write pages/sitemap/robots/redirect |
//! | [`output`] | CLI output formatting — pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Maud For The Skeleton, Validated Placeholders For Fragments
//!
//! The page skeleton is [Maud](https://maud.lambda.xyz/) — compile-time
//! checked, type-safe, auto-escaped. Tool content comes from disk-loaded
//! fragments, so it gets the next-best thing: every `{{key}}` placeholder
//! is checked against a closed enum before the build writes anything.
//! A typo'd key is a build error, not a silently empty `<h1>`.
//!
//! ## One Source Of Truth For Client State
//!
//! The browser runtime persists theme, sidebar, favorites, and recent
//! tools to local storage. [`client`] is the reference implementation of
//! that state machine — one storage-key table, one set of mutation rules —
//! and `static/app.js` (shipped into every site) mirrors it. The state
//! logic is unit-tested here without a browser.
//!
//! ## Languages Are Data
//!
//! Nothing about any specific language is hard-coded: the language list
//! lives in `config.toml`, every display string lives in the translation
//! catalog, and pages embed the strings the runtime needs. The first
//! configured language is the primary one: it renders right-to-left, backs
//! the `x-default` hreflang, and is the root redirect fallback.

pub mod catalog;
pub mod client;
pub mod config;
pub mod generate;
pub mod home;
pub mod i18n;
pub mod output;
pub mod page;
pub mod search;
pub mod sidebar;
pub mod template;
pub mod tool_page;

#[cfg(test)]
pub(crate) mod test_helpers;
