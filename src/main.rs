use clap::{Parser, Subcommand};
use simple_kit::{config, generate, output, search};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-kit")]
#[command(about = "Static site generator for multilingual tool directories")]
#[command(long_about = "\
Static site generator for multilingual tool directories

Two JSON documents drive the site: a tool catalog and a translation
catalog. Each tool's content is an HTML fragment with {{key}} placeholders
from a closed, validated set.

Source structure:

  site/
  ├── config.toml                  # Base URL, language list (optional)
  ├── data/tools.json              # Tools, categories, ordering, popularity
  ├── data/i18n.json               # Per-language bundles (meta, ui, tools)
  ├── tools/percentage.html        # One fragment template per tool id
  └── assets/                      # Copied verbatim to the output root

Output: one homepage and one page per tool for every configured language
(/{lang}/, /{lang}/tools/{id}.html), plus sitemap.xml, robots.txt, and a
root redirect that honors the browser language.

A tool missing its translation or template for some language skips that
one page with a warning; the build never aborts over it.

Run 'simple-kit gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the full site: validate, render all languages, write output
    Build,
    /// Validate the source directory without writing anything
    Check,
    /// Run the client search matching against the catalog
    Search {
        /// Query words (conjunctive: every word must match)
        query: Vec<String>,
        /// Language to search in (defaults to the primary language)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let summary = generate::build(&cli.source, &cli.output)?;
            output::print_build_output(&summary);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = generate::check(&cli.source)?;
            output::print_check_output(&report);
            println!("==> Content is valid");
        }
        Command::Search { query, lang } => {
            let site = generate::load_site(&cli.source)?;
            let lang = lang.unwrap_or_else(|| site.config.primary_language().to_string());
            let bundle = site
                .translations
                .bundle(&lang)
                .ok_or_else(|| format!("no translation bundle for language: {lang}"))?;
            let records = search::build_records(&site.catalog, bundle, &lang);
            let hits = search::search(&records, &query.join(" "));
            output::print_search_output(&hits);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
