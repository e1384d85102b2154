//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. Warnings about skipped
//! pages are rendered here from the returned summaries, never printed from
//! inside the pipeline.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Assets
//!     37 files copied
//!
//! Pages
//! ar: homepage + 12 tool pages
//!     ! vat: no translation entry
//! en: homepage + 13 tool pages
//!
//! Sitemap
//!     28 URLs
//! ```
//!
//! ## Check
//!
//! ```text
//! Languages: ar, en
//! Tools: 14 in 4 categories
//!     ! vat (ar): no translation entry
//! ```
//!
//! ## Search
//!
//! ```text
//! 001 Percentage Calculator
//!     URL: /en/tools/percentage.html
//! ```

use crate::generate::{BuildSummary, CheckReport};
use crate::search::SearchRecord;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Build output
// ============================================================================

pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Assets".to_string());
    lines.push(format!("    {} files copied", summary.assets_copied));
    lines.push(String::new());

    lines.push("Pages".to_string());
    for lang in &summary.languages {
        lines.push(format!(
            "{}: homepage + {} tool pages",
            lang.lang,
            lang.pages_written - 1
        ));
        for skip in summary.skipped.iter().filter(|s| s.lang == lang.lang) {
            lines.push(format!("    ! {}: {}", skip.tool_id, skip.reason));
        }
    }
    lines.push(String::new());

    lines.push("Sitemap".to_string());
    lines.push(format!("    {} URLs", summary.sitemap_entries));

    lines
}

pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Languages: {}", report.languages.join(", ")));
    lines.push(format!(
        "Tools: {} in {} categories",
        report.tool_count, report.category_count
    ));
    for skip in &report.skipped {
        lines.push(format!(
            "    ! {} ({}): {}",
            skip.tool_id, skip.lang, skip.reason
        ));
    }
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Search output
// ============================================================================

pub fn format_search_output(results: &[&SearchRecord]) -> Vec<String> {
    if results.is_empty() {
        return vec!["No matching tools".to_string()];
    }
    let mut lines = Vec::new();
    for (i, record) in results.iter().enumerate() {
        if record.category_name.is_empty() {
            lines.push(format!("{} {}", format_index(i + 1), record.name));
        } else {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                record.name,
                record.category_name
            ));
        }
        lines.push(format!("    URL: {}", record.url));
    }
    lines
}

pub fn print_search_output(results: &[&SearchRecord]) {
    for line in format_search_output(results) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{LanguageSummary, SkippedPage};
    use crate::tool_page::SkipReason;

    fn sample_summary() -> BuildSummary {
        BuildSummary {
            languages: vec![
                LanguageSummary {
                    lang: "ar".to_string(),
                    pages_written: 2,
                },
                LanguageSummary {
                    lang: "en".to_string(),
                    pages_written: 3,
                },
            ],
            skipped: vec![SkippedPage {
                lang: "ar".to_string(),
                tool_id: "discount".to_string(),
                reason: SkipReason::MissingTranslation,
            }],
            assets_copied: 5,
            sitemap_entries: 8,
        }
    }

    #[test]
    fn build_output_counts_tool_pages_without_homepage() {
        let lines = format_build_output(&sample_summary());
        assert!(lines.contains(&"ar: homepage + 1 tool pages".to_string()));
        assert!(lines.contains(&"en: homepage + 2 tool pages".to_string()));
    }

    #[test]
    fn build_output_places_warnings_under_their_language() {
        let lines = format_build_output(&sample_summary());
        let ar = lines.iter().position(|l| l.starts_with("ar:")).unwrap();
        let en = lines.iter().position(|l| l.starts_with("en:")).unwrap();
        let warn = lines
            .iter()
            .position(|l| l.contains("! discount: no translation entry"))
            .unwrap();
        assert!(ar < warn);
        assert!(warn < en);
    }

    #[test]
    fn build_output_reports_assets_and_sitemap() {
        let lines = format_build_output(&sample_summary());
        assert!(lines.contains(&"    5 files copied".to_string()));
        assert!(lines.contains(&"    8 URLs".to_string()));
    }

    #[test]
    fn check_output_lists_languages_and_counts() {
        let report = CheckReport {
            languages: vec!["ar".to_string(), "en".to_string()],
            tool_count: 3,
            category_count: 2,
            skipped: vec![SkippedPage {
                lang: "en".to_string(),
                tool_id: "bmi".to_string(),
                reason: SkipReason::MissingTemplate,
            }],
        };
        let lines = format_check_output(&report);
        assert_eq!(lines[0], "Languages: ar, en");
        assert_eq!(lines[1], "Tools: 3 in 2 categories");
        assert!(lines.contains(&"    ! bmi (en): no fragment template".to_string()));
    }

    #[test]
    fn search_output_empty_result() {
        let lines = format_search_output(&[]);
        assert_eq!(lines, vec!["No matching tools".to_string()]);
    }

    #[test]
    fn search_output_indexes_results() {
        let record = SearchRecord {
            id: "percentage".to_string(),
            name: "Percentage Calculator".to_string(),
            keywords: String::new(),
            search_terms: String::new(),
            category: "finance".to_string(),
            category_name: "Money".to_string(),
            icon: "🧮".to_string(),
            url: "/en/tools/percentage.html".to_string(),
        };
        let lines = format_search_output(&[&record]);
        assert_eq!(lines[0], "001 Percentage Calculator (Money)");
        assert_eq!(lines[1], "    URL: /en/tools/percentage.html");
    }
}
