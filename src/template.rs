//! Placeholder substitution for tool fragment templates.
//!
//! Tool content lives in per-tool HTML fragments (`tools/<id>.html`) written
//! by the data authors. Fragments reference localized strings through
//! literal `{{key}}` tokens, e.g.:
//!
//! ```html
//! <h1>{{tool.name}}</h1>
//! <button>{{ui.calculate}}</button>
//! <span data-error="{{validationMsg}}"></span>
//! ```
//!
//! The recognized key set is **closed and enumerated** by [`Placeholder`]:
//! a template referencing anything else is rejected up front with
//! [`TemplateError::UnknownPlaceholder`] instead of silently rendering an
//! empty string. A *recognized* key whose value is absent for some tool
//! (the optional label fields) substitutes to the empty string — that is
//! the supported way for a template to share labels across tools that
//! don't all define them.
//!
//! Text outside `{{...}}` tokens passes through untouched, including an
//! unterminated `{{` (left literal).

use crate::i18n::{ToolText, UiStrings};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("unrecognized placeholder: {{{{{0}}}}}")]
    UnknownPlaceholder(String),
}

/// The closed set of placeholder keys a tool fragment may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ToolName,
    ToolDescription,
    WhatIsPercent,
    Of,
    PercentOf,
    IsWhat,
    IsWhatPercent,
    PercentChange,
    From,
    To,
    Increase,
    Decrease,
    OriginalPrice,
    Discount,
    FinalPrice,
    YouSave,
    HowToUseText,
    UiCalculate,
    UiResult,
    UiHowToUse,
    ValidationMsg,
}

impl Placeholder {
    /// Parse a `{{key}}` body. Returns `None` for keys outside the
    /// recognized set.
    pub fn parse(key: &str) -> Option<Self> {
        Some(match key {
            "tool.name" => Self::ToolName,
            "tool.description" => Self::ToolDescription,
            "tool.whatIsPercent" => Self::WhatIsPercent,
            "tool.of" => Self::Of,
            "tool.percentOf" => Self::PercentOf,
            "tool.isWhat" => Self::IsWhat,
            "tool.isWhatPercent" => Self::IsWhatPercent,
            "tool.percentChange" => Self::PercentChange,
            "tool.from" => Self::From,
            "tool.to" => Self::To,
            "tool.increase" => Self::Increase,
            "tool.decrease" => Self::Decrease,
            "tool.originalPrice" => Self::OriginalPrice,
            "tool.discount" => Self::Discount,
            "tool.finalPrice" => Self::FinalPrice,
            "tool.youSave" => Self::YouSave,
            "tool.howToUseText" => Self::HowToUseText,
            "ui.calculate" => Self::UiCalculate,
            "ui.result" => Self::UiResult,
            "ui.howToUse" => Self::UiHowToUse,
            "validationMsg" => Self::ValidationMsg,
            _ => return None,
        })
    }

    /// Resolve the placeholder against a tool's localized text and the UI
    /// strings. `None` means "recognized but absent for this tool" and
    /// substitutes to the empty string.
    pub fn resolve<'a>(&self, tool: &'a ToolText, ui: &'a UiStrings) -> Option<&'a str> {
        match self {
            Self::ToolName => Some(&tool.name),
            Self::ToolDescription => Some(&tool.description),
            Self::WhatIsPercent => tool.what_is_percent.as_deref(),
            Self::Of => tool.of.as_deref(),
            Self::PercentOf => tool.percent_of.as_deref(),
            Self::IsWhat => tool.is_what.as_deref(),
            Self::IsWhatPercent => tool.is_what_percent.as_deref(),
            Self::PercentChange => tool.percent_change.as_deref(),
            Self::From => tool.from.as_deref(),
            Self::To => tool.to.as_deref(),
            Self::Increase => tool.increase.as_deref(),
            Self::Decrease => tool.decrease.as_deref(),
            Self::OriginalPrice => tool.original_price.as_deref(),
            Self::Discount => tool.discount.as_deref(),
            Self::FinalPrice => tool.final_price.as_deref(),
            Self::YouSave => tool.you_save.as_deref(),
            Self::HowToUseText => tool.how_to_use_text.as_deref(),
            Self::UiCalculate => Some(&ui.calculate),
            Self::UiResult => Some(&ui.result),
            Self::UiHowToUse => Some(&ui.how_to_use),
            Self::ValidationMsg => Some(&ui.validation_message),
        }
    }
}

/// Extract all `{{key}}` bodies from a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                keys.push(&after[..end]);
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    keys
}

/// Check every placeholder in a template against the recognized set.
pub fn validate(template: &str) -> Result<(), TemplateError> {
    for key in placeholders(template) {
        if Placeholder::parse(key).is_none() {
            return Err(TemplateError::UnknownPlaceholder(key.to_string()));
        }
    }
    Ok(())
}

/// Replace every `{{key}}` token with its resolved value.
///
/// Recognized-but-absent values become empty strings; unrecognized keys are
/// an error (callers validate templates before the output directory is
/// touched, so hitting this during substitution means a template changed
/// under us).
pub fn substitute(
    template: &str,
    tool: &ToolText,
    ui: &UiStrings,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                let placeholder = Placeholder::parse(key)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(key.to_string()))?;
                out.push_str(placeholder.resolve(tool, ui).unwrap_or(""));
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated token: keep the rest literal
                out.push_str(&rest[start..]);
                return Ok(out);
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
