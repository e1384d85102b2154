//! Shared test utilities for the simple-kit test suite.
//!
//! Provides one canonical fixture site — catalog, translation bundles, and
//! an on-disk source tree — so unit tests across modules exercise the same
//! data. The fixture deliberately contains the two skip cases the pipeline
//! must tolerate:
//!
//! - `discount` has no Arabic translation (skipped in `ar`)
//! - `bmi` has no fragment template on disk (skipped everywhere)

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::i18n::{TranslationCatalog, UiStrings};

/// Fixture `data/tools.json`: two categories, three tools.
pub fn sample_tools_json() -> &'static str {
    r#"{
  "categoryOrder": ["finance", "health"],
  "tools": [
    { "id": "percentage", "category": "finance", "icon": "🧮", "popular": true },
    { "id": "discount", "category": "finance", "icon": "🏷️" },
    { "id": "bmi", "category": "health", "icon": "⚖️", "popular": true }
  ]
}"#
}

/// Fixture `data/i18n.json`: Arabic (primary) and English bundles.
pub fn sample_i18n_json() -> &'static str {
    r#"{
  "ar": {
    "meta": {
      "siteName": "عدة الحاسبات",
      "siteSlogan": "أدوات مجانية لكل يوم",
      "siteDescription": "مجموعة حاسبات وأدوات مجانية تعمل في المتصفح",
      "keywords": "أدوات مجانية، حاسبات، محولات",
      "locale": "ar_SA",
      "languageName": "العربية"
    },
    "ui": {
      "home": "الرئيسية",
      "search": "ابحث عن أداة...",
      "sidebar": "القائمة",
      "settings": "الإعدادات",
      "language": "اللغة",
      "theme": "المظهر",
      "themeLight": "فاتح",
      "themeDark": "داكن",
      "themeAuto": "تلقائي",
      "clearData": "مسح جميع البيانات",
      "share": "مشاركة",
      "addFavorite": "أضف للمفضلة",
      "madeWith": "صنع بحب",
      "copyright": "جميع الحقوق محفوظة",
      "calculate": "احسب",
      "result": "النتيجة",
      "howToUse": "طريقة الاستخدام",
      "toolCount": "أدوات",
      "mostPopular": "الأكثر استخداماً",
      "categories": "التصنيفات",
      "noResults": "لا توجد نتائج",
      "validationMessage": "أدخل أرقاماً صحيحة",
      "dataCleared": "تم مسح البيانات",
      "linkCopied": "تم النسخ!",
      "confirmClearData": "هل أنت متأكد من مسح جميع البيانات المحفوظة؟"
    },
    "categories": {
      "finance": { "name": "المال والأعمال", "icon": "💰" },
      "health": { "name": "الصحة", "icon": "🏥" }
    },
    "tools": {
      "percentage": {
        "name": "حاسبة النسبة المئوية",
        "description": "احسب النسب المئوية بسهولة",
        "title": "حاسبة النسبة المئوية - مجانية",
        "metaDescription": "حاسبة نسبة مئوية مجانية تعمل في المتصفح",
        "keywords": "نسبة مئوية، حاسبة، ضريبة",
        "searchTerms": "percent نسبه",
        "whatIsPercent": "كم تساوي",
        "of": "من",
        "percentOf": "النسبة من",
        "howToUseText": "أدخل الأرقام ثم اضغط احسب"
      },
      "bmi": {
        "name": "حاسبة كتلة الجسم",
        "description": "احسب مؤشر كتلة الجسم",
        "title": "حاسبة كتلة الجسم - مجانية",
        "metaDescription": "حاسبة مؤشر كتلة الجسم",
        "keywords": "كتلة الجسم، وزن، صحة"
      }
    }
  },
  "en": {
    "meta": {
      "siteName": "Handy Calculators",
      "siteSlogan": "Free tools for every day",
      "siteDescription": "A collection of free browser-side calculators",
      "keywords": "free tools, calculators, converters",
      "locale": "en_US",
      "languageName": "English"
    },
    "ui": {
      "home": "Home",
      "search": "Search for a tool...",
      "sidebar": "Menu",
      "settings": "Settings",
      "language": "Language",
      "theme": "Theme",
      "themeLight": "Light",
      "themeDark": "Dark",
      "themeAuto": "Auto",
      "clearData": "Clear all data",
      "share": "Share",
      "addFavorite": "Add to favorites",
      "madeWith": "Made with love",
      "copyright": "All rights reserved",
      "calculate": "Calculate",
      "result": "Result",
      "howToUse": "How to use",
      "toolCount": "tools",
      "mostPopular": "Most Popular",
      "categories": "Categories",
      "noResults": "No results found",
      "validationMessage": "Enter valid numbers",
      "dataCleared": "Data cleared",
      "linkCopied": "Copied!",
      "confirmClearData": "Are you sure you want to clear all saved data?"
    },
    "categories": {
      "finance": { "name": "Money & Business", "icon": "💰" },
      "health": { "name": "Health", "icon": "🏥" }
    },
    "tools": {
      "percentage": {
        "name": "Percentage Calculator",
        "description": "Work out percentages with ease",
        "title": "Percentage Calculator - Free Online",
        "metaDescription": "Free percentage calculator that runs in your browser",
        "keywords": "percent, percentage, tax, ratio",
        "searchTerms": "pct",
        "whatIsPercent": "What is",
        "of": "of",
        "percentOf": "percent of",
        "howToUseText": "Enter the numbers and press Calculate"
      },
      "discount": {
        "name": "Discount Calculator",
        "description": "Find the final price after a discount",
        "title": "Discount Calculator - Free Online",
        "metaDescription": "Free discount calculator that runs in your browser",
        "keywords": "discount, sale, price",
        "originalPrice": "Original price",
        "discount": "Discount",
        "finalPrice": "Final price",
        "youSave": "You save"
      },
      "bmi": {
        "name": "BMI Calculator",
        "description": "Calculate your body mass index",
        "title": "BMI Calculator - Free Online",
        "metaDescription": "Free BMI calculator that runs in your browser",
        "keywords": "bmi, body mass index, weight"
      }
    }
  }
}"#
}

/// Fixture fragment template for the percentage tool.
pub fn percentage_template() -> &'static str {
    r#"<div class="tool-container">
  <h1 class="tool-title">{{tool.name}}</h1>
  <p class="tool-description">{{tool.description}}</p>
  <section class="calc-row">
    <h2>{{tool.whatIsPercent}}</h2>
    <label>{{tool.of}}</label>
    <input type="number" class="calc-input" data-validation="{{validationMsg}}">
    <button class="btn-primary" data-action="calculate">{{ui.calculate}}</button>
    <div class="calc-result" data-label="{{ui.result}}"></div>
  </section>
  <section class="howto">
    <h2>{{ui.howToUse}}</h2>
    <p>{{tool.howToUseText}}</p>
  </section>
</div>
"#
}

/// Fixture fragment template for the discount tool.
pub fn discount_template() -> &'static str {
    r#"<div class="tool-container">
  <h1 class="tool-title">{{tool.name}}</h1>
  <section class="calc-row">
    <label>{{tool.originalPrice}}</label>
    <label>{{tool.discount}}</label>
    <button class="btn-primary" data-action="calculate">{{ui.calculate}}</button>
    <div class="calc-result" data-label="{{tool.finalPrice}}" data-save="{{tool.youSave}}"></div>
  </section>
</div>
"#
}

pub fn sample_catalog() -> Catalog {
    serde_json::from_str(sample_tools_json()).unwrap()
}

pub fn sample_translations() -> TranslationCatalog {
    serde_json::from_str(sample_i18n_json()).unwrap()
}

/// UI strings for one fixture language.
pub fn sample_ui(lang: &str) -> UiStrings {
    sample_translations().bundle(lang).unwrap().ui.clone()
}

/// Write the full fixture site to a temp directory and return it.
///
/// Layout matches what the assembler expects:
///
/// ```text
/// <tmp>/
/// ├── config.toml
/// ├── data/i18n.json
/// ├── data/tools.json
/// ├── tools/percentage.html
/// ├── tools/discount.html        (bmi has no template on purpose)
/// └── assets/css/main.css
/// ```
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path());
    tmp
}

/// Write the fixture site into an existing directory.
pub fn write_site(root: &Path) {
    fs::write(
        root.join("config.toml"),
        r#"
base_url = "https://udda.example"
languages = ["ar", "en"]
copyright_year = 2026
"#,
    )
    .unwrap();

    fs::create_dir_all(root.join("data")).unwrap();
    fs::write(root.join("data/tools.json"), sample_tools_json()).unwrap();
    fs::write(root.join("data/i18n.json"), sample_i18n_json()).unwrap();

    fs::create_dir_all(root.join("tools")).unwrap();
    fs::write(root.join("tools/percentage.html"), percentage_template()).unwrap();
    fs::write(root.join("tools/discount.html"), discount_template()).unwrap();

    fs::create_dir_all(root.join("assets/css")).unwrap();
    fs::write(
        root.join("assets/css/main.css"),
        ":root { --accent: #3b82f6; }\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("assets/img")).unwrap();
    fs::write(root.join("assets/img/logo.svg"), "<svg></svg>\n").unwrap();
}
