//! Translation coverage validation.
//!
//! Walks a raw page document, finds every localized field regardless of its
//! shape, and reports missing translations, duplicate entries and malformed
//! language tags. Unknown section kinds are reported as errors because the
//! renderer drops them.

use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::i18n::field::WRAPPED_TYPE_PREFIX;
use crate::i18n::resolve::Truthy;
use crate::i18n::LanguageRegistry;
use crate::sections::{Section, SectionError};

/// Validation report containing errors and warnings about a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that change what renders (dropped sections)
    pub errors: Vec<String>,

    /// Translation gaps and data-quality issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals over every page checked in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageSummary {
    pub pages: usize,
    pub failing_pages: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl CoverageSummary {
    /// Add one page's report to the totals.
    pub fn record(&mut self, report: &ValidationReport) {
        self.pages += 1;
        if report.has_errors() {
            self.failing_pages += 1;
        }
        self.errors += report.errors.len();
        self.warnings += report.warnings.len();
    }

    /// Message for a failed run, `None` when no page has errors.
    pub fn failure(&self) -> Option<String> {
        (self.failing_pages > 0).then(|| {
            format!(
                "{} of {} pages contain errors ({} errors)",
                self.failing_pages, self.pages, self.errors
            )
        })
    }
}

/// Validator for translation coverage.
pub struct TranslationValidator;

// Tag shapes (cached)
static LANGUAGE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static CANDIDATE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// A localized field found in a raw document.
struct FoundField<'a> {
    /// `(language tag, value)` pairs in document order
    entries: Vec<(&'a str, &'a Value)>,
    /// Whether duplicates are possible (array shapes)
    ordered: bool,
}

impl TranslationValidator {
    /// Validate a raw page document.
    ///
    /// # Returns
    /// A `ValidationReport`; warnings name the JSON path of each field.
    pub fn validate_page(page: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Some(sections) = page.get("sections").and_then(Value::as_array) {
            // Same classification the renderer uses, so every error is a dropped section
            for (index, section) in sections.iter().enumerate() {
                match Section::from_value(section) {
                    Ok(_) => {}
                    Err(SectionError::UnknownKind(tag)) => report
                        .errors
                        .push(format!("sections[{index}]: unknown section type '{tag}'")),
                    Err(SectionError::MissingKind) => report
                        .errors
                        .push(format!("sections[{index}]: missing section type")),
                }
            }
        }

        Self::walk(page, "$", &mut report);
        report
    }

    /// Check that a language tag looks like `en` or `pt_BR`.
    pub fn is_valid_language_tag(tag: &str) -> bool {
        let regex = LANGUAGE_TAG_REGEX
            .get_or_init(|| Regex::new(r"^[a-z]{2}(_[A-Z]{2})?$").expect("valid regex"));
        regex.is_match(tag)
    }

    fn walk(value: &Value, path: &str, report: &mut ValidationReport) {
        if let Some(field) = Self::find_field(value) {
            Self::check_field(&field, path, report);
            return;
        }

        match value {
            Value::Object(obj) => {
                for (key, child) in obj {
                    Self::walk(child, &format!("{path}.{key}"), report);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    Self::walk(child, &format!("{path}[{index}]"), report);
                }
            }
            _ => {}
        }
    }

    fn check_field(field: &FoundField<'_>, path: &str, report: &mut ValidationReport) {
        let mut seen = HashSet::new();
        for (tag, _) in &field.entries {
            if !Self::is_valid_language_tag(tag) {
                report
                    .warnings
                    .push(format!("{path}: malformed language tag '{tag}'"));
            }
            if field.ordered && !seen.insert(*tag) {
                report
                    .warnings
                    .push(format!("{path}: duplicate entries for '{tag}'"));
            }
        }

        for lang in LanguageRegistry::get().list_enabled() {
            // First entry per language is the one the resolver uses
            let value = field
                .entries
                .iter()
                .find(|(tag, _)| *tag == lang.code)
                .map(|(_, value)| *value);
            if !value.is_some_and(Truthy::is_truthy) {
                report
                    .warnings
                    .push(format!("{path}: missing {} translation", lang.code));
            }
        }
    }

    fn find_field(value: &Value) -> Option<FoundField<'_>> {
        match value {
            Value::Array(items) => Self::array_entries(items).map(|entries| FoundField {
                entries,
                ordered: true,
            }),
            Value::Object(obj) => {
                let is_wrapper = obj
                    .get("_type")
                    .and_then(Value::as_str)
                    .is_some_and(|t| t.starts_with(WRAPPED_TYPE_PREFIX));
                if is_wrapper {
                    if let Some(Value::Array(items)) = obj.get("value") {
                        return Some(FoundField {
                            entries: Self::array_entries(items).unwrap_or_default(),
                            ordered: true,
                        });
                    }
                }
                Self::record_entries(obj).map(|entries| FoundField {
                    entries,
                    ordered: false,
                })
            }
            _ => None,
        }
    }

    fn array_entries(items: &[Value]) -> Option<Vec<(&str, &Value)>> {
        if items.is_empty() {
            return None;
        }

        items
            .iter()
            .map(|item| {
                let obj = item.as_object()?;
                obj.get("value")?;
                let tag = match obj.get("language").and_then(Value::as_str) {
                    Some(language) => language,
                    None => obj
                        .get("_key")
                        .and_then(Value::as_str)
                        .filter(|key| Self::is_candidate_tag(key))?,
                };
                Some((tag, &obj["value"]))
            })
            .collect()
    }

    fn record_entries(obj: &Map<String, Value>) -> Option<Vec<(&str, &Value)>> {
        let entries: Vec<_> = obj
            .iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .collect();

        let looks_localized = !entries.is_empty()
            && entries.iter().all(|(key, value)| {
                Self::is_candidate_tag(key) && (value.is_string() || value.is_null())
            });

        looks_localized.then(|| {
            entries
                .into_iter()
                .map(|(key, value)| (key.as_str(), value))
                .collect()
        })
    }

    /// Loose tag shape used to recognise localized records before validating.
    fn is_candidate_tag(key: &str) -> bool {
        let regex = CANDIDATE_TAG_REGEX
            .get_or_init(|| Regex::new(r"^[a-zA-Z]{2}([_-][a-zA-Z]{2})?$").expect("valid regex"));
        regex.is_match(key)
    }
}
