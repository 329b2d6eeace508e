//! Catalog quality validation.
//!
//! Checks a locale's table against its source text. For each key the source
//! is the default locale's text, or the key itself when the default locale
//! has none (plugin strings are keyed by their English text).

use crate::i18n::{Locale, Localizer};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems
    pub errors: Vec<String>,

    /// Non-critical issues
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

/// Validator for translation tables.
pub struct CatalogValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static TERMINAL_PUNCT_REGEX: OnceLock<Regex> = OnceLock::new();
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate every entry of `locale`'s table in `localizer`.
    ///
    /// Errors:
    /// - the locale has no table at all
    ///
    /// Warnings (sorted by key):
    /// - empty text (the lookup falls through to the default locale)
    /// - URLs that differ from the source text
    /// - terminal punctuation (`.`, `!`, `?`, `:`, `...`) that differs from the source
    ///
    /// Default-locale entries keyed by an identifier have no source and are
    /// not compared.
    pub fn validate(localizer: &Localizer, locale: &Locale) -> ValidationReport {
        let mut report = ValidationReport::new();
        let catalog = localizer.catalog();

        let Some(table) = catalog.table(locale) else {
            report
                .errors
                .push(format!("No translation table for locale '{}'", locale));
            return report;
        };

        let default = localizer.default_locale();
        let mut keys: Vec<&String> = table.keys().collect();
        keys.sort();

        for key in keys {
            let text = &table[key];
            if text.is_empty() {
                report
                    .warnings
                    .push(format!("Empty text for '{}' falls back to the default locale", key));
                continue;
            }

            let source = if locale == default {
                None
            } else {
                catalog.get(default, key)
            };
            if let Some(source) = source.or_else(|| Self::source_text(key)) {
                report.warnings.extend(Self::compare(key, source, text));
            }
        }

        report
    }

    /// Compare a single translation against its source text.
    pub fn compare(key: &str, source: &str, translated: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let source_urls = Self::extract_urls(source);
        let translated_urls = Self::extract_urls(translated);
        if source_urls != translated_urls {
            warnings.push(format!(
                "URL mismatch for '{}': source has {:?}, translation has {:?}",
                key, source_urls, translated_urls
            ));
        }

        let source_punct = Self::terminal_punctuation(source);
        let translated_punct = Self::terminal_punctuation(translated);
        if source_punct != translated_punct {
            warnings.push(format!(
                "Terminal punctuation mismatch for '{}': source ends with {:?}, translation ends with {:?}",
                key, source_punct, translated_punct
            ));
        }

        warnings
    }

    /// Source text for a key with no default-locale entry.
    ///
    /// SCREAMING_CASE identifiers carry no prose and are not compared.
    fn source_text(key: &str) -> Option<&str> {
        let regex = KEY_REGEX.get_or_init(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());
        if regex.is_match(key) {
            None
        } else {
            Some(key)
        }
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Trailing sentence punctuation, if any
    fn terminal_punctuation(text: &str) -> Option<String> {
        let regex = TERMINAL_PUNCT_REGEX
            .get_or_init(|| Regex::new(r"(\.\.\.|…|[.!?:])\s*$").unwrap());

        regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().replace('…', "..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_urls() {
        let urls =
            CatalogValidator::extract_urls("Get a key at https://www.deepl.com/pro-api today");
        assert_eq!(urls, vec!["https://www.deepl.com/pro-api"]);
    }

    #[test]
    fn test_terminal_punctuation() {
        assert_eq!(
            CatalogValidator::terminal_punctuation("Update available!"),
            Some("!".to_string())
        );
        assert_eq!(
            CatalogValidator::terminal_punctuation("Checking for updates..."),
            Some("...".to_string())
        );
        assert_eq!(
            CatalogValidator::terminal_punctuation("Поиск…"),
            Some("...".to_string())
        );
        assert_eq!(CatalogValidator::terminal_punctuation("Play"), None);
    }

    #[test]
    fn test_source_text_for_identifier_keys() {
        assert_eq!(CatalogValidator::source_text("UPDATE_AVAILABLE"), None);
        assert_eq!(CatalogValidator::source_text("Clear Log"), Some("Clear Log"));
    }

    // ==================== Compare Tests ====================

    #[test]
    fn test_compare_clean() {
        let warnings = CatalogValidator::compare(
            "k",
            "You can't access this channel.",
            "Вы не можете получить доступ к этому каналу.",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_compare_dropped_punctuation() {
        let warnings = CatalogValidator::compare("k", "Update complete!", "Обновление завершено");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Terminal punctuation mismatch"));
    }

    #[test]
    fn test_compare_dropped_url() {
        let warnings = CatalogValidator::compare("k", "See https://example.com", "Смотрите сайт");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("URL mismatch"));
    }

    // ==================== Validate Tests ====================

    #[test]
    fn test_validate_builtin_russian_is_clean() {
        let localizer = Localizer::with_builtin_tables();
        let report = CatalogValidator::validate(&localizer, &Locale::RU);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_builtin_english_is_clean() {
        let localizer = Localizer::with_builtin_tables();
        let report = CatalogValidator::validate(&localizer, &Locale::EN_US);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_reports_empty_text() {
        let mut localizer = Localizer::new();
        localizer.add_translations(&Locale::RU, [("Play", "")]);

        let report = CatalogValidator::validate(&localizer, &Locale::RU);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Empty text for 'Play'"));
    }

    #[test]
    fn test_validate_uses_default_locale_source() {
        let mut localizer = Localizer::new();
        localizer.add_translations(&Locale::EN_US, [("UPDATE_COMPLETE", "Update complete!")]);
        localizer.add_translations(&Locale::RU, [("UPDATE_COMPLETE", "Обновление завершено")]);

        let report = CatalogValidator::validate(&localizer, &Locale::RU);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("UPDATE_COMPLETE"));
    }

    #[test]
    fn test_validate_missing_table_is_error() {
        let localizer = Localizer::new();
        let report = CatalogValidator::validate(&localizer, &Locale::new("de"));
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
