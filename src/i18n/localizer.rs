//! The localization context: current locale, translation tables and lookup.
//!
//! # Fallback chain
//!
//! `translate(key, fallback)` returns the first non-empty hit from:
//!
//! 1. the current locale's table
//! 2. the default locale's table
//! 3. `fallback`, if supplied
//! 4. `key` itself
//!
//! An empty stored value counts as missing. Keys double as readable text, so
//! an untranslated key is still presentable.

use crate::i18n::metrics::{LookupMetrics, Resolution};
use crate::i18n::strings::{EN_US_CORE_STRINGS, RU_CORE_STRINGS, RU_PLUGIN_STRINGS};
use crate::i18n::{Locale, LocaleRegistry, TranslationCatalog};
use anyhow::Result;
use tracing::debug;

/// An isolated localization context.
///
/// Owns the translation catalog and the current locale. Construct one at
/// startup and pass it by reference to consumers.
#[derive(Debug)]
pub struct Localizer {
    catalog: TranslationCatalog,
    current: Locale,
    default: Locale,
    metrics: LookupMetrics,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer {
    /// Create a localizer with empty tables, set to the default locale.
    pub fn new() -> Self {
        let default = Locale::default_locale();
        Self {
            catalog: TranslationCatalog::new(),
            current: default.clone(),
            default,
            metrics: LookupMetrics::new(),
        }
    }

    /// Create a localizer seeded with the built-in core and plugin strings.
    pub fn with_builtin_tables() -> Self {
        let mut localizer = Self::new();
        localizer
            .catalog
            .add_table(&Locale::EN_US, EN_US_CORE_STRINGS);
        localizer.catalog.add_table(&Locale::RU, RU_CORE_STRINGS);
        localizer.catalog.add_table(&Locale::RU, RU_PLUGIN_STRINGS);
        localizer
    }

    // ==================== Locale State ====================

    /// The current locale.
    pub fn locale(&self) -> &Locale {
        &self.current
    }

    /// The default locale.
    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// Overwrite the current locale.
    ///
    /// Unrecognized locales are accepted; every lookup under them falls
    /// through to the default locale. Already-rendered text is not updated,
    /// consumers must reload.
    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        let locale = locale.into();
        if !locale.is_recognized() {
            debug!("Setting unrecognized locale '{}'", locale);
        }
        self.current = locale;
    }

    // ==================== Registration ====================

    /// Merge translations into `locale`'s table (new values win).
    pub fn add_translations<I, K, V>(&mut self, locale: &Locale, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.catalog.add_translations(locale, entries);
    }

    /// Merge a flat JSON object of translations into `locale`'s table.
    ///
    /// Returns the number of entries merged.
    pub fn add_translations_json(&mut self, locale: &Locale, json: &str) -> Result<usize> {
        self.catalog.add_translations_json(locale, json)
    }

    /// Read-only access to the catalog.
    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    // ==================== Lookup ====================

    /// Resolve `key` through the fallback chain.
    pub fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        let (text, resolution) = self.resolve(key, fallback);
        self.metrics.record(resolution);
        text.to_string()
    }

    /// Shorthand for `translate(key, None)`.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None)
    }

    fn resolve<'a>(&'a self, key: &'a str, fallback: Option<&'a str>) -> (&'a str, Resolution) {
        if let Some(text) = self.catalog.get(&self.current, key) {
            return (text, Resolution::Current);
        }
        if let Some(text) = self.catalog.get(&self.default, key) {
            return (text, Resolution::Default);
        }
        match fallback {
            Some(text) => (text, Resolution::Fallback),
            None => (key, Resolution::Key),
        }
    }

    // ==================== Presentation ====================

    /// Language selector options as `(code, native name, selected)`.
    pub fn language_options(&self) -> Vec<(&'static str, &'static str, bool)> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| {
                (
                    config.code,
                    config.native_name,
                    config.code == self.current.code(),
                )
            })
            .collect()
    }

    /// Lookup statistics for this localizer.
    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}
