//! Translation catalog: per-locale key → text tables.
//!
//! The catalog only grows. Tables are merged key by key and no operation
//! removes a key once registered.

use crate::i18n::{Locale, LocaleRegistry, StringTable};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Translations for a single locale.
pub type TranslationTable = HashMap<String, String>;

/// Mapping from locale to its translation table.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    tables: HashMap<Locale, TranslationTable>,
}

impl Default for TranslationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationCatalog {
    /// Create a catalog with an empty table for every recognized locale.
    pub fn new() -> Self {
        let tables = LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| (Locale::new(config.code), TranslationTable::new()))
            .collect();

        Self { tables }
    }

    /// Merge `entries` into the table for `locale`.
    ///
    /// New values overwrite existing ones for the same key; keys not in
    /// `entries` are kept. Creates the table if the locale has none yet.
    pub fn add_translations<I, K, V>(&mut self, locale: &Locale, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.tables.entry(locale.clone()).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
    }

    /// Merge a built-in table.
    pub fn add_table(&mut self, locale: &Locale, table: StringTable) {
        self.add_translations(locale, table.iter().copied());
    }

    /// Merge a flat JSON object of string values.
    ///
    /// The whole document is parsed before anything is merged, so a
    /// malformed document leaves the catalog unchanged.
    pub fn add_translations_json(&mut self, locale: &Locale, json: &str) -> Result<usize> {
        let entries: TranslationTable = serde_json::from_str(json)
            .with_context(|| format!("Invalid translation table for locale '{}'", locale))?;
        let count = entries.len();
        self.add_translations(locale, entries);
        Ok(count)
    }

    /// Look up the stored text for `key`, treating empty text as missing.
    pub fn get(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.tables
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// The table for `locale`, if one exists.
    pub fn table(&self, locale: &Locale) -> Option<&TranslationTable> {
        self.tables.get(locale)
    }

    /// All locales that have a table, sorted by tag.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.tables.keys().collect();
        locales.sort();
        locales
    }
}
