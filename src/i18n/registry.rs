//! Locale registry: single source of truth for the recognized locales.
//!
//! The registry holds immutable metadata only (codes, display names, which
//! locale is the default). Translation tables live in
//! [`TranslationCatalog`](crate::i18n::TranslationCatalog) and are owned by a
//! [`Localizer`](crate::i18n::Localizer).

use std::sync::OnceLock;

/// Configuration for a recognized locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale tag as used by the host client (e.g., "en-US", "ru")
    pub code: &'static str,

    /// English name shown in option lists (e.g., "English (US)", "Russian")
    pub name: &'static str,

    /// Native name shown in the language selector (e.g., "Русский")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale can be selected
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in selector order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the built-in table does not define exactly one default
    /// locale. This is a programming error in `default_locales`.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is recognized and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Built-in locale set: US English (default) and Russian.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en-US",
            name: "English (US)",
            native_name: "English (US)",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_default: false,
            enabled: true,
        },
    ]
}
