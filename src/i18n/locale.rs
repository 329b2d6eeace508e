//! Locale type: an identifier for a translation variant.
//!
//! A `Locale` can hold any tag. Recognized tags are the ones listed in the
//! [`LocaleRegistry`]; anything else is carried through unchanged and simply
//! has no translations of its own.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::borrow::Cow;
use std::fmt;

/// A locale tag such as `"en-US"` or `"ru"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    code: Cow<'static, str>,
}

impl Locale {
    /// US English, the default locale.
    pub const EN_US: Locale = Locale {
        code: Cow::Borrowed("en-US"),
    };

    /// Russian.
    pub const RU: Locale = Locale {
        code: Cow::Borrowed("ru"),
    };

    /// Create a locale from any tag without validation.
    ///
    /// Unknown tags are accepted; lookups under them fall through to the
    /// default locale.
    pub fn new(code: impl Into<String>) -> Locale {
        let code = code.into();
        match LocaleRegistry::get().get_by_code(&code) {
            Some(config) => Locale {
                code: Cow::Borrowed(config.code),
            },
            None => Locale {
                code: Cow::Owned(code),
            },
        }
    }

    /// Create a locale from a recognized, enabled code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the registry and enabled
    /// * `Err` if the code is unknown or disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();
        let Some(config) = registry.get_by_code(code) else {
            bail!("Unknown locale code: '{}'", code);
        };
        if !registry.is_enabled(code) {
            bail!("Locale '{}' is not enabled", code);
        }
        Ok(Locale {
            code: Cow::Borrowed(config.code),
        })
    }

    /// The default locale (the final stop before the caller's fallback).
    pub fn default_locale() -> Locale {
        Locale {
            code: Cow::Borrowed(LocaleRegistry::get().default_locale().code),
        }
    }

    /// The locale tag.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Registry metadata, if this locale is recognized.
    pub fn config(&self) -> Option<&'static LocaleConfig> {
        LocaleRegistry::get().get_by_code(&self.code)
    }

    /// Whether this locale is listed in the registry.
    pub fn is_recognized(&self) -> bool {
        self.config().is_some()
    }

    /// Whether this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().map(|c| c.is_default).unwrap_or(false)
    }

    /// Native display name, or the raw tag for unrecognized locales.
    pub fn native_name(&self) -> &str {
        match self.config() {
            Some(config) => config.native_name,
            None => self.code(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Locale::new(code)
    }
}
