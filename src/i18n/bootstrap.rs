//! Startup locale inference from the host application.
//!
//! The host exposes its own active locale through some channel (an
//! environment variable, the OS locale, an embedding API). A
//! [`LocaleSignalProvider`] reads it; [`bootstrap`] applies it if it names a
//! recognized non-default locale and otherwise leaves the localizer alone.

use crate::i18n::{Locale, Localizer};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure to read the host locale signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The host does not expose a locale through this channel
    #[error("host locale signal is unavailable: {0}")]
    Unavailable(String),

    /// The host exposed a value that could not be read
    #[error("host locale signal could not be read: {0}")]
    Unreadable(String),
}

/// Source of the host application's active locale.
pub trait LocaleSignalProvider {
    /// Read the raw locale tag from the host.
    fn read(&self) -> Result<String, SignalError>;
}

/// What bootstrap did with the signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The signal named a recognized non-default locale, which is now current
    Applied(Locale),
    /// The signal was read but did not select a locale; the value is kept for logging
    Ignored(String),
    /// The signal could not be read
    Failed(SignalError),
}

/// Infer the initial locale from `provider`.
///
/// Never fails: an unreadable signal or an unrecognized value leaves the
/// current locale unchanged.
pub fn bootstrap(
    localizer: &mut Localizer,
    provider: &dyn LocaleSignalProvider,
) -> BootstrapOutcome {
    let raw = match provider.read() {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to read host locale, keeping '{}': {}", localizer.locale(), e);
            return BootstrapOutcome::Failed(e);
        }
    };

    match Locale::from_code(raw.trim()) {
        Ok(locale) if !locale.is_default() => {
            info!("Using host locale '{}'", locale);
            localizer.set_locale(locale.clone());
            BootstrapOutcome::Applied(locale)
        }
        _ => {
            debug!(
                "Host locale '{}' does not select a locale, keeping '{}'",
                raw,
                localizer.locale()
            );
            BootstrapOutcome::Ignored(raw)
        }
    }
}

// ==================== Providers ====================

/// Provider returning a fixed result.
#[derive(Debug, Clone)]
pub struct StaticSignal(Result<String, SignalError>);

impl StaticSignal {
    /// A signal that always reads `tag`.
    pub fn value(tag: impl Into<String>) -> Self {
        Self(Ok(tag.into()))
    }

    /// A signal that always fails with `error`.
    pub fn failing(error: SignalError) -> Self {
        Self(Err(error))
    }
}

impl LocaleSignalProvider for StaticSignal {
    fn read(&self) -> Result<String, SignalError> {
        self.0.clone()
    }
}

/// Provider reading the host locale from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvSignal {
    var: String,
}

impl EnvSignal {
    /// Read from the environment variable `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl LocaleSignalProvider for EnvSignal {
    fn read(&self) -> Result<String, SignalError> {
        match std::env::var(&self.var) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => {
                Err(SignalError::Unavailable(format!("{} is not set", self.var)))
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(SignalError::Unreadable(format!("{} is not valid unicode", self.var)))
            }
        }
    }
}

/// Provider reading the operating system's user locale.
///
/// Only the messages category counts; time, numeric and monetary overrides
/// do not pick the interface language. POSIX and BCP 47 spellings are
/// normalized to the host's tags, so `ru_RU.UTF-8` reads as `ru` and `en_US`
/// reads as `en-US`.
#[derive(Debug, Clone, Default)]
pub struct SystemSignal;

impl SystemSignal {
    /// Pick the interface tag out of an OS locale description.
    pub fn messages_tag(locale: &locale_config::Locale) -> Result<String, SignalError> {
        locale
            .tags_for("messages")
            .find_map(|tag| normalize_tag(tag.as_ref()))
            .ok_or_else(|| SignalError::Unavailable("no usable OS locale".to_string()))
    }
}

impl LocaleSignalProvider for SystemSignal {
    fn read(&self) -> Result<String, SignalError> {
        Self::messages_tag(&locale_config::Locale::user_default())
    }
}

/// Map an OS locale spelling onto a host tag.
///
/// Returns `None` for empty input. Languages other than English and Russian
/// are passed through lowercased so bootstrap can report them.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let mut normalized = raw
        .trim()
        .split('=')
        .next_back()
        .unwrap_or(raw)
        .replace('_', "-")
        .to_ascii_lowercase();

    if let Some(idx) = normalized.find('@') {
        normalized.truncate(idx);
    }
    if let Some(idx) = normalized.find('.') {
        normalized.truncate(idx);
    }

    if normalized.is_empty() || normalized == "c" || normalized == "posix" {
        return None;
    }

    if normalized == "ru" || normalized.starts_with("ru-") {
        return Some(Locale::RU.code().to_string());
    }
    if normalized == "en" || normalized.starts_with("en-") {
        return Some(Locale::EN_US.code().to_string());
    }

    Some(normalized)
}
