//! Internationalization (i18n) module.
//!
//! A small localization service: per-locale translation tables, a current
//! locale, and a lookup that falls back from the current locale to the
//! default locale, then to caller-supplied text, then to the key itself.
//!
//! # Architecture
//!
//! - `registry`: Recognized locales and their metadata
//! - `locale`: The `Locale` identifier type
//! - `catalog`: Per-locale translation tables with additive merge
//! - `strings`: Built-in core UI and plugin string tables
//! - `localizer`: The context object tying state, tables and lookup together
//! - `bootstrap`: Startup locale inference from the host application
//! - `validator`: Translation table quality checks
//! - `metrics`: Lookup resolution counters
//!
//! # Example
//!
//! ```rust
//! use plugin_i18n::i18n::{bootstrap, Locale, Localizer, StaticSignal};
//!
//! let mut localizer = Localizer::new();
//! localizer.add_translations(&Locale::EN_US, [("HELLO", "Hello")]);
//! localizer.add_translations(&Locale::RU, [("BYE", "Пока")]);
//!
//! bootstrap(&mut localizer, &StaticSignal::value("ru"));
//! assert_eq!(localizer.t("BYE"), "Пока");
//! assert_eq!(localizer.t("HELLO"), "Hello");
//! assert_eq!(localizer.t("MISSING"), "MISSING");
//! ```

mod bootstrap;
mod catalog;
mod locale;
mod localizer;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use bootstrap::{
    bootstrap, normalize_tag, BootstrapOutcome, EnvSignal, LocaleSignalProvider, SignalError,
    StaticSignal, SystemSignal,
};
pub use catalog::{TranslationCatalog, TranslationTable};
pub use locale::Locale;
pub use localizer::Localizer;
pub use metrics::{LookupMetrics, MetricsReport, Resolution};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{StringTable, EN_US_CORE_STRINGS, RU_CORE_STRINGS, RU_PLUGIN_STRINGS};
pub use validator::{CatalogValidator, ValidationReport};
