//! Startup wiring: build a ready-to-use [`Localizer`] from [`Config`].
//!
//! Order matters. Built-in tables go in first, then extra tables from disk,
//! then bootstrap from the host signal, and the explicit user locale last so
//! it always wins over the inferred one.

use crate::config::Config;
use crate::i18n::{
    bootstrap, BootstrapOutcome, EnvSignal, Locale, LocaleSignalProvider, Localizer, SystemSignal,
    TranslationTable,
};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Build a localizer for `config`, reading the host signal from `provider`.
pub fn init_localizer(config: &Config, provider: &dyn LocaleSignalProvider) -> Result<Localizer> {
    let mut localizer = Localizer::with_builtin_tables();

    if let Some(path) = &config.extra_translations {
        let count = load_translation_file(&mut localizer, path)?;
        info!("Loaded {} translations from {}", count, path.display());
    }

    if let BootstrapOutcome::Applied(locale) = bootstrap(&mut localizer, provider) {
        info!("Bootstrapped locale: {}", locale);
    }

    if let Some(code) = &config.locale_override {
        localizer.set_locale(Locale::new(code.trim()));
        info!("Using configured locale: {}", localizer.locale());
    }

    Ok(localizer)
}

/// The host signal provider selected by `config`.
pub fn signal_provider(config: &Config) -> Box<dyn LocaleSignalProvider> {
    if config.use_system_locale {
        Box::new(SystemSignal)
    } else {
        Box::new(EnvSignal::new(config.host_locale_var.clone()))
    }
}

/// Merge a JSON file of `{ "<locale>": { "<key>": "<text>" } }` into `localizer`.
///
/// The file is fully parsed before anything is merged. Returns the number of
/// entries merged across all locales.
pub fn load_translation_file(localizer: &mut Localizer, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read translations file {}", path.display()))?;
    let tables: HashMap<String, TranslationTable> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid translations file {}", path.display()))?;

    let mut count = 0;
    for (code, table) in tables {
        count += table.len();
        localizer.add_translations(&Locale::new(code), table);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{SignalError, StaticSignal};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config() -> Config {
        Config {
            locale_override: None,
            host_locale_var: "DISCORD_LOCALE".to_string(),
            use_system_locale: false,
            extra_translations: None,
        }
    }

    fn write_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("translations.json");
        std::fs::write(&path, content).expect("Failed to write translations");
        path
    }

    // ==================== init_localizer Tests ====================

    #[test]
    fn test_init_defaults_to_english() {
        let localizer = init_localizer(
            &config(),
            &StaticSignal::failing(SignalError::Unavailable("none".to_string())),
        )
        .expect("init should succeed");

        assert_eq!(localizer.locale(), &Locale::EN_US);
        assert_eq!(localizer.t("UPDATE_CHECK"), "Check for updates");
    }

    #[test]
    fn test_init_bootstraps_from_host() {
        let localizer =
            init_localizer(&config(), &StaticSignal::value("ru")).expect("init should succeed");

        assert_eq!(localizer.locale(), &Locale::RU);
        assert_eq!(localizer.t("UPDATE_CHECK"), "Проверить обновления");
    }

    #[test]
    fn test_override_wins_over_host() {
        let mut config = config();
        config.locale_override = Some("en-US".to_string());

        let localizer =
            init_localizer(&config, &StaticSignal::value("ru")).expect("init should succeed");
        assert_eq!(localizer.locale(), &Locale::EN_US);
    }

    #[test]
    fn test_override_accepts_unknown_locale() {
        let mut config = config();
        config.locale_override = Some("de".to_string());

        let localizer =
            init_localizer(&config, &StaticSignal::value("ru")).expect("init should succeed");
        assert_eq!(localizer.locale().code(), "de");
        assert_eq!(localizer.t("PLUGINS_ENABLED"), "Enabled");
    }

    #[test]
    fn test_init_with_extra_translations() {
        let dir = TempDir::new().expect("tempdir");
        let mut config = config();
        config.extra_translations = Some(write_file(
            &dir,
            r#"{"ru": {"Play": "Играть"}, "de": {"Play": "Abspielen"}}"#,
        ));
        config.locale_override = Some("de".to_string());

        let localizer =
            init_localizer(&config, &StaticSignal::value("ru")).expect("init should succeed");
        assert_eq!(localizer.t("Play"), "Abspielen");
        assert_eq!(
            localizer.catalog().get(&Locale::RU, "Play"),
            Some("Играть")
        );
    }

    #[test]
    fn test_init_fails_on_missing_file() {
        let mut config = config();
        config.extra_translations = Some(PathBuf::from("/nonexistent/translations.json"));

        let result = init_localizer(&config, &StaticSignal::value("ru"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    // ==================== load_translation_file Tests ====================

    #[test]
    fn test_load_translation_file_counts_entries() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, r#"{"ru": {"a": "1", "b": "2"}, "en-US": {"c": "3"}}"#);

        let mut localizer = Localizer::new();
        let count = load_translation_file(&mut localizer, &path).expect("should load");
        assert_eq!(count, 3);
        assert_eq!(localizer.t("c"), "3");
    }

    #[test]
    fn test_load_translation_file_invalid_leaves_catalog() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, r#"{"ru": {"a": "1"}, "de": ["not", "a", "table"]}"#);

        let mut localizer = Localizer::new();
        let result = load_translation_file(&mut localizer, &path);
        assert!(result.is_err());
        assert!(localizer.catalog().table(&Locale::RU).unwrap().is_empty());
    }

    // ==================== signal_provider Tests ====================

    #[test]
    #[serial_test::serial]
    fn test_signal_provider_env() {
        let mut config = config();
        config.host_locale_var = "PLUGIN_I18N_TEST_PROVIDER_VAR".to_string();
        std::env::set_var("PLUGIN_I18N_TEST_PROVIDER_VAR", "ru");

        let result = signal_provider(&config).read();
        std::env::remove_var("PLUGIN_I18N_TEST_PROVIDER_VAR");
        assert_eq!(result, Ok("ru".to_string()));
    }
}
