//! Command-line front end for the localization service.
//!
//! Usage:
//!   plugin-i18n translate <KEY> [FALLBACK]   # Resolve a key in the active locale
//!   plugin-i18n languages                    # List selectable languages (* = active)
//!   plugin-i18n validate [LOCALE]            # Check a locale's table (default: active)
//!
//! Optional environment variables:
//! - PLUGIN_I18N_LOCALE (explicit locale, wins over the host locale)
//! - PLUGIN_I18N_HOST_LOCALE_VAR (defaults to DISCORD_LOCALE)
//! - PLUGIN_I18N_USE_SYSTEM_LOCALE (defaults to false)
//! - PLUGIN_I18N_EXTRA_TRANSLATIONS (JSON file of extra tables)

use anyhow::{bail, Result};
use plugin_i18n::config::Config;
use plugin_i18n::i18n::{CatalogValidator, Locale, Localizer};
use plugin_i18n::startup;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plugin_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let provider = startup::signal_provider(&config);
    let localizer = startup::init_localizer(&config, provider.as_ref())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run(&localizer, &args);

    debug!(
        "Lookup metrics: {}",
        serde_json::to_string(&localizer.metrics().report())?
    );
    result
}

fn run(localizer: &Localizer, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("translate") => {
            let Some(key) = args.get(1) else {
                bail!("Usage: plugin-i18n translate <KEY> [FALLBACK]");
            };
            let fallback = args.get(2).map(String::as_str);
            println!("{}", localizer.translate(key, fallback));
        }
        Some("languages") => {
            for line in language_listing(localizer) {
                println!("{}", line);
            }
        }
        Some("validate") => {
            let locale = match args.get(1) {
                Some(code) => Locale::new(code.as_str()),
                None => localizer.locale().clone(),
            };
            let report = CatalogValidator::validate(localizer, &locale);
            for error in &report.errors {
                println!("error: {}", error);
            }
            for warning in &report.warnings {
                println!("warning: {}", warning);
            }
            if report.has_errors() {
                bail!("Validation failed for locale '{}'", locale);
            }
            if report.is_clean() {
                info!("Locale '{}' is clean", locale);
            } else {
                warn!(
                    "Locale '{}' has {} warnings",
                    locale,
                    report.warnings.len()
                );
            }
        }
        Some(other) => bail!("Unknown command: '{}'", other),
        None => bail!("Usage: plugin-i18n <translate|languages|validate> [ARGS]"),
    }
    Ok(())
}

/// Heading, one line per selectable language (`*` marks the active one), then
/// the reload notice.
fn language_listing(localizer: &Localizer) -> Vec<String> {
    let mut lines = vec![localizer.t("LANGUAGE_SELECTION")];
    for (code, native_name, selected) in localizer.language_options() {
        let marker = if selected { "*" } else { " " };
        lines.push(format!("{} {}\t{}", marker, code, native_name));
    }
    lines.push(localizer.t("LANGUAGE_RESTART_DESC"));
    lines
}
