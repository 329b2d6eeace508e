use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Explicit user choice, applied after bootstrap
    pub locale_override: Option<String>,

    // Host locale signal
    pub host_locale_var: String,
    pub use_system_locale: bool,

    // Extra translation tables (JSON)
    pub extra_translations: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locale_override: std::env::var("PLUGIN_I18N_LOCALE")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            host_locale_var: std::env::var("PLUGIN_I18N_HOST_LOCALE_VAR")
                .unwrap_or_else(|_| "DISCORD_LOCALE".to_string()),
            use_system_locale: match std::env::var("PLUGIN_I18N_USE_SYSTEM_LOCALE") {
                Ok(v) => parse_bool(&v).with_context(|| {
                    format!("PLUGIN_I18N_USE_SYSTEM_LOCALE is not a boolean: '{}'", v)
                })?,
                Err(_) => false,
            },

            extra_translations: std::env::var("PLUGIN_I18N_EXTRA_TRANSLATIONS")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
