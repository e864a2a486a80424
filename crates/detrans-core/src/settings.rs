//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Engines take `&Settings` explicitly; the singleton only backs
//! `Engine::initialize`.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
///
/// Fails with [`SettingsError::AlreadyInitialized`] once `settings()` has run,
/// since the singleton can no longer pick up the new document.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub passthrough: PassthroughSettings,
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassthroughSettings {
    pub markup: bool,
    pub url: bool,
    pub entity: bool,
    pub url_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeSettings {
    pub apostrophe_entity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            passthrough: PassthroughSettings {
                markup: true,
                url: true,
                entity: true,
                url_prefixes: vec!["http://".into(), "https://".into(), "www.".into()],
            },
            normalize: NormalizeSettings {
                apostrophe_entity: true,
            },
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if let Some(i) = s.passthrough.url_prefixes.iter().position(|p| p.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("passthrough.url_prefixes[{i}]"),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
