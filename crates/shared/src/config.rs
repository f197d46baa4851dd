//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Formatting defaults.
    #[serde(default)]
    pub format: FormatSettings,
}

/// Formatting defaults applied when the caller leaves them out.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatSettings {
    /// Currency used when none is given.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Locale override. `None` means use the environment's default locale.
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            locale: None,
        }
    }
}

fn default_currency() -> String {
    crate::types::currency::DEFAULT_CURRENCY.to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Loads `default` and `{RUN_MODE}` files from `dir`, then `MONEYFMT__*`
    /// environment overrides. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed or values do not deserialize.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        config::Config::builder()
            .add_source(file("default"))
            .add_source(file(&run_mode))
            .add_source(config::Environment::with_prefix("MONEYFMT").separator("__"))
            .build()?
            .try_deserialize()
    }
}
