//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Amount-in-words configuration.
    #[serde(default)]
    pub amount_words: AmountWordsConfig,
    /// Report housekeeping configuration.
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Amount-in-words configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountWordsConfig {
    /// Currency code used when the caller does not supply one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for AmountWordsConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "VND".to_string()
}

/// Report housekeeping configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Draft reports older than this many days are cleaned up.
    #[serde(default = "default_draft_retention_days")]
    pub draft_retention_days: u32,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            draft_retention_days: default_draft_retention_days(),
        }
    }
}

fn default_draft_retention_days() -> u32 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ERPVN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
