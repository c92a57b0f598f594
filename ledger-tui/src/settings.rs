use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Chart of accounts JSON; the bundled sample chart is used when unset
    #[serde(default)]
    pub chart_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Maximum dropdown height as a percentage of the terminal height
    #[serde(default = "default_dropdown_height_percent")]
    pub dropdown_height_percent: u16,
    #[serde(default = "default_debit_placeholder")]
    pub debit_placeholder: String,
    #[serde(default = "default_credit_placeholder")]
    pub credit_placeholder: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_dropdown_height_percent() -> u16 {
    60
}

fn default_debit_placeholder() -> String {
    "Account to debit".to_string()
}

fn default_credit_placeholder() -> String {
    "Account to credit".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chart_path: None,
            log_level: default_log_level(),
            dropdown_height_percent: default_dropdown_height_percent(),
            debit_placeholder: default_debit_placeholder(),
            credit_placeholder: default_credit_placeholder(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("LEDGER_TUI_CONFIG").unwrap_or_else(|_| "ledger-tui.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("LEDGER_TUI").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Settings from an inline TOML document, without environment overrides
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(10..=100).contains(&self.dropdown_height_percent) {
            return Err("dropdown_height_percent must be between 10 and 100".to_string());
        }
        if self.log_level.trim().is_empty() {
            return Err("log_level must not be empty".to_string());
        }
        Ok(())
    }
}
