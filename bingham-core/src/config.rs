//! Configuration management
//!
//! Optional settings.json in the bank directory:
//! ```json
//! {
//!   "app": { "loggingEnabled": true, "currencySymbol": "$" }
//! }
//! ```
//! Account policy (bonus rates, limits) is fixed and not configurable.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `app.loggingEnabled`
pub const LOGGING_ENV_VAR: &str = "BINGHAM_LOGGING";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_logging_enabled")]
    logging_enabled: bool,
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            logging_enabled: default_logging_enabled(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_logging_enabled() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Bank configuration (simplified view of settings)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub logging_enabled: bool,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        let app = AppSettings::default();
        Self {
            logging_enabled: app.logging_enabled,
            currency_symbol: app.currency_symbol,
        }
    }
}

impl Config {
    /// Load config from the bank directory
    ///
    /// A missing or malformed settings file falls back to defaults. Logging
    /// can be switched with BINGHAM_LOGGING regardless of the file.
    pub fn load(bank_dir: &Path) -> Result<Self> {
        let env_logging = std::env::var(LOGGING_ENV_VAR).ok();
        Self::load_with_env(bank_dir, env_logging.as_deref())
    }

    /// Load config from the bank directory with an explicit logging override
    pub(crate) fn load_with_env(bank_dir: &Path, env_logging: Option<&str>) -> Result<Self> {
        let settings_path = bank_dir.join("settings.json");

        let content = if settings_path.exists() {
            Some(std::fs::read_to_string(&settings_path)?)
        } else {
            None
        };

        Ok(Self::from_parts(content.as_deref(), env_logging))
    }

    fn from_parts(settings_json: Option<&str>, env_logging: Option<&str>) -> Self {
        let raw: SettingsFile = settings_json
            .and_then(|content| serde_json::from_str(content).ok())
            .unwrap_or_default();

        let logging_enabled = match env_logging {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.logging_enabled,
        };

        Self {
            logging_enabled,
            currency_symbol: raw.app.currency_symbol,
        }
    }
}
