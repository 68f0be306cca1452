//! User settings for Cashpulse
//!
//! Manages user preferences: currency symbol, the year window accepted by the
//! month/year picker, and the default log level.

use serde::{Deserialize, Serialize};

use super::paths::CashpulsePaths;
use crate::error::CashpulseError;

/// User settings for Cashpulse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Years before and after the current year accepted in month/year mode
    #[serde(default = "default_year_window")]
    pub year_window: i32,

    /// Default tracing filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Largest accepted `year_window`
pub const MAX_YEAR_WINDOW: i32 = 9999;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_year_window() -> i32 {
    20
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            year_window: default_year_window(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashpulsePaths) -> Result<Self, CashpulseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CashpulseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CashpulseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !(0..=MAX_YEAR_WINDOW).contains(&settings.year_window) {
                return Err(CashpulseError::Config(format!(
                    "year_window must be between 0 and {}, got {}",
                    MAX_YEAR_WINDOW, settings.year_window
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashpulsePaths) -> Result<(), CashpulseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CashpulseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            CashpulseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
