//! User settings for FinanceHub
//!
//! Display preferences, insight thresholds and diagnostics. Every field has a
//! default so a partial or missing settings file still loads.

use serde::{Deserialize, Serialize};

use super::paths::FinanceHubPaths;
use crate::error::FinanceError;

/// Savings-rate thresholds used by the insight rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Rates above this produce a positive insight
    #[serde(default = "default_high_savings_rate")]
    pub high_savings_rate: f64,

    /// Rates below this produce a warning
    #[serde(default = "default_low_savings_rate")]
    pub low_savings_rate: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            high_savings_rate: default_high_savings_rate(),
            low_savings_rate: default_low_savings_rate(),
        }
    }
}

/// User settings for FinanceHub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many expenses the dashboard's recent list shows
    #[serde(default = "default_recent_expense_limit")]
    pub recent_expense_limit: usize,

    #[serde(default)]
    pub insights: InsightThresholds,

    /// Mirror the audit trail to `audit.log` in the config directory
    #[serde(default)]
    pub audit_log: bool,

    /// Tracing filter used when `FINANCEHUB_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    crate::models::money::DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_expense_limit() -> usize {
    10
}

fn default_high_savings_rate() -> f64 {
    30.0
}

fn default_low_savings_rate() -> f64 {
    10.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_expense_limit: default_recent_expense_limit(),
            insights: InsightThresholds::default(),
            audit_log: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinanceHubPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanceHubPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured date format
    pub fn format_date(&self, date: chrono::NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.recent_expense_limit, 10);
        assert_eq!(settings.insights.high_savings_rate, 30.0);
        assert_eq!(settings.insights.low_savings_rate, 10.0);
        assert!(!settings.audit_log);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.insights.high_savings_rate = 25.0;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.insights.high_savings_rate, 25.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"insights": {"low_savings_rate": 5}}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.insights.low_savings_rate, 5.0);
        assert_eq!(loaded.insights.high_savings_rate, 30.0);
        assert_eq!(loaded.recent_expense_limit, 10);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }

    #[test]
    fn test_format_helpers() {
        let mut settings = Settings::default();
        settings.date_format = "%d/%m/%Y".into();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

        assert_eq!(settings.format_date(date), "09/03/2025");
        assert_eq!(settings.format_money(Money::from_units(1500)), "₹1,500.00");
    }
}
