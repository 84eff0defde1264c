//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::MoneyFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Snapshot source configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Report presentation configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Snapshot source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the JSON transaction snapshot.
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

/// Report presentation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Label shown for records without a division.
    #[serde(default = "default_unassigned_label")]
    pub unassigned_label: String,
    /// Currency symbol used when formatting amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Hide divisions without activity in breakdowns.
    #[serde(default)]
    pub active_only: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unassigned_label: default_unassigned_label(),
            currency_symbol: default_currency_symbol(),
            active_only: false,
        }
    }
}

fn default_unassigned_label() -> String {
    "Unassigned".to_string()
}

fn default_currency_symbol() -> String {
    "Rp".to_string()
}

impl ReportConfig {
    /// Money format derived from the configured currency symbol.
    #[must_use]
    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat::with_symbol(self.currency_symbol.clone())
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BENDAHARA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
