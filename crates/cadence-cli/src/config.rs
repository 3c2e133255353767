use cadence_core::models::DEFAULT_LIST_LIMIT;
use cadence_core::recurrence::{SchedulerConfig, DEFAULT_SCAN_HORIZON_YEARS};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

const CONFIG_FILE: &str = "cadence.toml";
const ENV_PREFIX: &str = "CADENCE_";
const DEFAULT_DATABASE_PATH: &str = "scheduler.db";

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Maximum tasks shown by `list`
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
    #[serde(default)]
    pub recurrence: RecurrenceConfig,
}

/// Recurrence engine settings
#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct RecurrenceConfig {
    /// Years a monthly rule is searched ahead before giving up
    #[serde(default = "default_scan_horizon_years")]
    pub scan_horizon_years: u32,
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

fn default_list_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

fn default_scan_horizon_years() -> u32 {
    DEFAULT_SCAN_HORIZON_YEARS
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            scan_horizon_years: default_scan_horizon_years(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            list_limit: default_list_limit(),
            recurrence: RecurrenceConfig::default(),
        }
    }
}

impl Config {
    /// Loads `cadence.toml` from the working directory, then `CADENCE_*`
    /// environment variables. Nested keys use `__`, e.g.
    /// `CADENCE_RECURRENCE__SCAN_HORIZON_YEARS`.
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            scan_horizon_years: self.recurrence.scan_horizon_years,
        }
    }
}
