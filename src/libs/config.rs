//! Configuration management for the clockin application.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the platform
//! data directory resolved by [`DataStorage`]. Every section is optional: a
//! missing file or section means defaults, so the tracker works with no setup
//! at all and the remote attendance log is simply skipped.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use clockin::libs::config::Config;
//!
//! let config = Config::read()?;
//! let interval = config.ticker.unwrap_or_default().interval();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Remote attendance log connection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the attendance API, e.g. `http://localhost:5000`.
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "ApiConfig::default_timeout")]
    pub timeout_secs: u64,

    /// Append a record to the remote log after every confirmed logout.
    #[serde(default = "ApiConfig::default_sync")]
    pub sync_on_logout: bool,
}

impl ApiConfig {
    fn default_timeout() -> u64 {
        10
    }

    fn default_sync() -> bool {
        true
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Attendance API".to_string(),
        }
    }
}

/// Live timer settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TickerConfig {
    /// Refresh period of the live timer in milliseconds.
    pub interval_ms: u64,
}

impl TickerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "ticker".to_string(),
            name: "Timer".to_string(),
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        TickerConfig { interval_ms: 1000 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<TickerConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration at `path`, or the defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ApiConfig::module(), TickerConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "api" => {
                    let default = config.api.clone().unwrap_or(ApiConfig {
                        api_url: "http://localhost:5000".to_string(),
                        timeout_secs: ApiConfig::default_timeout(),
                        sync_on_logout: ApiConfig::default_sync(),
                    });
                    msg_print!(Message::ConfigModuleApi);
                    config.api = Some(ApiConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        timeout_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiTimeout.to_string())
                            .default(default.timeout_secs)
                            .interact_text()?,
                        sync_on_logout: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSyncOnLogout.to_string())
                            .default(default.sync_on_logout)
                            .interact_text()?,
                    });
                }
                "ticker" => {
                    let default = config.ticker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTicker);
                    config.ticker = Some(TickerConfig {
                        interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickerInterval.to_string())
                            .default(default.interval_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
