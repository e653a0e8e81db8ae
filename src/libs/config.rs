//! Configuration management for the takt application.
//!
//! Handles the JSON configuration file stored in the platform data
//! directory, with optional modules for the timer engine and the remote
//! record server. Every "magic number" the timer engine and safety monitor
//! rely on is hoisted into [`TimerConfig`] with documented defaults and
//! injected at construction time rather than hard-coded.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! let timer = config.timer.clone().unwrap_or_default();
//! # anyhow::Ok(())
//! ```

use super::data_storage::data_file;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Timer engine and safety monitor settings.
///
/// All durations are whole seconds. The defaults are configuration
/// constants of this application, not protocol requirements; users can
/// adjust them through `takt init`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Hard ceiling on a single session's active duration in seconds.
    ///
    /// The safety monitor forces a stop once the live active time exceeds
    /// this value, and the recorded entry is capped at exactly the ceiling.
    pub max_session_secs: i64,

    /// Width of the forced-stop window before local midnight, in seconds.
    ///
    /// When the wall clock enters the last `midnight_buffer_secs` of the
    /// day, the safety monitor stops the running session once so that no
    /// entry silently spans a day boundary.
    pub midnight_buffer_secs: i64,

    /// Safety monitor poll interval in seconds.
    ///
    /// Ticks only matter while a session is active; no timer runs when the
    /// engine is idle.
    pub poll_interval_secs: u64,

    /// Default work phase length in seconds for work/break cycling.
    pub work_phase_secs: i64,

    /// Default break phase length in seconds for work/break cycling.
    pub break_phase_secs: i64,
}

/// Remote record server connection settings.
///
/// When configured, session snapshots and completed entries are posted to
/// this server first, with the local database as fallback.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the record store API.
    pub api_url: String,

    /// Bearer token included on every request.
    pub auth_token: String,
}

/// Root configuration object.
///
/// All modules are optional so the application runs with zero setup;
/// unconfigured modules are omitted from the JSON file entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Timer engine and safety monitor settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,

    /// Remote record server settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Default for TimerConfig {
    /// Default timing values:
    /// - 12 hour session ceiling
    /// - 15 second window before midnight
    /// - 10 second monitor poll interval
    /// - 25 minute work phase / 5 minute break phase
    fn default() -> Self {
        TimerConfig {
            max_session_secs: 12 * 60 * 60,
            midnight_buffer_secs: 15,
            poll_interval_secs: 10,
            work_phase_secs: 25 * 60,
            break_phase_secs: 5 * 60,
        }
    }
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    ///
    /// A missing file is not an error; a present but unparseable file is.
    pub fn read() -> Result<Config> {
        let config_file_path = data_file(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed JSON in the
    /// application data directory, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = data_file(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of available modules, pre-filling existing
    /// values as defaults, and returns the updated configuration for the
    /// caller to save.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Timer", "Server"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Timer" => {
                    let default = config.timer.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTimer);
                    config.timer = Some(TimerConfig {
                        max_session_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxSessionHours.to_string())
                            .default(default.max_session_secs / 3600)
                            .interact_text()?
                            * 3600,
                        midnight_buffer_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMidnightBuffer.to_string())
                            .default(default.midnight_buffer_secs)
                            .interact_text()?,
                        poll_interval_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval_secs)
                            .interact_text()?,
                        work_phase_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWorkPhaseMinutes.to_string())
                            .default(default.work_phase_secs / 60)
                            .interact_text()?
                            * 60,
                        break_phase_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBreakPhaseMinutes.to_string())
                            .default(default.break_phase_secs / 60)
                            .interact_text()?
                            * 60,
                    });
                }
                "Server" => {
                    let default = config.server.clone().unwrap_or(ServerConfig {
                        api_url: String::new(),
                        auth_token: String::new(),
                    });
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        auth_token: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerAuthToken.to_string())
                            .default(default.auth_token)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
