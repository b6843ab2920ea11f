//! Configuration management for the pathway application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and edited through an interactive setup wizard. The only configurable
//! module today is the dashboard server connection; the optional-module
//! layout leaves room for further integrations without breaking existing
//! config files.

use super::data_storage::DataStorage;
use crate::api::tracker::TrackerConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display the available modules and route
/// the selection to the matching init routine.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Main configuration container for the entire application.
///
/// Unconfigured modules are omitted from the JSON output via
/// `skip_serializing_if`, keeping config files clean.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Dashboard server connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields the default configuration
    /// with every module disabled.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration to the filesystem.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Existing values are offered as defaults, so re-running the wizard
    /// only changes what the user actually edits.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![TrackerConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "tracker" => config.tracker = Some(TrackerConfig::init(&config.tracker)?),
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
