use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::DataFiles;

const APP_NAME: &str = "airops";
const CONFIG_FILE: &str = "config.json";

/// Overrides `data_dir` when set.
pub const DATA_DIR_ENV: &str = "AIROPS_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the record files are read from
    pub data_dir: PathBuf,
    pub flights_file: String,
    pub planes_file: String,
    pub tickets_file: String,
    pub passengers_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            flights_file: DataFiles::FLIGHTS.to_string(),
            planes_file: DataFiles::PLANES.to_string(),
            tickets_file: DataFiles::TICKETS.to_string(),
            passengers_file: DataFiles::PASSENGERS.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from the user's config directory.
    /// Returns default config if file doesn't exist or fails to parse.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    fn try_load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => get_config_path()?,
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save the current configuration to `path`, or to the user's config directory.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => get_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(config_path)
    }

    pub fn data_files(&self) -> DataFiles {
        DataFiles {
            flights: self.data_dir.join(&self.flights_file),
            planes: self.data_dir.join(&self.planes_file),
            tickets: self.data_dir.join(&self.tickets_file),
            passengers: self.data_dir.join(&self.passengers_file),
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
