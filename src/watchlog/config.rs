use crate::error::{Result, WatchlogError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "media_database.json";

/// Configuration for watchlog, stored as config.json next to the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlogConfig {
    /// File name of the database inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Known streaming platforms, used to flag likely typos when adding
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_platforms() -> Vec<String> {
    ["Netflix", "Amazon", "Hulu", "Disney+", "Apple TV"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for WatchlogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            platforms: default_platforms(),
        }
    }
}

impl WatchlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WatchlogError::Io)?;
        let config: WatchlogConfig =
            serde_json::from_str(&content).map_err(WatchlogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WatchlogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WatchlogError::Serialization)?;
        fs::write(config_path, content).map_err(WatchlogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "platforms" => Some(self.platforms.join(", ")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.trim().to_string();
                Ok(())
            }
            "platforms" => {
                self.platforms = value
                    .split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// True when the platform is one of the configured ones (case-insensitive).
    pub fn knows_platform(&self, platform: &str) -> bool {
        self.platforms
            .iter()
            .any(|p| p.eq_ignore_ascii_case(platform))
    }
}
