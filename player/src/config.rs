//! Shell-side configuration: an optional JSON file merged with CLI flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tvplayer_core::PlayerConfig;

/// On-disk overrides for [`PlayerConfig`]. Absent fields keep the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub autoplay: Option<bool>,
    pub log_time_updates: Option<bool>,
}

impl FileConfig {
    pub fn apply(&self, mut config: PlayerConfig) -> PlayerConfig {
        if let Some(autoplay) = self.autoplay {
            config.autoplay = autoplay;
        }
        if let Some(log_time_updates) = self.log_time_updates {
            config.log_time_updates = log_time_updates;
        }
        config
    }
}

/// Default config file location under the user config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tvplayer").join("config.json"))
}

/// Load the config file if it exists; a missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_override_defaults() {
        let file: FileConfig = serde_json::from_str(r#"{"autoplay": true}"#).unwrap();
        let config = file.apply(PlayerConfig::default());
        assert!(config.autoplay);
        assert!(config.log_time_updates);
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let file: FileConfig = serde_json::from_str("{}").unwrap();
        let config = file.apply(PlayerConfig::default());
        assert!(!config.autoplay);
    }
}
