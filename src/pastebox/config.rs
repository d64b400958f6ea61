use crate::error::{PasteboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_URL: &str = "https://pastebox.app/p";

/// Configuration for pastebox, stored as config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasteboxConfig {
    /// Base URL share links point at; the paste id is appended to it.
    #[serde(default = "default_share_url")]
    pub share_url: String,
}

fn default_share_url() -> String {
    DEFAULT_SHARE_URL.to_string()
}

impl Default for PasteboxConfig {
    fn default() -> Self {
        Self {
            share_url: default_share_url(),
        }
    }
}

impl PasteboxConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PasteboxError::Io)?;
        let config: PasteboxConfig =
            serde_json::from_str(&content).map_err(PasteboxError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PasteboxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PasteboxError::Serialization)?;
        fs::write(config_path, content).map_err(PasteboxError::Io)?;
        Ok(())
    }

    pub fn share_url(&self) -> &str {
        &self.share_url
    }

    /// Set the share base URL (normalizes away a trailing slash).
    pub fn set_share_url(&mut self, url: &str) {
        self.share_url = url.trim_end_matches('/').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_share_url_is_set() {
        let config = PasteboxConfig::default();
        assert_eq!(config.share_url(), "https://pastebox.app/p");
    }

    #[test]
    fn set_share_url_drops_trailing_slash() {
        let mut config = PasteboxConfig::default();
        config.set_share_url("https://example.com/pastes/");
        assert_eq!(config.share_url(), "https://example.com/pastes");
    }

    #[test]
    fn missing_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PasteboxConfig::load(dir.path()).unwrap();
        assert_eq!(config, PasteboxConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PasteboxConfig::default();
        config.set_share_url("https://example.com/p");
        config.save(dir.path()).unwrap();

        let loaded = PasteboxConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.share_url(), "https://example.com/p");
    }
}
