//! Application settings - persisted user preferences.
//!
//! Loaded from a TOML file in the platform config directory at startup and
//! saved when changed. The backend URL can also come from the
//! `DEFENSA_API_URL` environment variable, which wins over the file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use defensa_client::ClientConfig;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the REST backend.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080/api".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from the default path, applying the environment override.
    /// On first run the defaults are written out so the file is there to edit.
    pub fn load() -> Self {
        let path = Self::config_path();
        let existed = path.exists();
        let mut settings = Self::load_from(&path);
        if !existed {
            let _ = settings.save();
        }
        if let Ok(url) = std::env::var("DEFENSA_API_URL")
            && !url.trim().is_empty()
        {
            settings.api_url = url;
        }
        settings
    }

    /// Load settings from a specific path, falling back to defaults.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content).context("write settings file")?;
        Ok(())
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("cu", "reduc", "DefensaDesk")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Connection settings for the API client.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api_url.clone());
        config.timeout = Duration::from_secs(self.request_timeout_secs);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(&PathBuf::from("/nonexistent/settings.toml"));
        assert_eq!(settings.api_url, "http://localhost:8080/api");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            api_url: "http://backend:9000/api".to_string(),
            request_timeout_secs: 10,
        };
        let text = toml::to_string_pretty(&settings).expect("serialize");
        let back: Settings = toml::from_str(&text).expect("deserialize");
        assert_eq!(back.api_url, settings.api_url);
        assert_eq!(back.request_timeout_secs, 10);
    }
}
