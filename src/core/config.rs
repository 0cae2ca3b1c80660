use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::alias::{tokenize_with, AliasError, AliasSet, KeywordPolicy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access settings: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("webhook url is required")]
    MissingUrl,

    #[error(transparent)]
    Alias(#[from] AliasError),
}

/// On-call transport settings, persisted as settings.json.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// On-call webhook URL
    pub url: String,
    /// Comma-separated alias directives, e.g. "hostname as host, join faults->rule as rules"
    #[serde(default)]
    pub alias_spec: String,
    #[serde(default)]
    pub keyword_policy: KeywordPolicy,
}

impl Settings {
    /// Check the settings are usable and return the parsed alias set.
    pub fn validate(&self) -> Result<AliasSet, ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        Ok(tokenize_with(&self.alias_spec, self.keyword_policy)?)
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// Load settings, falling back to defaults when the file is missing or unreadable.
    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            match fs::read_to_string(&self.config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("Ignoring malformed {:?}: {}", self.config_path, e),
                },
                Err(e) => log::warn!("Error reading {:?}: {}", self.config_path, e),
            }
        }
        Settings::default()
    }

    /// Validate and persist. Invalid settings are never written.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        settings.validate()?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }
}
