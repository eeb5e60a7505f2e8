//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::errors::ConfigError;
use crate::domain::traits::ConfigStore;

pub const DEFAULT_CONFIG_FILE: &str = "gatorconfig.yaml";

/// Gator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default = "default_db_url")]
    pub db_url: String,
    #[serde(default)]
    pub current_user_name: Option<String>,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_db_url() -> String {
    "gator.db".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_url: default_db_url(),
            current_user_name: None,
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Database location, `GATOR_DB_URL` taking precedence over the file
    pub fn resolved_db_url(&self) -> String {
        std::env::var("GATOR_DB_URL").unwrap_or_else(|_| self.db_url.clone())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("db-url must not be empty".to_string()));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "fetch-timeout-secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Config bound to the file it came from; writes back on every change
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
    config: Config,
}

impl FileConfig {
    /// Read the config file, falling back to defaults when it is absent or unreadable
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = if path.exists() {
            Config::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Config::default()
        };

        Self { path, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ConfigStore for FileConfig {
    fn current_user(&self) -> Option<&str> {
        self.config.current_user_name.as_deref()
    }

    fn set_current_user(&mut self, name: &str) -> Result<(), ConfigError> {
        self.config.current_user_name = Some(name.to_string());
        self.config.save(&self.path)?;
        tracing::debug!("Current user set to {} in {}", name, self.path.display());
        Ok(())
    }
}
