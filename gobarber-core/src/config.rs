//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GoBarberError, GoBarberResult};

static DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "GOBARBER_API_URL";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration at ~/.config/gobarber/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GoBarberConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GoBarberConfig {
    fn default() -> Self {
        GoBarberConfig {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GoBarberConfig {
    pub fn config_dir() -> GoBarberResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GoBarberError::Config("Could not determine config directory".into()))?
            .join("gobarber");

        Ok(config_dir)
    }

    pub fn config_path() -> GoBarberResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing,
    /// then apply the `GOBARBER_API_URL` override.
    pub fn load() -> GoBarberResult<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        config.base_url()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> GoBarberResult<Self> {
        if !path.exists() {
            return Ok(GoBarberConfig::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            GoBarberError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| GoBarberError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// Parsed API base URL.
    pub fn base_url(&self) -> GoBarberResult<Url> {
        Url::parse(&self.api_url)
            .map_err(|e| GoBarberError::Config(format!("Invalid api_url '{}': {e}", self.api_url)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GoBarberResult<()> {
        let contents = format!(
            "\
# GoBarber client configuration

# Base URL of the GoBarber API:
# api_url = \"{DEFAULT_API_URL}\"

# Request timeout in seconds:
# timeout_secs = {DEFAULT_TIMEOUT_SECS}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GoBarberError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GoBarberError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GoBarberConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GoBarberConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn commented_default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        GoBarberConfig::create_default_config(&path).unwrap();

        let config = GoBarberConfig::load_from(&path).unwrap();
        assert_eq!(config, GoBarberConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"https://api.gobarber.test\"\n").unwrap();

        let config = GoBarberConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://api.gobarber.test");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.base_url().unwrap().host_str(), Some("api.gobarber.test"));
    }

    #[test]
    fn invalid_url_is_a_config_error() {
        let config = GoBarberConfig {
            api_url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(config.base_url(), Err(GoBarberError::Config(_))));
    }
}
