//! Settings for the system providers
//!
//! Stored as YAML. Every field has a default, so an empty file or no file
//! at all gives the stock behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::os_context::SystemContext;
use crate::records::{GROUP_PATH, PASSWD_PATH};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SYSACT_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// passwd-style user database
    pub passwd_path: PathBuf,
    /// group-style database
    pub group_path: PathBuf,
    /// Command listing login shells, one per line
    pub shells_command: String,
    pub shells_args: Vec<String>,
    /// Upper bound for any external command, in milliseconds
    pub command_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            passwd_path: PathBuf::from(PASSWD_PATH),
            group_path: PathBuf::from(GROUP_PATH),
            shells_command: "chsh".to_string(),
            shells_args: vec!["--list-shells".to_string()],
            command_timeout_ms: 500,
        }
    }
}

impl Config {
    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path or `$SYSACT_CONFIG` must be readable. The per-user
    /// file under the config dir is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(PathBuf::from(path));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/sysact/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sysact").join("config.yaml"))
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    /// Live OS context honoring these settings
    pub fn system_context(&self) -> SystemContext {
        SystemContext::new(self.command_timeout())
    }
}
