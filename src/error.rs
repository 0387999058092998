//! Error types for sysact_core
//!
//! `ProviderError` covers OS queries made while computing completions. It
//! never leaves `Action::invoke`: the action turns it into a
//! `Completion::Message`. `ConfigError` is raised while loading settings.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure of an OS query made by a provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The command ran but did not exit successfully
    #[error("{program}: {status}")]
    CommandFailed { program: String, status: String },

    #[error("{program}: timed out after {}ms", .timeout.as_millis())]
    CommandTimeout { program: String, timeout: Duration },

    #[error("process table unavailable: {0}")]
    ProcessTable(String),

    #[error("failed to start command runtime: {0}")]
    Runtime(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
