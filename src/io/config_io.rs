use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::StacksConfig;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value in {path}: {message}")]
    InvalidValue { path: PathBuf, message: String },
}

/// Default config location, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"))
        .join("stacks")
        .join("config.toml")
}

/// Default data directory, respecting XDG_DATA_HOME
pub fn default_store_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"))
        .join("stacks")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config file at `path`. A missing file yields the defaults; a
/// file that exists but does not parse is an error.
pub fn read_config_from(path: &Path) -> Result<StacksConfig, ConfigError> {
    if !path.exists() {
        return Ok(StacksConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: StacksConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let divisor = config.swipe.threshold_divisor;
    if !(divisor.is_finite() && divisor > 0.0) {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            message: format!("swipe.threshold_divisor must be a positive number, got {}", divisor),
        });
    }
    Ok(config)
}

/// Read the config from `explicit` if given, else from the default location.
pub fn read_config(explicit: Option<&Path>) -> Result<StacksConfig, ConfigError> {
    match explicit {
        Some(path) => read_config_from(path),
        None => read_config_from(&config_path()),
    }
}

/// Resolve the store directory: command-line override, then config, then
/// the XDG default.
pub fn resolve_store_dir(override_dir: Option<&Path>, config: &StacksConfig) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    match config.store.dir.as_deref() {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_store_dir(),
    }
}
