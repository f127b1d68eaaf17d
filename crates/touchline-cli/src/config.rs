//! Configuration discovery for the CLI.
//!
//! A drill config is looked up in three places, first hit wins:
//!
//! 1. the `--config` path, which must exist;
//! 2. `touchline/config.toml` relative to the working directory;
//! 3. `config.toml` in the platform config directory.
//!
//! When none is found the built-in defaults are used. Every loaded file has
//! its canvas size validated before it is handed to the renderer.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use touchline::{TouchlineError, config::AppConfig};

const LOCAL_CONFIG: &str = "touchline/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration {path}: {message}")]
    Validation { path: PathBuf, message: String },
}

impl From<ConfigError> for TouchlineError {
    fn from(err: ConfigError) -> Self {
        TouchlineError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Explicit,
    Local,
    System,
}

impl ConfigSource {
    fn name(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Local => "local",
            Self::System => "system",
        }
    }
}

/// Resolves and loads the drill configuration.
///
/// # Errors
///
/// Fails when the explicit path does not exist, or when the selected file
/// cannot be read, parsed or validated.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TouchlineError> {
    match locate(explicit_path.as_ref().map(AsRef::as_ref)) {
        Some((source, path)) => {
            info!(source = source.name(), path:% = path.display(); "Loading drill configuration");
            read_config(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Picks the configuration file to load, if any.
///
/// An explicit path is returned even when missing so that the caller reports it.
fn locate(explicit_path: Option<&Path>) -> Option<(ConfigSource, PathBuf)> {
    if let Some(path) = explicit_path {
        return Some((ConfigSource::Explicit, path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some((ConfigSource::Local, local));
    }

    let Some(dirs) = ProjectDirs::from("com", "touchline", "touchline") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let system = dirs.config_dir().join("config.toml");
    if system.is_file() {
        return Some((ConfigSource::System, system));
    }
    debug!(path:% = system.display(); "System configuration file not found");
    None
}

fn read_config(path: &Path) -> Result<AppConfig, TouchlineError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    config
        .canvas()
        .validate()
        .map_err(|message| ConfigError::Validation {
            path: path.to_path_buf(),
            message,
        })?;

    Ok(config)
}
