//! Configuration file discovery.
//!
//! The first of these wins: the `--config` path, `trellis/config.toml` in the
//! working directory, `config.toml` in the platform config directory. With
//! none present the defaults apply. A file that is found is also checked for
//! style values the renderer would reject, so a bad background color is
//! reported against the file that set it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use trellis::{TrellisError, config::AppConfig};

/// Relative path of the project-local configuration file.
const LOCAL_CONFIG_PATH: &str = "trellis/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Invalid style in {}: {message}", path.display())]
    InvalidStyle { path: PathBuf, message: String },
}

impl From<ConfigError> for TrellisError {
    fn from(err: ConfigError) -> Self {
        TrellisError::Config(err.to_string())
    }
}

/// Finds and loads the configuration.
///
/// # Errors
///
/// Returns [`TrellisError::Config`] when an explicit path does not exist or
/// when the chosen file fails to parse or validate.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig, TrellisError> {
    match find_config_file(explicit_path) {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading configuration");
            Ok(load_config_file(&path)?)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Returns the configuration file to use, if any.
///
/// An explicit path is returned even when it does not exist, so loading can
/// report it.
fn find_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_PATH);
    if local.exists() {
        return Some(local);
    }

    let Some(dirs) = ProjectDirs::from("com", "trellis", "trellis") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let system = dirs.config_dir().join("config.toml");
    if system.exists() {
        Some(system)
    } else {
        debug!(path = system.display().to_string(); "System configuration file not found");
        None
    }
}

fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    config
        .style()
        .background_color()
        .map_err(|message| ConfigError::InvalidStyle {
            path: path.to_path_buf(),
            message,
        })?;

    Ok(config)
}
