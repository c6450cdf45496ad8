//! Config file discovery and loading.
//!
//! Responsibilities:
//! - Locate the config file (`~/.config/claw/claw.yaml` by default).
//! - Parse it into `ClawConfig`, falling back to defaults when absent.
//!
//! Does NOT handle:
//! - Watching the file for changes (TUI runtime).
//! - Keybind resolution (see `keybinds`).

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::types::ClawConfig;

/// Config file name inside the claw config directory.
pub const CONFIG_FILE_NAME: &str = "claw.yaml";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for `ClawConfig`.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An explicit `--config` path points at nothing.
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },
}

/// Returns the default config file path, if a config directory exists
/// for this platform. The file itself may not exist yet.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "claw").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<ClawConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve and load the configuration.
///
/// With an explicit `override_path` the file must exist. Otherwise the
/// default location is tried; a missing file yields the built-in
/// defaults (and no watchable path).
pub fn load_or_default(
    override_path: Option<&Path>,
) -> Result<(ClawConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = override_path {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let cfg = load_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let cfg = load_config(&path)?;
            Ok((cfg, Some(path)))
        }
        Some(path) => {
            tracing::info!(path = %path.display(), "no config file found, using defaults");
            Ok((ClawConfig::default(), None))
        }
        None => {
            tracing::warn!("no config directory available on this platform, using defaults");
            Ok((ClawConfig::default(), None))
        }
    }
}
