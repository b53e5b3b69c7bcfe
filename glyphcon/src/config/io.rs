//! Configuration file I/O: path resolution and loading.

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::Config;
use crate::AppError;

/// Returns the platform-specific configuration directory for glyphcon.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("glyphcon");
        }
        PathBuf::from(".").join("glyphcon")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("glyphcon");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("glyphcon");
        }
        PathBuf::from(".").join("glyphcon")
    }
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Parse and validate TOML text. `path` is only used in messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, AppError> {
        let config: Self = toml::from_str(text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = config_path();
        let data = match std::fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("config: failed to read {}: {e}", path.display());
                }
                return Self::default();
            }
        };
        match Self::parse(&data, &path) {
            Ok(cfg) => {
                info!("config: loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("config: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Like `load`, but reports failure so a reload can keep the previous
    /// config.
    pub fn try_load() -> Result<Self, AppError> {
        let path = config_path();
        let data = std::fs::read_to_string(&path).map_err(|source| AppError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        Self::parse(&data, &path)
    }
}
