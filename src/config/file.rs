//! User configuration file
//!
//! Optional defaults stored in ~/.config/rand-playlist/config.json. Every key
//! may be omitted; command-line flags take precedence over anything set here.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ConfigError;

/// Defaults read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Seed file suffix, e.g. ".flac"
    pub file_extension: Option<String>,
    /// Tracks per playlist
    pub playlist_length: Option<u32>,
    /// Generator lookback
    pub lookback: Option<u32>,
    /// Generator noise
    pub noise: Option<u32>,
    /// Generator pickle store
    pub pickles: Option<PathBuf>,
    /// Generator embedding store
    pub mp3tovec: Option<PathBuf>,
    /// Generator command line
    pub generator: Option<String>,
}

impl ConfigFile {
    /// Load the configuration file
    ///
    /// An explicitly requested file must exist. The default location is
    /// optional and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
                }
                Self::read(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rand-playlist").join("config.json"))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: Self = serde_json::from_str(&contents).map_err(|source| {
            ConfigError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(file)
    }
}
