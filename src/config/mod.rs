//! Run configuration
//!
//! Command-line flags are layered over the optional config file and the
//! built-in defaults, then validated once into an immutable [`Settings`].

mod file;

pub use file::ConfigFile;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Cli;
use crate::generator::GeneratorCommand;

pub const DEFAULT_EXTENSION: &str = ".mp3";
pub const DEFAULT_PLAYLIST_LENGTH: u32 = 40;
pub const DEFAULT_LOOKBACK: u32 = 3;
pub const DEFAULT_NOISE: u32 = 0;
pub const DEFAULT_PICKLES: &str = "Pickles";
pub const DEFAULT_MP3TOVEC: &str = "mp3tovec";
pub const DEFAULT_GENERATOR: &str = "python Playlist.py";

/// Configuration problems detected before any playlist is generated
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("root directory is required (use -r/--root-directory)")]
    MissingRoot,

    #[error("root directory {} does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("cannot resolve root directory {}: {source}", .path.display())]
    RootUnresolvable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file extension must not be empty")]
    EmptyExtension,

    #[error("playlist length must be a positive integer")]
    ZeroPlaylistLength,

    #[error("generator command must not be empty")]
    EmptyGenerator,

    #[error("config file {} does not exist", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Validated, immutable configuration for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute search root
    pub root: PathBuf,
    /// Literal file name suffix of seed candidates
    pub extension: String,
    pub playlist_count: u32,
    pub playlist_length: u32,
    pub lookback: u32,
    pub noise: u32,
    pub pickles: PathBuf,
    pub mp3tovec: PathBuf,
    pub generator: GeneratorCommand,
    /// Appended to every playlist name
    pub suffix: String,
    pub dry_run: bool,
}

impl Settings {
    /// Resolve settings from parsed flags and the config file
    pub fn resolve(cli: &Cli, file: &ConfigFile, suffix: String) -> Result<Self, ConfigError> {
        let root = resolve_root(cli.root_directory.as_deref())?;

        let extension = cli
            .file_extension
            .clone()
            .or_else(|| file.file_extension.clone())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        if extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        let playlist_length = cli
            .playlist_length
            .or(file.playlist_length)
            .unwrap_or(DEFAULT_PLAYLIST_LENGTH);
        if playlist_length == 0 {
            return Err(ConfigError::ZeroPlaylistLength);
        }

        let generator = cli
            .generator
            .as_deref()
            .or(file.generator.as_deref())
            .unwrap_or(DEFAULT_GENERATOR);
        let generator = GeneratorCommand::parse(generator).ok_or(ConfigError::EmptyGenerator)?;

        Ok(Self {
            root,
            extension,
            playlist_count: cli.playlist_count,
            playlist_length,
            lookback: cli.lookback.or(file.lookback).unwrap_or(DEFAULT_LOOKBACK),
            noise: cli.noise.or(file.noise).unwrap_or(DEFAULT_NOISE),
            pickles: cli
                .pickles
                .clone()
                .or_else(|| file.pickles.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PICKLES)),
            mp3tovec: cli
                .mp3tovec
                .clone()
                .or_else(|| file.mp3tovec.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MP3TOVEC)),
            generator,
            suffix,
            dry_run: cli.dry_run,
        })
    }
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let root = root.ok_or(ConfigError::MissingRoot)?;

    if !root.exists() {
        return Err(ConfigError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ConfigError::RootNotDirectory(root.to_path_buf()));
    }

    root.canonicalize()
        .map_err(|source| ConfigError::RootUnresolvable {
            path: root.to_path_buf(),
            source,
        })
}

/// Derive the playlist suffix from the name the program was invoked as
pub fn program_suffix(argv0: Option<&str>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_string()
}
