//! CLI module for rand-playlist

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "rand-playlist",
    about = "Generate playlists seeded from random tracks in a music library"
)]
#[command(version, author)]
pub struct Cli {
    /// Directory searched (recursively) for seed tracks
    #[arg(short = 'r', long, value_name = "DIR")]
    pub root_directory: Option<PathBuf>,

    /// Number of playlists to generate
    #[arg(short = 'p', long, default_value_t = 1, value_parser = parse_playlist_count)]
    pub playlist_count: u32,

    /// Only files whose name ends with this suffix are seed candidates [default: .mp3]
    #[arg(short = 'e', long, value_name = "EXT")]
    pub file_extension: Option<String>,

    /// Number of tracks in each playlist [default: 40]
    #[arg(short = 's', long, value_parser = parse_playlist_length)]
    pub playlist_length: Option<u32>,

    /// How many previous tracks the generator looks back on [default: 3]
    #[arg(short = 'l', long, value_parser = parse_lookback)]
    pub lookback: Option<u32>,

    /// Randomness injected by the generator [default: 0]
    #[arg(short = 'n', long, value_parser = parse_noise)]
    pub noise: Option<u32>,

    /// Generator pickle store [default: Pickles]
    #[arg(short = 'P', long, value_name = "PATH")]
    pub pickles: Option<PathBuf>,

    /// Generator MP3ToVec embedding store [default: mp3tovec]
    #[arg(short = 'm', long, value_name = "PATH")]
    pub mp3tovec: Option<PathBuf>,

    /// Generator command line [default: python Playlist.py]
    #[arg(short = 'g', long, env = "RAND_PLAYLIST_GENERATOR", value_name = "COMMAND")]
    pub generator: Option<String>,

    /// Suffix appended to playlist names [default: program name]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Read defaults from this file instead of the user config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pick seeds and show the generator commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print verbose diagnostics to stderr
    #[arg(long)]
    pub debug: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

fn parse_playlist_count(value: &str) -> Result<u32, String> {
    parse_positive(value, "playlist count")
}

fn parse_playlist_length(value: &str) -> Result<u32, String> {
    parse_positive(value, "playlist length")
}

fn parse_lookback(value: &str) -> Result<u32, String> {
    parse_non_negative(value, "lookback")
}

fn parse_noise(value: &str) -> Result<u32, String> {
    parse_non_negative(value, "noise")
}

fn parse_positive(value: &str, what: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive integer", what)),
    }
}

fn parse_non_negative(value: &str, what: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("{} must be a non-negative integer", what))
}
