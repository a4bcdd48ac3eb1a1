//! Generator command lines

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Settings;

/// Program plus leading arguments used to launch the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl GeneratorCommand {
    /// Split a command line on whitespace, e.g. `python3 Playlist.py`
    ///
    /// Returns `None` for a blank command line.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Build the full argument list for one playlist
    ///
    /// The stores are positional, followed by the tuning flags, the output
    /// playlist and the seed track.
    pub fn arguments(&self, settings: &Settings, request: &PlaylistRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push(settings.pickles.clone().into_os_string());
        args.push(settings.mp3tovec.clone().into_os_string());
        args.push("--lookback".into());
        args.push(settings.lookback.to_string().into());
        args.push("--nsongs".into());
        args.push(settings.playlist_length.to_string().into());
        args.push("--noise".into());
        args.push(settings.noise.to_string().into());
        args.push("--playlist".into());
        args.push(request.playlist.clone().into_os_string());
        args.push("--inputsong".into());
        args.push(request.seed.clone().into_os_string());
        args
    }
}

/// One playlist to generate: the seed track and where the playlist goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub seed: PathBuf,
    pub playlist: PathBuf,
}

/// Render a command line for display, quoting arguments that contain whitespace
pub fn render(program: &str, args: &[OsString]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|arg| {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("'{}'", arg.replace('\'', "'\\''"))
            } else {
                arg.into_owned()
            }
        }))
        .collect::<Vec<_>>()
        .join(" ")
}
