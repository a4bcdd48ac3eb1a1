//! Music library scanning and seed selection

mod namer;
mod scanner;
mod selector;

pub use namer::playlist_path;
pub use scanner::scan;
pub use selector::TrackSet;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering or naming tracks
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("no files ending in '{extension}' found under {}", .root.display())]
    NoMatches { extension: String, root: PathBuf },

    #[error("{} is not inside {}", .track.display(), .root.display())]
    OutsideRoot { track: PathBuf, root: PathBuf },

    #[error("{} has no path below {}", .track.display(), .root.display())]
    NoRelativePath { track: PathBuf, root: PathBuf },
}
