//! Playlist naming
//!
//! A playlist is named after the top-level directory under the root that
//! holds its seed track, e.g. `/music/My Band/Album/01.mp3` with suffix
//! `rand-playlist` becomes `/music/My_Band-rand-playlist.m3u`. A seed lying
//! directly in the root uses its file stem instead: `/music/track1.mp3`
//! becomes `/music/track1-rand-playlist.m3u`.

use std::path::{Component, Path, PathBuf};

use super::LibraryError;

/// Derive the absolute playlist path for a seed track
pub fn playlist_path(root: &Path, track: &Path, suffix: &str) -> Result<PathBuf, LibraryError> {
    Ok(root.join(playlist_file_name(root, track, suffix)?))
}

/// Derive the playlist file name for a seed track
pub fn playlist_file_name(root: &Path, track: &Path, suffix: &str) -> Result<String, LibraryError> {
    let relative = track
        .strip_prefix(root)
        .map_err(|_| LibraryError::OutsideRoot {
            track: track.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let mut components = relative.components();
    let first = match components.next() {
        Some(Component::Normal(first)) => first,
        _ => {
            return Err(LibraryError::NoRelativePath {
                track: track.to_path_buf(),
                root: root.to_path_buf(),
            });
        }
    };

    let base = if components.next().is_none() {
        // Track sits directly in the root
        Path::new(first).file_stem().unwrap_or(first)
    } else {
        first
    };

    Ok(format!(
        "{}-{}.m3u",
        base.to_string_lossy().replace(' ', "_"),
        suffix
    ))
}
