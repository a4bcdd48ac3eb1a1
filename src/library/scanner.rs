//! Recursive track discovery

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use super::{LibraryError, TrackSet};

/// Collect every regular file under `root` whose name ends with `extension`
///
/// The match is a literal, case-sensitive suffix on the file name. Symlinks
/// are not followed and entries that cannot be read are skipped.
pub fn scan(root: &Path, extension: &str) -> Result<TrackSet, LibraryError> {
    let mut tracks = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(extension)
        {
            tracks.push(entry.into_path());
        }
    }

    debug!(
        "Found {} files ending in '{}' under {}",
        tracks.len(),
        extension,
        root.display()
    );

    TrackSet::new(tracks).ok_or_else(|| LibraryError::NoMatches {
        extension: extension.to_string(),
        root: root.to_path_buf(),
    })
}
