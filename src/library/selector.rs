//! Uniform random seed selection

use rand::Rng;
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// Non-empty, immutable set of discovered tracks
#[derive(Debug, Clone)]
pub struct TrackSet {
    tracks: Vec<PathBuf>,
}

impl TrackSet {
    /// Wrap discovered paths, returning `None` when there are none
    pub fn new(tracks: Vec<PathBuf>) -> Option<Self> {
        if tracks.is_empty() {
            None
        } else {
            Some(Self { tracks })
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.tracks.iter()
    }

    /// Pick one track uniformly at random
    ///
    /// Each call is independent, so the same track can come up repeatedly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &PathBuf {
        // Never empty, so choose always yields an element
        self.tracks.choose(rng).unwrap_or(&self.tracks[0])
    }
}
