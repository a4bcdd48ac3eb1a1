//! Playlist generation loop

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::{debug, info};

use super::{Invoker, PlaylistRequest};
use crate::config::Settings;
use crate::library::{self, TrackSet};

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Generated playlists, in order
    pub playlists: Vec<PlaylistRequest>,
}

/// Picks seeds and drives the generator once per requested playlist
pub struct PlaylistEngine<'a, I> {
    settings: &'a Settings,
    tracks: &'a TrackSet,
    invoker: I,
}

impl<'a, I: Invoker> PlaylistEngine<'a, I> {
    /// Create a new engine over an already scanned track set
    pub fn new(settings: &'a Settings, tracks: &'a TrackSet, invoker: I) -> Self {
        Self {
            settings,
            tracks,
            invoker,
        }
    }

    /// Pick a seed track and derive where its playlist goes
    pub fn request<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PlaylistRequest> {
        let seed = self.tracks.pick(rng).clone();
        let playlist = library::playlist_path(&self.settings.root, &seed, &self.settings.suffix)?;
        Ok(PlaylistRequest { seed, playlist })
    }

    /// Generate every requested playlist, one after another
    ///
    /// Stops at the first generator failure.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        progress: &ProgressBar,
    ) -> Result<GenerateResult> {
        let total = self.settings.playlist_count;
        let program = self.settings.generator.program.as_str();
        let mut result = GenerateResult::default();

        progress.set_length(u64::from(total));
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );

        for index in 1..=total {
            let request = self.request(rng)?;
            debug!(
                "Playlist {}/{}: seed {}",
                index,
                total,
                request.seed.display()
            );

            if let Some(name) = request.playlist.file_name() {
                progress.set_message(name.to_string_lossy().into_owned());
            }

            let args = self.settings.generator.arguments(self.settings, &request);
            self.invoker
                .invoke(program, &args)
                .and_then(|invocation| invocation.check(program))
                .with_context(|| {
                    format!(
                        "Failed to generate playlist {} of {} ({})",
                        index,
                        total,
                        request.playlist.display()
                    )
                })?;

            progress.suspend(|| {
                info!(
                    "Generated {} from {}",
                    request.playlist.display(),
                    request.seed.display()
                )
            });
            progress.inc(1);
            result.playlists.push(request);
        }

        Ok(result)
    }

    /// Give back the invoker, e.g. to inspect what it ran
    pub fn into_invoker(self) -> I {
        self.invoker
    }
}
