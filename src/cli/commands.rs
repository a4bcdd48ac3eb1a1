//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate as generate_completions;
use colored::Colorize;
use indicatif::ProgressBar;
use std::io;
use tracing::debug;

use super::Cli;
use crate::config::{self, ConfigFile, Settings};
use crate::generator::{DryRunInvoker, GenerateResult, PlaylistEngine, ProcessInvoker};
use crate::library;

/// Generate the requested playlists
pub fn generate(cli: Cli) -> Result<()> {
    let suffix = match &cli.suffix {
        Some(suffix) => suffix.clone(),
        None => {
            let argv0 = std::env::args().next();
            config::program_suffix(argv0.as_deref())
        }
    };

    let file = ConfigFile::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let settings = Settings::resolve(&cli, &file, suffix)?;
    debug!("Settings: {:?}", settings);

    println!(
        "{}",
        format!(
            "Scanning {} for *{} files...",
            settings.root.display(),
            settings.extension
        )
        .cyan()
    );
    let tracks = library::scan(&settings.root, &settings.extension)?;
    println!("Found {} candidate seed tracks.", tracks.len());
    println!();

    let mut rng = rand::thread_rng();
    let result = if settings.dry_run {
        let mut engine = PlaylistEngine::new(&settings, &tracks, DryRunInvoker::default());
        engine.generate(&mut rng, &ProgressBar::hidden())?
    } else {
        let progress = ProgressBar::new(u64::from(settings.playlist_count));
        let mut engine = PlaylistEngine::new(&settings, &tracks, ProcessInvoker::new());
        let result = engine.generate(&mut rng, &progress);
        progress.finish_and_clear();
        result?
    };

    print_summary(&settings, &result);
    Ok(())
}

fn print_summary(settings: &Settings, result: &GenerateResult) {
    println!();
    if settings.dry_run {
        println!(
            "{}",
            format!("[DRY RUN] Would generate {} playlist(s):", result.playlists.len()).yellow()
        );
    } else {
        println!("{}", "Playlists generated!".green().bold());
    }

    for request in &result.playlists {
        println!("  {}", request.playlist.display());
        println!("    seed: {}", request.seed.display());
    }
}

/// Handle the `--completions` flag
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate_completions(shell, &mut cmd, "rand-playlist", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    /// Library with a single track, a generator script logging its calls, and an empty config
    fn fixture() -> (tempfile::TempDir, tempfile::TempDir) {
        let library = tempfile::tempdir().unwrap();
        fs::create_dir_all(library.path().join("My Band/Album")).unwrap();
        fs::write(library.path().join("My Band/Album/track1.mp3"), b"").unwrap();

        let work = tempfile::tempdir().unwrap();
        fs::write(
            work.path().join("gen.sh"),
            "echo \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n",
        )
        .unwrap();
        fs::write(work.path().join("config.json"), "{}").unwrap();

        (library, work)
    }

    fn cli(library: &tempfile::TempDir, work: &tempfile::TempDir, extra: &[&str]) -> Cli {
        let generator = format!("sh {}", work.path().join("gen.sh").display());
        let config = work.path().join("config.json");
        let mut args = vec![
            "rand-playlist".to_string(),
            "-r".to_string(),
            library.path().display().to_string(),
            "-g".to_string(),
            generator,
            "-c".to_string(),
            config.display().to_string(),
            "--suffix".to_string(),
            "rand-playlist".to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_generator_runs_once_per_playlist() {
        let (library, work) = fixture();
        generate(cli(&library, &work, &["-p", "3"])).unwrap();

        let log = fs::read_to_string(work.path().join("calls.log")).unwrap();
        let calls: Vec<&str> = log.lines().collect();
        assert_eq!(calls.len(), 3);

        let root = library.path().canonicalize().unwrap();
        let seed = root.join("My Band/Album/track1.mp3");
        let playlist = root.join("My_Band-rand-playlist.m3u");
        for call in calls {
            assert!(call.starts_with("Pickles mp3tovec --lookback 3 --nsongs 40 --noise 0"));
            assert!(call.contains(&format!("--playlist {}", playlist.display())));
            assert!(call.ends_with(&format!("--inputsong {}", seed.display())));
        }
    }

    #[test]
    fn test_dry_run_does_not_invoke() {
        let (library, work) = fixture();
        generate(cli(&library, &work, &["-p", "2", "--dry-run"])).unwrap();
        assert!(!work.path().join("calls.log").exists());
    }

    #[test]
    fn test_no_matches_stops_before_generator() {
        let (library, work) = fixture();
        let err = generate(cli(&library, &work, &["-e", ".flac"])).unwrap_err();
        assert!(err.to_string().contains(".flac"));
        assert!(!work.path().join("calls.log").exists());
    }

    #[test]
    fn test_generator_failure_propagates() {
        let (library, work) = fixture();
        fs::write(work.path().join("gen.sh"), "exit 4\n").unwrap();
        let err = generate(cli(&library, &work, &["-p", "3"])).unwrap_err();
        assert!(err.to_string().contains("playlist 1 of 3"));
    }
}
