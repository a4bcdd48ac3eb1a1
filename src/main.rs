//! rand-playlist - Build playlists from random seed tracks

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod generator;
mod library;

use cli::Cli;

fn main() -> Result<()> {
    // Usage errors exit 1, help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    let filter = if cli.debug {
        "rand_playlist=debug"
    } else {
        "rand_playlist=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        cli::commands::completion(shell);
        return Ok(());
    }

    cli::commands::generate(cli)?;

    Ok(())
}
