//! weather-to-speech: read today's forecast out loud.
//!
//! Usage:
//!   weather-to-speech [--city <name>] [--lat <deg> --lon <deg>] [--api_key <key>]
//!   weather-to-speech --output <path>      save the audio instead of playing it
//!   weather-to-speech --version
//!
//! Exit status: 0 on success, `--version` and `--help`; 1 on any error.

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use weather_to_speech::config::{version_text, Cli, Environment, Settings};
use weather_to_speech::{FileSink, Player, RodioPlayer, Runner};

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if cli.version {
        println!("{}", version_text());
        return ExitCode::SUCCESS;
    }

    init_tracing();

    let settings = match Settings::from_cli(&cli, &Environment::capture()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let player: Arc<dyn Player> = match cli.output {
        Some(dest) => Arc::new(FileSink::new(dest)),
        None => Arc::new(RodioPlayer::new()),
    };

    match Runner::new(settings, player).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
