//! Strictly Mastermind - terminal entry point

#![warn(missing_docs)]

use std::io;

use anyhow::Result;
use clap::Parser;
use strictly_mastermind_tui::AppConfig;
use strictly_mastermind_tui::cli::{Cli, Command, PlayArgs};
use strictly_mastermind_tui::tui;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args),
        Command::Palette {
            config,
            count,
            seed,
            json,
        } => {
            let mut config = AppConfig::load_or_default(config)?;
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_palette(&config, count, json)
        }
    }
}

/// Play in the terminal.
fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(lives) = args.lives {
        config = config.with_starting_lives(lives);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    tui::init_file_logging(config.log())?;
    info!(config = %args.config.display(), "Configuration resolved");
    tui::run(&config)
}

/// Print a generated palette to stdout, logging to stderr.
#[instrument(skip(config))]
fn run_palette(config: &AppConfig, count: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let count = count.unwrap_or(config.rules().number_options());
    let mut rng = config.palette().rng();
    let palette = config.palette().generator().generate(count, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
    } else {
        for (i, colour) in palette.iter().enumerate() {
            println!("{:>3}  {}", i + 1, colour);
        }
        info!(tolerance = palette.tolerance(), "Palette printed");
    }
    Ok(())
}
