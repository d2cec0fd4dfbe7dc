//! Command-line interface for the `mastermind` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// Strictly Mastermind - guess the hidden row of colours
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "One or two player Mastermind in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Print a generated palette and exit
    Palette {
        /// Path to the config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Number of colours (defaults to the configured number of options)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed for a reproducible palette
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of one colour per line
        #[arg(long)]
        json: bool,
    },
}

/// Options for `play`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to the config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// RNG seed for a reproducible palette and secret
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of lives
    #[arg(long)]
    pub lives: Option<u32>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            seed: None,
            lives: None,
        }
    }
}
