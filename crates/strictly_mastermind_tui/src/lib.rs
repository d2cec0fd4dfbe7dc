//! Terminal front end for Strictly Mastermind
//!
//! Loads `mastermind.toml`, generates the palette and runs one or two player
//! games in a ratatui terminal UI. [`tui::app::App`] holds all state and key
//! handling; [`tui::ui::draw`] renders it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod tui;

pub use config::{AppConfig, ConfigError, LogSettings, PaletteSettings};
pub use tui::app::{App, AppAction, RowEntry, Stage};
