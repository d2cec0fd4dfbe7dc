//! Front-end configuration loaded from `mastermind.toml`.
//!
//! ```toml
//! [rules]
//! number_options = 6
//! row_size = 4
//! starting_lives = 10
//!
//! [palette]
//! channel_range = 255
//! initial_tolerance = 100
//! attempts_per_tolerance = 32
//! seed = 42
//!
//! [log]
//! file = "mastermind.log"
//! filter = "info"
//! ```
//!
//! Every section and field is optional.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strictly_mastermind::{PaletteGenerator, Rules};
use tracing::{debug, info, instrument};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mastermind.toml";

/// Full front-end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Palette size, row length and lives.
    rules: Rules,
    /// Palette generation.
    palette: PaletteSettings,
    /// Log destination.
    log: LogSettings,
}

/// `[palette]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Generator parameters.
    #[serde(flatten)]
    generator: PaletteGenerator,
    /// Fixed RNG seed; random when absent.
    seed: Option<u64>,
}

impl PaletteSettings {
    /// RNG for palette and secret: seeded if configured, otherwise from the OS.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// File the TUI writes its log to.
    file: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("mastermind.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// the `[rules]` section is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            options = config.rules.number_options(),
            row_size = config.rules.row_size(),
            lives = config.rules.starting_lives(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Like [`AppConfig::from_file`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is unreadable or invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            info!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Replaces the number of lives.
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.rules = self.rules.with_starting_lives(lives);
        self
    }

    /// Replaces the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.palette.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = toml::from_str("").expect("valid config");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_palette_section_flattens_generator() {
        let config: AppConfig = toml::from_str(
            r#"
[palette]
channel_range = 128
seed = 9
"#,
        )
        .expect("valid config");
        assert_eq!(config.palette().generator().channel_range(), 128);
        assert_eq!(config.palette().generator().initial_tolerance(), 100);
        assert_eq!(*config.palette().seed(), Some(9));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_starting_lives(3).with_seed(5);
        assert_eq!(config.rules().starting_lives(), 3);
        assert_eq!(*config.palette().seed(), Some(5));
    }
}
