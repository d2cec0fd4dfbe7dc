//! Injected game constants.
//!
//! The session never hard-codes the palette size, row length or number of
//! lives. A front end loads these (from a file, flags, or defaults) and hands
//! a validated [`Rules`] to [`GameSetup`](crate::GameSetup) or
//! [`GameSession`](crate::GameSession).

use serde::{Deserialize, Serialize};
use tracing::instrument;

const DEFAULT_NUMBER_OPTIONS: usize = 6;
const DEFAULT_ROW_SIZE: usize = 4;
const DEFAULT_STARTING_LIVES: u32 = 10;

/// Configuration constants for one round of Mastermind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRules")]
pub struct Rules {
    number_options: usize,
    row_size: usize,
    starting_lives: u32,
}

impl Rules {
    /// Creates a validated rule set.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if there are no symbols to choose from or the
    /// row is empty.
    #[instrument]
    pub fn new(
        number_options: usize,
        row_size: usize,
        starting_lives: u32,
    ) -> Result<Self, RulesError> {
        if number_options == 0 {
            return Err(RulesError::NoOptions);
        }
        if row_size == 0 {
            return Err(RulesError::EmptyRow);
        }
        Ok(Self {
            number_options,
            row_size,
            starting_lives,
        })
    }

    /// Number of distinct symbols (palette size).
    pub fn number_options(&self) -> usize {
        self.number_options
    }

    /// Length of the secret and of every guess.
    pub fn row_size(&self) -> usize {
        self.row_size
    }

    /// Wrong guesses tolerated before the next one loses.
    pub fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    /// Returns a copy with a different number of lives.
    pub fn with_starting_lives(self, starting_lives: u32) -> Self {
        Self {
            starting_lives,
            ..self
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            number_options: DEFAULT_NUMBER_OPTIONS,
            row_size: DEFAULT_ROW_SIZE,
            starting_lives: DEFAULT_STARTING_LIVES,
        }
    }
}

/// Unvalidated shape used while deserializing.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawRules {
    number_options: usize,
    row_size: usize,
    starting_lives: u32,
}

impl Default for RawRules {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            number_options: rules.number_options,
            row_size: rules.row_size,
            starting_lives: rules.starting_lives,
        }
    }
}

impl TryFrom<RawRules> for Rules {
    type Error = RulesError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        Rules::new(raw.number_options, raw.row_size, raw.starting_lives)
    }
}

/// Invalid rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// `number_options` was zero.
    #[display("number_options must be at least 1")]
    NoOptions,

    /// `row_size` was zero.
    #[display("row_size must be at least 1")]
    EmptyRow,
}

impl std::error::Error for RulesError {}
