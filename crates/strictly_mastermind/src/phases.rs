//! Phase labels and outcomes for the session state machine.
//!
//! The typestate structs in [`typestate`](crate::typestate) carry the data of
//! each phase; these enums name the phases for callers that only need to
//! know where a session is (renderers, logs, error messages).

use serde::{Deserialize, Serialize};

/// How the secret is established.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mode {
    /// One player: the secret is sampled uniformly at random.
    #[strum(to_string = "1 player game")]
    Random,
    /// Two players: one player sets the secret, the other guesses.
    #[strum(to_string = "2 player game")]
    TwoPlayer,
}

/// Where a session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum SessionState {
    /// Waiting for [`Mode`] selection.
    AwaitingMode,
    /// Two-player mode: waiting for the setting player's secret.
    AwaitingSecret,
    /// Waiting for the next guess.
    AwaitingGuess,
    /// The secret was guessed.
    Won,
    /// Lives ran out.
    Lost,
}

impl SessionState {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The guesser matched the secret exactly.
    Won,
    /// The guesser ran out of lives.
    Lost,
}

impl Outcome {
    /// Terminal session state for this outcome.
    pub fn state(self) -> SessionState {
        match self {
            Outcome::Won => SessionState::Won,
            Outcome::Lost => SessionState::Lost,
        }
    }

    /// Message shown when the game ends.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "you got it",
            Outcome::Lost => "Game over. Correct answer was",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
