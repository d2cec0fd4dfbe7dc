//! First-class turn records for Mastermind.
//!
//! A guess is only ever stored together with the feedback it earned, so the
//! history can be rendered or audited without rescoring.

use serde::Serialize;
use tracing::instrument;

use crate::sequence::{Sequence, SequenceError};
use crate::types::Feedback;

/// A scored guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Turn {
    guess: Sequence,
    feedback: Feedback,
}

impl Turn {
    /// Scores `guess` against `secret` and records the result.
    #[instrument(skip(secret))]
    pub fn scored(guess: Sequence, secret: &Sequence) -> Self {
        let feedback = guess.score(secret);
        Self { guess, feedback }
    }

    /// The submitted guess.
    pub fn guess(&self) -> &Sequence {
        &self.guess
    }

    /// Feedback for the guess.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.guess, self.feedback)
    }
}

/// Error that can occur when validating or applying a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The guess does not fit the game's rules.
    #[display("Invalid guess: {}", _0)]
    Invalid(SequenceError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuessError::Invalid(e) => Some(e),
            GuessError::InvariantViolation(_) => None,
        }
    }
}
