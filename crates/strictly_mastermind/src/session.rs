//! Runtime session wrapper over the typestate phases.
//!
//! Front ends drive a round through discrete calls ([`GameSession::choose_mode`],
//! [`GameSession::set_secret`], [`GameSession::submit_guess`]) without
//! tracking which phase type they hold. Each call either returns a
//! [`Transition`] describing the new state or a [`SessionError`] and leaves
//! the session exactly as it was.

use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::action::{GuessError, Turn};
use crate::config::Rules;
use crate::phases::{Mode, SessionState};
use crate::sequence::{Sequence, SequenceError};
use crate::types::Feedback;
use crate::typestate::{GameAwaitingSecret, GameFinished, GameInProgress, GameResult, GameSetup};

/// The phase a session currently holds.
#[derive(Debug, Clone)]
enum Phase {
    AwaitingMode(GameSetup),
    AwaitingSecret(GameAwaitingSecret),
    AwaitingGuess(GameInProgress),
    Finished(GameFinished),
}

impl Phase {
    fn state(&self) -> SessionState {
        match self {
            Phase::AwaitingMode(_) => SessionState::AwaitingMode,
            Phase::AwaitingSecret(_) => SessionState::AwaitingSecret,
            Phase::AwaitingGuess(_) => SessionState::AwaitingGuess,
            Phase::Finished(g) => g.outcome().state(),
        }
    }
}

/// One round of Mastermind, from mode selection to win or loss.
#[derive(Debug, Clone)]
pub struct GameSession {
    rules: Rules,
    phase: Phase,
}

/// Snapshot emitted after every successful session call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Transition {
    /// State after the call.
    state: SessionState,
    /// Lives left after the call.
    lives_remaining: u32,
    /// Feedback for the guess just submitted, if any.
    feedback: Option<Feedback>,
    /// Full guess history so far.
    history: Vec<Turn>,
    /// The secret, once the session has ended.
    revealed: Option<Sequence>,
}

impl Transition {
    /// Progress line, e.g. `"you have 3 lives left"`.
    pub fn progress_text(&self) -> String {
        lives_text(self.lives_remaining)
    }
}

/// Progress line for a number of lives.
pub fn lives_text(lives: u32) -> String {
    format!("you have {} lives left", lives)
}

impl GameSession {
    /// Creates a session waiting for a mode.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        info!("Creating new game session");
        Self {
            rules,
            phase: Phase::AwaitingMode(GameSetup::new(rules)),
        }
    }

    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.phase.state()
    }

    /// Lives left. Full before guessing starts, 0 after a loss.
    pub fn lives_remaining(&self) -> u32 {
        match &self.phase {
            Phase::AwaitingGuess(g) => g.lives_remaining(),
            Phase::Finished(g) => g.lives_remaining(),
            Phase::AwaitingMode(_) | Phase::AwaitingSecret(_) => self.rules.starting_lives(),
        }
    }

    /// Scored guesses in submission order.
    pub fn history(&self) -> &[Turn] {
        match &self.phase {
            Phase::AwaitingGuess(g) => g.history(),
            Phase::Finished(g) => g.history(),
            Phase::AwaitingMode(_) | Phase::AwaitingSecret(_) => &[],
        }
    }

    /// The secret, only once the session has ended.
    pub fn revealed_secret(&self) -> Option<&Sequence> {
        match &self.phase {
            Phase::Finished(g) => Some(g.secret()),
            _ => None,
        }
    }

    /// Selects how the secret is established.
    ///
    /// `Random` samples the secret from `rng` and starts guessing;
    /// `TwoPlayer` waits for [`GameSession::set_secret`].
    ///
    /// # Errors
    ///
    /// [`SessionError::SessionTerminated`] after the game ended, otherwise
    /// [`SessionError::InvalidState`] outside `AwaitingMode`.
    #[instrument(skip(self, rng), fields(state = %self.state()))]
    pub fn choose_mode<R: Rng>(&mut self, mode: Mode, rng: &mut R) -> Result<Transition, SessionError> {
        let Phase::AwaitingMode(setup) = &self.phase else {
            return Err(self.reject("choose_mode"));
        };
        let setup = setup.clone();
        self.phase = match mode {
            Mode::Random => Phase::AwaitingGuess(setup.start_random(rng)),
            Mode::TwoPlayer => Phase::AwaitingSecret(setup.start_two_player()),
        };
        info!(%mode, state = %self.state(), "Mode chosen");
        Ok(self.transition(None))
    }

    /// Fixes the secret in two-player mode.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidSecret`] for a malformed row,
    /// [`SessionError::SessionTerminated`] after the game ended, otherwise
    /// [`SessionError::InvalidState`] outside `AwaitingSecret`.
    #[instrument(skip(self, symbols), fields(state = %self.state()))]
    pub fn set_secret(&mut self, symbols: Vec<usize>) -> Result<Transition, SessionError> {
        let Phase::AwaitingSecret(game) = &self.phase else {
            return Err(self.reject("set_secret"));
        };
        let secret = Sequence::new(symbols, &self.rules).map_err(|e| {
            warn!(error = %e, "Rejected secret");
            SessionError::InvalidSecret(e)
        })?;
        let game = game.clone().set_secret(secret).map_err(SessionError::InvalidSecret)?;
        self.phase = Phase::AwaitingGuess(game);
        Ok(self.transition(None))
    }

    /// Submits one guess.
    ///
    /// # Errors
    ///
    /// [`SessionError::SessionTerminated`] after the game ended,
    /// [`SessionError::InvalidState`] before guessing starts, and
    /// [`SessionError::InvalidGuess`] for a malformed row.
    #[instrument(skip(self, symbols), fields(state = %self.state(), lives = self.lives_remaining()))]
    pub fn submit_guess(&mut self, symbols: Vec<usize>) -> Result<Transition, SessionError> {
        let Phase::AwaitingGuess(game) = &self.phase else {
            return Err(self.reject("submit_guess"));
        };
        let guess = Sequence::new(symbols, &self.rules).map_err(|e| {
            warn!(error = %e, "Rejected guess");
            SessionError::InvalidGuess(e)
        })?;

        let result = game.clone().submit_guess(guess)?;
        let feedback = result.last_turn().map(Turn::feedback);
        self.phase = match result {
            GameResult::InProgress(g) => Phase::AwaitingGuess(g),
            GameResult::Finished(g) => {
                info!(outcome = %g.outcome(), guesses = g.history().len(), "Session finished");
                Phase::Finished(g)
            }
        };
        debug!(state = %self.state(), ?feedback, "Guess applied");
        Ok(self.transition(feedback))
    }

    /// A fresh session with the same rules, back at mode selection.
    #[instrument(skip(self))]
    pub fn restart(&self) -> GameSession {
        GameSession::new(self.rules)
    }

    fn reject(&self, operation: &'static str) -> SessionError {
        let state = self.state();
        warn!(operation, %state, "Operation not allowed in this state");
        if state.is_terminal() {
            SessionError::SessionTerminated
        } else {
            SessionError::InvalidState { operation, state }
        }
    }

    fn transition(&self, feedback: Option<Feedback>) -> Transition {
        Transition {
            state: self.state(),
            lives_remaining: self.lives_remaining(),
            feedback,
            history: self.history().to_vec(),
            revealed: self.revealed_secret().cloned(),
        }
    }
}

/// Errors returned by [`GameSession`] operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The operation is not allowed in the current state.
    #[display("{operation} is not allowed while {state}")]
    InvalidState {
        /// Rejected operation.
        operation: &'static str,
        /// State at the time.
        state: SessionState,
    },

    /// The secret does not fit the rules.
    #[display("Invalid secret: {}", _0)]
    InvalidSecret(SequenceError),

    /// The guess does not fit the rules.
    #[display("Invalid guess: {}", _0)]
    InvalidGuess(SequenceError),

    /// The session already ended in a win or loss.
    #[display("Session has already ended")]
    SessionTerminated,

    /// A postcondition failed; indicates a bug rather than bad input.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidSecret(e) | SessionError::InvalidGuess(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GuessError> for SessionError {
    fn from(err: GuessError) -> Self {
        match err {
            GuessError::Invalid(e) => SessionError::InvalidGuess(e),
            GuessError::InvariantViolation(msg) => SessionError::InvariantViolation(msg),
        }
    }
}
