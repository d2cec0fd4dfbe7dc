//! Phase-specific typestate structs for Mastermind.
//!
//! Each phase is its own type holding only the data that phase has. A game
//! in progress always has a secret; a finished game always has an
//! [`Outcome`], never `Option<Outcome>`. Transitions consume the old phase.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::action::{GuessError, Turn};
use crate::config::Rules;
use crate::contracts::{Contract, GuessContract};
use crate::phases::Outcome;
use crate::rules;
use crate::sequence::{Sequence, SequenceError};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game waiting for a mode: no secret, no history.
#[derive(Debug, Clone)]
pub struct GameSetup {
    rules: Rules,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// One-player start: samples a random secret.
    #[instrument(skip(self, rng))]
    pub fn start_random<R: Rng>(self, rng: &mut R) -> GameInProgress {
        let secret = Sequence::random(&self.rules, rng);
        debug!("Random secret drawn");
        GameInProgress::new(self.rules, secret)
    }

    /// Two-player start: waits for the setting player's secret.
    #[instrument(skip(self))]
    pub fn start_two_player(self) -> GameAwaitingSecret {
        GameAwaitingSecret { rules: self.rules }
    }
}

// ─────────────────────────────────────────────────────────────
//  AwaitingSecret Phase
// ─────────────────────────────────────────────────────────────

/// Two-player game waiting for its secret.
#[derive(Debug, Clone)]
pub struct GameAwaitingSecret {
    rules: Rules,
}

impl GameAwaitingSecret {
    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Fixes the secret and starts guessing.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError`] if the secret does not fit this game's rules.
    #[instrument(skip_all)]
    pub fn set_secret(self, secret: Sequence) -> Result<GameInProgress, SequenceError> {
        secret.conforms_to(&self.rules)?;
        info!("Secret set by player");
        Ok(GameInProgress::new(self.rules, secret))
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game accepting guesses.
///
/// Invariants enforced by type:
/// - the secret is present and never changes
/// - every turn in history is a wrong guess (a right one finishes the game)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) rules: Rules,
    pub(crate) secret: Sequence,
    pub(crate) lives_remaining: u32,
    pub(crate) history: Vec<Turn>,
}

impl GameInProgress {
    fn new(rules: Rules, secret: Sequence) -> Self {
        Self {
            lives_remaining: rules.starting_lives(),
            rules,
            secret,
            history: Vec::new(),
        }
    }

    /// Submits a guess, consuming self and returning the next phase.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::Invalid`] if the guess does not fit the rules.
    #[instrument(skip(self, guess), fields(guess = %guess, lives = self.lives_remaining))]
    pub fn submit_guess(self, guess: Sequence) -> Result<GameResult, GuessError> {
        GuessContract::pre(&self, &guess)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let solved = rules::is_solved(&guess, &game.secret);
        let turn = Turn::scored(guess, &game.secret);
        debug!(feedback = %turn.feedback(), "Guess scored");
        game.history.push(turn);

        if solved {
            info!(attempts = game.history.len(), "Secret guessed");
            return Ok(GameResult::Finished(game.finish(Outcome::Won)));
        }

        match rules::spend_life(game.lives_remaining) {
            Some(lives) => game.lives_remaining = lives,
            None => {
                info!(attempts = game.history.len(), "Out of lives");
                return Ok(GameResult::Finished(game.finish(Outcome::Lost)));
            }
        }

        #[cfg(debug_assertions)]
        GuessContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            rules: self.rules,
            secret: self.secret,
            lives_remaining: self.lives_remaining,
            history: self.history,
            outcome,
        }
    }

    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Wrong guesses left before the next one loses.
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    /// Scored guesses so far.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Replays guesses against a fixed secret.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] for the first guess that fails, or
    /// [`GuessError::Invalid`] if the secret itself does not fit the rules.
    #[instrument(skip(secret, guesses), fields(guess_count = guesses.len()))]
    pub fn replay(
        rules: Rules,
        secret: Sequence,
        guesses: &[Sequence],
    ) -> Result<GameResult, GuessError> {
        let mut game = GameSetup::new(rules)
            .start_two_player()
            .set_secret(secret)
            .map_err(GuessError::Invalid)?;

        for guess in guesses {
            match game.submit_guess(guess.clone())? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is always present and the secret may be revealed.
#[derive(Debug, Clone)]
pub struct GameFinished {
    rules: Rules,
    secret: Sequence,
    lives_remaining: u32,
    history: Vec<Turn>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The secret, revealed now that the game is over.
    pub fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Lives left when the game ended (0 after a loss).
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    /// Scored guesses, including the final one.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Starts over with the same rules (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.rules)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of submitting a guess.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// The turn that produced this result.
    pub fn last_turn(&self) -> Option<&Turn> {
        match self {
            GameResult::InProgress(g) => g.history().last(),
            GameResult::Finished(g) => g.history().last(),
        }
    }
}
