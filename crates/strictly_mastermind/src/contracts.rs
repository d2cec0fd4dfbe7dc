//! Contract-based validation for Mastermind.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use tracing::{instrument, warn};

use crate::action::GuessError;
use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::sequence::Sequence;
use crate::typestate::GameInProgress;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the guess has the game's row length and symbol range.
pub struct GuessConforms;

impl GuessConforms {
    /// Checks the guess against the game's rules.
    #[instrument(skip_all)]
    pub fn check(guess: &Sequence, game: &GameInProgress) -> Result<(), GuessError> {
        guess.conforms_to(game.rules()).map_err(|e| {
            warn!(error = %e, "Guess does not fit rules");
            GuessError::Invalid(e)
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - Guess conforms to the rules
///
/// Postconditions:
/// - Feedback stays within bounds
/// - Lives account for every wrong guess
/// - History agrees with rescoring against the secret
pub struct GuessContract;

impl Contract<GameInProgress, Sequence> for GuessContract {
    fn pre(game: &GameInProgress, guess: &Sequence) -> Result<(), GuessError> {
        GuessConforms::check(guess, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), GuessError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one turn".to_string(),
            ));
        }
        MastermindInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rules;
    use crate::typestate::{GameResult, GameSetup};

    fn start(secret: &[usize]) -> GameInProgress {
        let rules = Rules::default();
        GameSetup::new(rules)
            .start_two_player()
            .set_secret(Sequence::new(secret.to_vec(), &rules).expect("valid"))
            .expect("valid secret")
    }

    #[test]
    fn test_precondition_conforming_guess() {
        let game = start(&[0, 1, 2, 3]);
        let guess = Sequence::new(vec![3, 3, 3, 3], game.rules()).expect("valid");
        assert!(GuessContract::pre(&game, &guess).is_ok());
    }

    #[test]
    fn test_precondition_foreign_guess() {
        let game = start(&[0, 1, 2, 3]);
        let long = Rules::new(6, 5, 10).expect("valid rules");
        let guess = Sequence::new(vec![0, 0, 0, 0, 0], &long).expect("valid");
        assert!(matches!(
            GuessContract::pre(&game, &guess),
            Err(GuessError::Invalid(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let game = start(&[0, 1, 2, 3]);
        let guess = Sequence::new(vec![1, 0, 2, 4], game.rules()).expect("valid");
        if let Ok(GameResult::InProgress(after)) = game.clone().submit_guess(guess) {
            assert!(GuessContract::post(&game, &after).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = start(&[0, 1, 2, 3]);
        let guess = Sequence::new(vec![1, 0, 2, 4], game.rules()).expect("valid");
        if let Ok(GameResult::InProgress(mut after)) = game.clone().submit_guess(guess) {
            // Refund the life that was spent.
            after.lives_remaining += 1;
            assert!(GuessContract::post(&game, &after).is_err());
        } else {
            panic!("Expected in-progress game");
        }
    }
}
