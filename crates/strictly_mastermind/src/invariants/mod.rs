//! First-class invariants for Mastermind.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod feedback_bounded;
pub mod history_consistent;
pub mod lives_accounted;

pub use feedback_bounded::FeedbackBoundedInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use lives_accounted::LivesAccountedInvariant;

/// All Mastermind invariants as a composable set.
pub type MastermindInvariants = (
    FeedbackBoundedInvariant,
    LivesAccountedInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, GameResult, GameSetup, Rules, Sequence};

    fn seq(symbols: &[usize]) -> Sequence {
        Sequence::new(symbols.to_vec(), &Rules::default()).expect("valid sequence")
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameSetup::new(Rules::default())
            .start_two_player()
            .set_secret(seq(&[0, 1, 2, 3]))
            .expect("valid secret");
        assert!(MastermindInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let guesses = vec![seq(&[1, 0, 2, 4]), seq(&[5, 5, 5, 5]), seq(&[0, 1, 3, 2])];
        match GameInProgress::replay(Rules::default(), seq(&[0, 1, 2, 3]), &guesses) {
            Ok(GameResult::InProgress(game)) => {
                assert!(MastermindInvariants::check_all(&game).is_ok());
            }
            _ => panic!("Expected in-progress game"),
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let guesses = vec![seq(&[1, 0, 2, 4])];
        let Ok(GameResult::InProgress(mut game)) =
            GameInProgress::replay(Rules::default(), seq(&[0, 1, 2, 3]), &guesses)
        else {
            panic!("Expected in-progress game");
        };
        game.lives_remaining = 0;
        game.secret = seq(&[4, 4, 4, 4]);

        let violations = MastermindInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameSetup::new(Rules::default())
            .start_two_player()
            .set_secret(seq(&[0, 1, 2, 3]))
            .expect("valid secret");

        type TwoInvariants = (FeedbackBoundedInvariant, LivesAccountedInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
