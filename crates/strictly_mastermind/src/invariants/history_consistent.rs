//! History consistency invariant: recorded feedback matches the secret.

use super::Invariant;
use crate::GameInProgress;
use crate::rules;

/// Invariant: every turn's feedback equals a fresh score of its guess, and
/// no recorded guess equals the secret.
///
/// A guess equal to the secret ends the game, so it can never sit in the
/// history of a game still in progress.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().iter().all(|turn| {
            turn.feedback() == rules::score(turn.guess(), &game.secret)
                && !rules::is_solved(turn.guess(), &game.secret)
        })
    }

    fn description() -> &'static str {
        "Recorded feedback matches rescoring and no winning guess is pending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, Rules, Sequence};

    fn seq(symbols: &[usize]) -> Sequence {
        Sequence::new(symbols.to_vec(), &Rules::default()).expect("valid sequence")
    }

    #[test]
    fn test_replayed_history_holds() {
        let guesses = vec![seq(&[1, 0, 2, 4]), seq(&[0, 0, 0, 0])];
        match GameInProgress::replay(Rules::default(), seq(&[0, 1, 2, 3]), &guesses) {
            Ok(GameResult::InProgress(game)) => {
                assert!(HistoryConsistentInvariant::holds(&game));
                assert_eq!(game.history().len(), 2);
            }
            _ => panic!("Expected in-progress game"),
        }
    }

    #[test]
    fn test_swapped_secret_violates() {
        let guesses = vec![seq(&[1, 0, 2, 4])];
        if let Ok(GameResult::InProgress(mut game)) =
            GameInProgress::replay(Rules::default(), seq(&[0, 1, 2, 3]), &guesses)
        {
            game.secret = seq(&[1, 0, 2, 4]);
            assert!(!HistoryConsistentInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }
}
