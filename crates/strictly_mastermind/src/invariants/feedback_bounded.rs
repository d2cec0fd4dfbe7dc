//! Feedback bounds invariant: counts never exceed what a row allows.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: every recorded feedback has
/// `position_matches <= colour_matches <= row_size`.
pub struct FeedbackBoundedInvariant;

impl Invariant<GameInProgress> for FeedbackBoundedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let row_size = game.rules().row_size();
        game.history()
            .iter()
            .all(|turn| turn.feedback().is_bounded(row_size))
    }

    fn description() -> &'static str {
        "Feedback counts are bounded by the row size"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, Rules, Sequence};

    #[test]
    fn test_holds_across_random_guesses() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let rules = Rules::new(3, 5, 100).expect("valid rules");
        let mut rng = StdRng::seed_from_u64(21);
        let secret = Sequence::random(&rules, &mut rng);
        let guesses: Vec<Sequence> = (0..30)
            .map(|_| Sequence::random(&rules, &mut rng))
            .filter(|g| *g != secret)
            .collect();

        match GameInProgress::replay(rules, secret, &guesses) {
            Ok(GameResult::InProgress(game)) => assert!(FeedbackBoundedInvariant::holds(&game)),
            _ => panic!("Expected in-progress game"),
        }
    }
}
