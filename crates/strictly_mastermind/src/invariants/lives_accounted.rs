//! Lives accounting invariant: one life per wrong guess.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: `lives_remaining + history.len() == starting_lives`.
///
/// While a game is in progress every recorded turn was a wrong guess that
/// cost exactly one life.
pub struct LivesAccountedInvariant;

impl Invariant<GameInProgress> for LivesAccountedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let spent = game.history().len() as u64;
        u64::from(game.lives_remaining()) + spent == u64::from(game.rules().starting_lives())
    }

    fn description() -> &'static str {
        "Lives remaining plus wrong guesses equals starting lives"
    }
}
