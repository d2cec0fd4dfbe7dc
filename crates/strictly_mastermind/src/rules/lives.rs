//! Life accounting.

use tracing::instrument;

/// Spends one life after a wrong guess.
///
/// Returns the lives left, or `None` when none were left to spend, which
/// ends the game. A session starting with `n` lives therefore loses on the
/// `n + 1`-th wrong guess.
#[instrument]
pub fn spend_life(lives_remaining: u32) -> Option<u32> {
    lives_remaining.checked_sub(1)
}
