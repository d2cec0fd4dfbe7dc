//! Win detection.

use tracing::instrument;

use crate::sequence::Sequence;

/// True if `guess` equals `secret` element-wise.
#[instrument(skip_all)]
pub fn is_solved(guess: &Sequence, secret: &Sequence) -> bool {
    guess.symbols() == secret.symbols()
}
