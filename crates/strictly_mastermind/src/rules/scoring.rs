//! Guess scoring.

use tracing::instrument;

use crate::sequence::Sequence;
use crate::types::Feedback;

/// Scores `guess` against `secret`.
///
/// Pure and deterministic: equal inputs always give equal feedback.
#[instrument(skip_all, fields(guess = %guess, secret_len = secret.len()))]
pub fn score(guess: &Sequence, secret: &Sequence) -> Feedback {
    Feedback::new(
        colour_matches(guess.symbols(), secret.symbols()),
        position_matches(guess.symbols(), secret.symbols()),
    )
}

/// Counts guess positions whose symbol occurs anywhere in `secret`.
///
/// This is a membership test per guess position, not a multiset
/// intersection: a symbol guessed twice counts twice even if the secret
/// holds it once.
pub fn colour_matches(guess: &[usize], secret: &[usize]) -> usize {
    guess.iter().filter(|&symbol| secret.contains(symbol)).count()
}

/// Counts positions where `guess` and `secret` hold the same symbol.
pub fn position_matches(guess: &[usize], secret: &[usize]) -> usize {
    guess
        .iter()
        .zip(secret)
        .filter(|(g, s)| g == s)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rules;

    fn seq(symbols: &[usize]) -> Sequence {
        Sequence::new(symbols.to_vec(), &Rules::default()).expect("valid sequence")
    }

    #[test]
    fn test_mixed_feedback() {
        let feedback = score(&seq(&[1, 0, 2, 4]), &seq(&[0, 1, 2, 3]));
        assert_eq!(feedback.colour_matches(), 3);
        assert_eq!(feedback.position_matches(), 1);
    }

    #[test]
    fn test_perfect_guess() {
        let secret = seq(&[5, 5, 0, 3]);
        let feedback = score(&secret, &secret);
        assert_eq!(feedback.colour_matches(), 4);
        assert_eq!(feedback.position_matches(), 4);
    }

    #[test]
    fn test_nothing_matches() {
        let feedback = score(&seq(&[4, 4, 5, 5]), &seq(&[0, 1, 2, 3]));
        assert_eq!(feedback.colour_matches(), 0);
        assert_eq!(feedback.position_matches(), 0);
    }

    #[test]
    fn test_repeated_guess_symbol_counts_each_time() {
        // The secret holds a single 0 but every guessed 0 counts.
        let feedback = score(&seq(&[0, 0, 0, 0]), &seq(&[0, 1, 2, 3]));
        assert_eq!(feedback.colour_matches(), 4);
        assert_eq!(feedback.position_matches(), 1);
    }

    #[test]
    fn test_repeated_secret_symbol_counts_once_per_guess_position() {
        let feedback = score(&seq(&[2, 1, 1, 1]), &seq(&[2, 2, 2, 2]));
        assert_eq!(feedback.colour_matches(), 1);
        assert_eq!(feedback.position_matches(), 1);
    }

    #[test]
    fn test_deterministic() {
        let guess = seq(&[3, 1, 4, 1]);
        let secret = seq(&[5, 1, 4, 3]);
        assert_eq!(score(&guess, &secret), score(&guess, &secret));
    }
}
