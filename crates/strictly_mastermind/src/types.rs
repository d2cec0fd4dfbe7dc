//! Core domain types for Mastermind.

use serde::{Deserialize, Serialize};

/// Result of scoring one guess against the secret.
///
/// Always satisfies `position_matches <= colour_matches <= row length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    colour_matches: usize,
    position_matches: usize,
}

impl Feedback {
    /// Only scoring builds feedback.
    pub(crate) fn new(colour_matches: usize, position_matches: usize) -> Self {
        Self {
            colour_matches,
            position_matches,
        }
    }

    /// Guess positions whose colour occurs anywhere in the secret.
    pub fn colour_matches(&self) -> usize {
        self.colour_matches
    }

    /// Guess positions that equal the secret at the same position.
    pub fn position_matches(&self) -> usize {
        self.position_matches
    }

    /// True when every position matched.
    pub fn is_solved(&self, row_size: usize) -> bool {
        self.position_matches == row_size
    }

    /// True if the counts are consistent with a row of `row_size`.
    pub fn is_bounded(&self, row_size: usize) -> bool {
        self.position_matches <= self.colour_matches && self.colour_matches <= row_size
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} counters have the right colour, {} in the right place",
            self.colour_matches, self.position_matches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Feedback::new(3, 1).to_string(),
            "3 counters have the right colour, 1 in the right place"
        );
    }

    #[test]
    fn test_bounds() {
        assert!(Feedback::new(3, 1).is_bounded(4));
        assert!(!Feedback::new(1, 3).is_bounded(4));
        assert!(!Feedback::new(5, 0).is_bounded(4));
    }

    #[test]
    fn test_solved() {
        assert!(Feedback::new(4, 4).is_solved(4));
        assert!(!Feedback::new(4, 3).is_solved(4));
    }
}
