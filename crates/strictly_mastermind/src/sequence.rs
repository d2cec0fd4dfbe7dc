//! Validated rows of symbol indices.

use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use crate::config::Rules;
use crate::rules;
use crate::types::Feedback;

/// An ordered row of symbol indices: the secret or a single guess.
///
/// A `Sequence` can only be built through [`Sequence::new`] or
/// [`Sequence::random`], so every instance has the row length and symbol
/// range of the [`Rules`] it was built for. It is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    symbols: Vec<usize>,
}

impl Sequence {
    /// Validates `symbols` against the rules.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::WrongLength`] if the row is not `row_size`
    /// long, or [`SequenceError::SymbolOutOfRange`] for the first index that
    /// is not below `number_options`.
    #[instrument(skip(rules), fields(row_size = rules.row_size(), options = rules.number_options()))]
    pub fn new(symbols: Vec<usize>, rules: &Rules) -> Result<Self, SequenceError> {
        check(&symbols, rules)?;
        Ok(Self { symbols })
    }

    /// Samples `row_size` independent uniform symbols.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rules: &Rules, rng: &mut R) -> Self {
        let symbols = (0..rules.row_size())
            .map(|_| rng.random_range(0..rules.number_options()))
            .collect();
        Self { symbols }
    }

    /// Rechecks this sequence against a (possibly different) rule set.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::new`].
    pub fn conforms_to(&self, rules: &Rules) -> Result<(), SequenceError> {
        check(&self.symbols, rules)
    }

    /// Symbol indices in order.
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Row length.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True for an empty row. Never the case for a validated sequence.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Scores this sequence as a guess against `secret`.
    pub fn score(&self, secret: &Sequence) -> Feedback {
        rules::score(self, secret)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<String> = self.symbols.iter().map(|s| (s + 1).to_string()).collect();
        write!(f, "[{}]", labels.join(" "))
    }
}

fn check(symbols: &[usize], rules: &Rules) -> Result<(), SequenceError> {
    if symbols.len() != rules.row_size() {
        return Err(SequenceError::WrongLength {
            expected: rules.row_size(),
            actual: symbols.len(),
        });
    }
    if let Some((position, &symbol)) = symbols
        .iter()
        .enumerate()
        .find(|(_, s)| **s >= rules.number_options())
    {
        return Err(SequenceError::SymbolOutOfRange {
            position,
            symbol,
            options: rules.number_options(),
        });
    }
    Ok(())
}

/// A row that does not fit the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SequenceError {
    /// The row has the wrong number of symbols.
    #[display("Expected {expected} symbols, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Submitted length.
        actual: usize,
    },

    /// A symbol index is not a palette index.
    #[display("Symbol {symbol} at position {position} is outside 0..{options}")]
    SymbolOutOfRange {
        /// Offending position.
        position: usize,
        /// Offending symbol.
        symbol: usize,
        /// Palette size.
        options: usize,
    },
}

impl std::error::Error for SequenceError {}
