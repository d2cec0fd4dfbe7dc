//! Game rules for Mastermind.
//!
//! Pure functions for scoring guesses and deciding how a turn ends. Rules
//! are kept apart from the session types so contracts and invariants can
//! reuse them.

pub mod lives;
pub mod scoring;
pub mod solved;

pub use lives::spend_life;
pub use scoring::{colour_matches, position_matches, score};
pub use solved::is_solved;
