//! Strictly Mastermind - pure code-breaking game logic
//!
//! A hidden row of colours is fixed (at random, or by a second player) and
//! the guesser submits rows until one matches exactly or lives run out. After
//! each guess the game reports how many guessed colours occur anywhere in the
//! secret and how many sit in the right place.
//!
//! # Architecture
//!
//! - **Palette**: procedurally generated, mutually distinguishable colours
//! - **Sequence / rules**: validated rows and pure scoring functions
//! - **Typestate**: one type per game phase, consuming transitions
//! - **Session**: runtime wrapper exposing discrete calls for front ends
//! - **Contracts / invariants**: pre- and postconditions on every guess
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_mastermind::{GameSession, Mode, Rules, SessionState};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut session = GameSession::new(Rules::default());
//! session.choose_mode(Mode::TwoPlayer, &mut rng)?;
//! session.set_secret(vec![0, 1, 2, 3])?;
//!
//! let transition = session.submit_guess(vec![1, 0, 2, 4])?;
//! assert_eq!(*transition.state(), SessionState::AwaitingGuess);
//! assert_eq!(
//!     transition.feedback().map(|f| f.to_string()).as_deref(),
//!     Some("3 counters have the right colour, 1 in the right place"),
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod phases;
mod sequence;
mod session;
mod types;
mod typestate;

pub mod contracts;
pub mod invariants;
pub mod palette;
pub mod rules;

pub use action::{GuessError, Turn};
pub use config::{Rules, RulesError};
pub use palette::{Colour, Palette, PaletteError, PaletteGenerator, generate_palette};
pub use phases::{Mode, Outcome, SessionState};
pub use sequence::{Sequence, SequenceError};
pub use session::{GameSession, SessionError, Transition, lives_text};
pub use types::Feedback;
pub use typestate::{GameAwaitingSecret, GameFinished, GameInProgress, GameResult, GameSetup};
