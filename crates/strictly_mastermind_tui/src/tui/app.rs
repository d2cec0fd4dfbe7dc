//! Application state and key handling.
//!
//! [`App`] owns the [`GameSession`] and everything the screen needs, and maps
//! key presses onto session calls. It never touches the terminal, so tests
//! can drive a whole game with synthetic [`KeyEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use rand::rngs::StdRng;
use strictly_mastermind::{
    GameSession, Mode, Outcome, Palette, PaletteGenerator, Rules, SessionState, Transition,
    lives_text,
};
use tracing::{debug, info, instrument, warn};

/// Title screen prompt.
pub const MODE_PROMPT: &str = "press 1 or 2";

/// Shown before the setting player enters the secret.
pub const HANDOFF_NOTICE: &str = "P1 choose colours for P2 to guess, P2 look away";

/// Shown once the secret is set.
pub const SWAP_NOTICE: &str = "Swap players";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Mode selection.
    Title,
    /// Two-player hand-off before secret entry.
    Handoff,
    /// Setting player enters the secret.
    SecretEntry,
    /// Secret set, guesser takes over.
    SwapPlayers,
    /// Guesser enters rows.
    Guessing,
    /// Win or loss, secret revealed.
    Finished,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Stay,
    /// Leave the application.
    Quit,
}

// ─────────────────────────────────────────────────────────────
//  Row Entry
// ─────────────────────────────────────────────────────────────

/// A row being filled in, one slot at a time.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RowEntry {
    /// Chosen symbol per slot.
    slots: Vec<Option<usize>>,
    /// Slot the next colour goes into.
    cursor: usize,
    /// Colour picked by Space.
    highlighted: usize,
}

impl RowEntry {
    /// Empty row of `row_size` slots.
    pub fn new(row_size: usize) -> Self {
        Self {
            slots: vec![None; row_size],
            cursor: 0,
            highlighted: 0,
        }
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor + 1 < self.slots.len() {
            self.cursor += 1;
        }
    }

    fn highlight_previous(&mut self, options: usize) {
        self.highlighted = match self.highlighted {
            0 => options.saturating_sub(1),
            i => i - 1,
        };
    }

    fn highlight_next(&mut self, options: usize) {
        self.highlighted = (self.highlighted + 1) % options.max(1);
    }

    /// Puts `symbol` in the cursor slot and moves to the next empty slot.
    fn place(&mut self, symbol: usize) {
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            *slot = Some(symbol);
        }
        let len = self.slots.len();
        if let Some(next) = (1..len)
            .map(|offset| (self.cursor + offset) % len)
            .find(|&i| self.slots[i].is_none())
        {
            self.cursor = next;
        }
    }

    /// Clears the cursor slot, or the one before it if already empty.
    fn clear(&mut self) {
        if self.slots.get(self.cursor).is_some_and(Option::is_none) {
            self.move_left();
        }
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            *slot = None;
        }
    }

    /// The symbols, once every slot is filled.
    pub fn complete(&self) -> Option<Vec<usize>> {
        self.slots.iter().copied().collect()
    }

    fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
    }
}

// ─────────────────────────────────────────────────────────────
//  App
// ─────────────────────────────────────────────────────────────

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Symbol colours.
    palette: Palette,
    /// Current round.
    session: GameSession,
    /// Current screen.
    stage: Stage,
    /// Mode of the current round, once chosen.
    mode: Option<Mode>,
    /// Row under construction.
    entry: RowEntry,
    /// Status line.
    status_message: String,
    #[getter(skip)]
    rng: StdRng,
}

impl App {
    /// Creates the app and generates one colour per symbol.
    #[instrument(skip(generator, rng))]
    pub fn new(rules: Rules, generator: &PaletteGenerator, mut rng: StdRng) -> Self {
        let palette = generator.generate(rules.number_options(), &mut rng);
        info!(colours = palette.len(), tolerance = palette.tolerance(), "App ready");
        Self {
            palette,
            session: GameSession::new(rules),
            stage: Stage::Title,
            mode: None,
            entry: RowEntry::new(rules.row_size()),
            status_message: MODE_PROMPT.to_string(),
            rng,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(stage = ?self.stage))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return AppAction::Stay;
        }
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            info!("Quit requested");
            return AppAction::Quit;
        }

        match self.stage {
            Stage::Title => return self.on_title(key.code),
            Stage::Handoff => {
                self.stage = Stage::SecretEntry;
                self.status_message = "Choose the secret row".to_string();
            }
            Stage::SwapPlayers => {
                self.stage = Stage::Guessing;
                self.status_message = lives_text(self.session.lives_remaining());
            }
            Stage::SecretEntry | Stage::Guessing => self.on_row_key(key.code),
            Stage::Finished => match key.code {
                KeyCode::Enter => self.restart(),
                KeyCode::Char('q') => return AppAction::Quit,
                _ => {}
            },
        }
        AppAction::Stay
    }

    fn on_title(&mut self, code: KeyCode) -> AppAction {
        let mode = match code {
            KeyCode::Char('1') => Mode::Random,
            KeyCode::Char('2') => Mode::TwoPlayer,
            KeyCode::Char('q') => return AppAction::Quit,
            _ => {
                self.status_message = MODE_PROMPT.to_string();
                return AppAction::Stay;
            }
        };

        match self.session.choose_mode(mode, &mut self.rng) {
            Ok(transition) => {
                self.mode = Some(mode);
                if *transition.state() == SessionState::AwaitingSecret {
                    self.stage = Stage::Handoff;
                    self.status_message = HANDOFF_NOTICE.to_string();
                } else {
                    self.stage = Stage::Guessing;
                    self.status_message = transition.progress_text();
                }
            }
            Err(e) => {
                warn!(error = %e, "Mode rejected");
                self.status_message = e.to_string();
            }
        }
        AppAction::Stay
    }

    fn on_row_key(&mut self, code: KeyCode) {
        let options = self.session.rules().number_options();
        match code {
            KeyCode::Left => self.entry.move_left(),
            KeyCode::Right => self.entry.move_right(),
            KeyCode::Up => self.entry.highlight_previous(options),
            KeyCode::Down => self.entry.highlight_next(options),
            KeyCode::Backspace | KeyCode::Delete => self.entry.clear(),
            KeyCode::Char(' ') => {
                let symbol = self.entry.highlighted;
                self.place(symbol);
            }
            KeyCode::Char(c) => match c.to_digit(10).map(|d| d as usize) {
                Some(d) if (1..=options).contains(&d) => self.place(d - 1),
                _ => self.status_message = format!("Pick a colour from 1 to {}", options.min(9)),
            },
            _ => {}
        }
    }

    fn place(&mut self, symbol: usize) {
        debug!(symbol, slot = self.entry.cursor, "Colour placed");
        self.entry.place(symbol);
        if let Some(row) = self.entry.complete() {
            self.entry.reset();
            self.submit(row);
        }
    }

    fn submit(&mut self, row: Vec<usize>) {
        if self.stage == Stage::SecretEntry {
            match self.session.set_secret(row) {
                Ok(_) => {
                    self.stage = Stage::SwapPlayers;
                    self.status_message = SWAP_NOTICE.to_string();
                }
                Err(e) => self.status_message = e.to_string(),
            }
            return;
        }

        match self.session.submit_guess(row) {
            Ok(transition) => self.after_guess(&transition),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn after_guess(&mut self, transition: &Transition) {
        match transition.state() {
            SessionState::Won => {
                self.stage = Stage::Finished;
                self.status_message = Outcome::Won.message().to_string();
            }
            SessionState::Lost => {
                self.stage = Stage::Finished;
                self.status_message = Outcome::Lost.message().to_string();
            }
            _ => {
                self.status_message = match transition.feedback() {
                    Some(feedback) => format!("{}. {}", feedback, transition.progress_text()),
                    None => transition.progress_text(),
                };
            }
        }
    }

    /// Back to the title screen with a fresh session and the same palette.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session = self.session.restart();
        self.stage = Stage::Title;
        self.mode = None;
        self.entry.reset();
        self.status_message = MODE_PROMPT.to_string();
    }
}
