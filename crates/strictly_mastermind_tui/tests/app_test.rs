//! Drives the application through whole games with synthetic key presses.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_mastermind::{PaletteGenerator, Rules, SessionState};
use strictly_mastermind_tui::tui::app::{HANDOFF_NOTICE, MODE_PROMPT, SWAP_NOTICE};
use strictly_mastermind_tui::{App, AppAction, Stage};

fn app_with(rules: Rules) -> App {
    App::new(rules, &PaletteGenerator::default(), StdRng::seed_from_u64(17))
}

fn press(app: &mut App, code: KeyCode) -> AppAction {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_row(app: &mut App, digits: &str) {
    for c in digits.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Two-player app with the secret "1234" (symbols 0..=3) set.
fn two_player_guessing(rules: Rules) -> App {
    let mut app = app_with(rules);
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);
    type_row(&mut app, "1234");
    press(&mut app, KeyCode::Enter);
    app
}

#[test]
fn test_palette_has_one_colour_per_option() {
    let app = app_with(Rules::default());
    assert_eq!(app.palette().len(), 6);
    assert_eq!(*app.stage(), Stage::Title);
    assert_eq!(app.status_message(), MODE_PROMPT);
}

#[test]
fn test_other_keys_reprompt_on_title() {
    let mut app = app_with(Rules::default());
    assert_eq!(press(&mut app, KeyCode::Char('x')), AppAction::Stay);
    assert_eq!(*app.stage(), Stage::Title);
    assert_eq!(app.status_message(), MODE_PROMPT);
    assert_eq!(app.session().state(), SessionState::AwaitingMode);
}

#[test]
fn test_two_player_hand_off() {
    let mut app = app_with(Rules::default());
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(*app.stage(), Stage::Handoff);
    assert_eq!(app.status_message(), HANDOFF_NOTICE);

    press(&mut app, KeyCode::Enter);
    assert_eq!(*app.stage(), Stage::SecretEntry);

    type_row(&mut app, "1234");
    assert_eq!(*app.stage(), Stage::SwapPlayers);
    assert_eq!(app.status_message(), SWAP_NOTICE);
    assert_eq!(app.session().state(), SessionState::AwaitingGuess);

    press(&mut app, KeyCode::Enter);
    assert_eq!(*app.stage(), Stage::Guessing);
    assert_eq!(app.status_message(), "you have 10 lives left");
}

#[test]
fn test_guess_feedback_then_win() {
    let mut app = two_player_guessing(Rules::default());

    type_row(&mut app, "2135");
    assert_eq!(*app.stage(), Stage::Guessing);
    assert_eq!(
        app.status_message(),
        "3 counters have the right colour, 1 in the right place. you have 9 lives left"
    );
    assert_eq!(app.session().history().len(), 1);

    type_row(&mut app, "1234");
    assert_eq!(*app.stage(), Stage::Finished);
    assert_eq!(app.status_message(), "you got it");
    assert_eq!(app.session().state(), SessionState::Won);
}

#[test]
fn test_loss_reveals_secret() {
    let mut app = two_player_guessing(Rules::new(6, 4, 0).expect("valid rules"));
    type_row(&mut app, "6666");

    assert_eq!(*app.stage(), Stage::Finished);
    assert_eq!(app.status_message(), "Game over. Correct answer was");
    assert_eq!(
        app.session().revealed_secret().map(|s| s.symbols().to_vec()),
        Some(vec![0, 1, 2, 3])
    );
}

#[test]
fn test_enter_after_finish_returns_to_title() {
    let mut app = two_player_guessing(Rules::default());
    type_row(&mut app, "1234");
    assert_eq!(*app.stage(), Stage::Finished);

    press(&mut app, KeyCode::Enter);
    assert_eq!(*app.stage(), Stage::Title);
    assert_eq!(app.session().state(), SessionState::AwaitingMode);
    assert!(app.session().history().is_empty());
    assert!(app.mode().is_none());
}

#[test]
fn test_q_quits_after_finish() {
    let mut app = two_player_guessing(Rules::default());
    type_row(&mut app, "1234");
    assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
}

#[test]
fn test_escape_quits_anywhere() {
    let mut app = two_player_guessing(Rules::default());
    assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
}

#[test]
fn test_out_of_range_digit_ignored() {
    let mut app = two_player_guessing(Rules::default());
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.status_message(), "Pick a colour from 1 to 6");
    assert!(app.entry().slots().iter().all(Option::is_none));
}

#[test]
fn test_arrow_and_space_selection() {
    let mut app = two_player_guessing(Rules::default());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.entry().slots()[0], Some(2));
    assert_eq!(*app.entry().cursor(), 1);

    press(&mut app, KeyCode::Backspace);
    assert!(app.entry().slots().iter().all(Option::is_none));
}

#[test]
fn test_key_release_ignored() {
    let mut app = app_with(Rules::default());
    let release =
        KeyEvent::new_with_kind(KeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(app.handle_key(release), AppAction::Stay);
    assert_eq!(*app.stage(), Stage::Title);
}

#[test]
fn test_one_player_starts_guessing() {
    let mut app = app_with(Rules::default());
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(*app.stage(), Stage::Guessing);
    assert_eq!(app.status_message(), "you have 10 lives left");
}
