//! Stateless UI rendering for Mastermind.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_mastermind::{Colour, Mode, Palette, Turn, lives_text};
use strum::IntoEnumIterator;

use super::app::{App, HANDOFF_NOTICE, MODE_PROMPT, RowEntry, SWAP_NOTICE, Stage};

const FILLED: &str = "●";
const EMPTY: &str = "○";

/// Renders the whole screen for the current stage.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Palette
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("MASTERMIND")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.stage() {
        Stage::Title => draw_title(frame, chunks[1]),
        Stage::Handoff => {
            draw_notice(frame, chunks[1], HANDOFF_NOTICE, "press any key when ready")
        }
        Stage::SwapPlayers => {
            draw_notice(frame, chunks[1], SWAP_NOTICE, "press any key to start guessing")
        }
        Stage::SecretEntry => draw_entry_only(frame, chunks[1], app),
        Stage::Guessing | Stage::Finished => draw_board(frame, chunks[1], app),
    }

    if *app.stage() != Stage::Title {
        draw_palette(frame, chunks[2], app.palette(), *app.entry().highlighted());
    }

    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Mode::iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("{}  {}", i + 1, mode)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(MODE_PROMPT).style(Style::default().add_modifier(Modifier::BOLD)));

    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, center_rect(area, 40, 4));
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &str, hint: &str) {
    let lines = vec![
        Line::from(notice).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(hint).style(Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, 60, 3));
}

fn draw_entry_only(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from("Secret row"),
        Line::from(""),
        entry_line(app.palette(), app.entry()),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, 40, 3));
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", lives_text(session.lives_remaining())));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Two lines are reserved for the entry row or the revealed secret.
    let visible = usize::from(inner.height.saturating_sub(2));
    let history = session.history();
    let mut lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(history.len().saturating_sub(visible))
        .map(|(i, turn)| turn_line(app.palette(), i + 1, turn))
        .collect();

    lines.push(Line::from(""));
    match session.revealed_secret() {
        Some(secret) => {
            let mut spans = vec![Span::raw("Secret  ")];
            spans.extend(secret.symbols().iter().map(|&s| counter(app.palette().colour(s))));
            lines.push(Line::from(spans));
        }
        None => lines.push(entry_line(app.palette(), app.entry())),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn turn_line<'a>(palette: &Palette, number: usize, turn: &Turn) -> Line<'a> {
    let mut spans = vec![Span::raw(format!("{:>3}  ", number))];
    spans.extend(
        turn.guess()
            .symbols()
            .iter()
            .map(|&s| counter(palette.colour(s))),
    );
    spans.push(Span::styled(
        format!("  {}", turn.feedback()),
        Style::default().fg(Color::Gray),
    ));
    Line::from(spans)
}

fn entry_line<'a>(palette: &Palette, entry: &RowEntry) -> Line<'a> {
    let spans: Vec<Span> = entry
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let span = counter(slot.and_then(|s| palette.colour(s)));
            if i == *entry.cursor() {
                span.patch_style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                span
            }
        })
        .collect();
    Line::from(spans)
}

fn draw_palette(frame: &mut Frame, area: Rect, palette: &Palette, highlighted: usize) {
    let spans: Vec<Span> = palette
        .iter()
        .enumerate()
        .flat_map(|(i, colour)| {
            let label = if i < 9 {
                format!("{}", i + 1)
            } else {
                " ".to_string()
            };
            let mut label = Span::raw(label);
            if i == highlighted {
                label = label.patch_style(
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                );
            }
            [label, counter(Some(*colour)), Span::raw("  ")]
        })
        .collect();

    let legend = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Colours "));
    frame.render_widget(legend, area);
}

/// One counter: filled in its colour, or an empty ring.
fn counter<'a>(colour: Option<Colour>) -> Span<'a> {
    match colour {
        Some(c) => Span::styled(
            format!("{} ", FILLED),
            Style::default().fg(Color::Rgb(c.r, c.g, c.b)),
        ),
        None => Span::raw(format!("{} ", EMPTY)),
    }
}

/// Centers a rectangle within another.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
