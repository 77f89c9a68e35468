//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message panel for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::Outcome;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let board_height = u16::try_from(MAX_ATTEMPTS).unwrap_or(u16::MAX).saturating_add(2);
    let keyboard_height = u16::try_from(KEYBOARD_ROWS.len()).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(board_height),    // Board
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Min(4),                  // Messages
            Constraint::Length(1),               // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, now, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Colors for a tile in a given state
#[must_use]
pub fn tile_style(result: Option<LetterResult>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match result {
        Some(LetterResult::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterResult::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterResult::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("WORDLE {}", app.day_label))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_span(letter: char, result: Option<LetterResult>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(result),
    )
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let guesses = app.session.guesses();
    let shaking = app.is_shaking(now);
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(guess) = guesses.get(row) {
            let flipped = match &app.reveal {
                Some(reveal) if reveal.row == row => reveal.revealed_tiles(now),
                _ => WORD_LENGTH,
            };
            for (i, (&byte, &result)) in guess
                .word
                .chars()
                .iter()
                .zip(guess.feedback.results())
                .enumerate()
            {
                spans.push(tile_span(char::from(byte), (i < flipped).then_some(result)));
                spans.push(Span::raw(" "));
            }
        } else if row == guesses.len() && !app.session.outcome().is_finished() {
            let pending: Vec<char> = app.session.pending().chars().collect();
            let style = if shaking {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                tile_style(None)
            };
            for i in 0..WORD_LENGTH {
                let text = pending
                    .get(i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| [tile_span(c, keyboard.get(c)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.session.outcome() {
        Outcome::InProgress => format!(
            "Attempts left: {} | Enter: Submit | Backspace: Delete | Esc: Quit",
            app.session.remaining_attempts()
        ),
        Outcome::Won | Outcome::Lost => "Game over | Esc: Quit and print result".to_string(),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
