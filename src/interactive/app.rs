//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, InputEvent, Outcome, Update};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between successive tile flips when a row is revealed
pub const FLIP_INTERVAL: Duration = Duration::from_millis(250);

/// How long a rejected row stays highlighted
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Poll interval for the event loop while animating
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub day_label: String,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    pub shake_until: Option<Instant>,
    pub should_quit: bool,
}

/// Tile-by-tile reveal of the most recent row
///
/// Replays an already evaluated guess; the session itself has moved on.
#[derive(Debug, Clone)]
pub struct Reveal {
    /// Zero-based row being revealed
    pub row: usize,
    pub started: Instant,
    /// Shown once every tile has flipped
    pub message: Option<Message>,
}

impl Reveal {
    /// Number of tiles flipped by `now`
    #[must_use]
    pub fn revealed_tiles(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let flipped = elapsed.as_millis() / FLIP_INTERVAL.as_millis();
        (flipped as usize + 1).min(WORD_LENGTH)
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= FLIP_INTERVAL * WORD_LENGTH as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(InputEvent),
    Quit,
}

/// Map a physical key to an action
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Enter => Some(KeyAction::Input(InputEvent::Submit)),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyAction::Input(InputEvent::Delete)),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(KeyAction::Input(InputEvent::Letter(c)))
        }
        _ => None,
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession<'a>, day_label: String) -> Self {
        Self {
            session,
            day_label,
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word. Esc to quit."),
                style: MessageStyle::Info,
            }],
            reveal: None,
            shake_until: None,
            should_quit: false,
        }
    }

    /// Input is dropped while a row is still being revealed
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.reveal.is_none()
    }

    /// Handle one key press at time `now`
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        match map_key(key) {
            Some(KeyAction::Quit) => self.should_quit = true,
            Some(KeyAction::Input(event)) if self.accepts_input() => self.handle_input(event, now),
            _ => {}
        }
    }

    /// Feed an input event to the session and schedule its feedback
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        let update = self.session.apply(event);
        let text = self.session.message(&update);

        match &update {
            Update::Rejected(_) => {
                self.shake_until = Some(now + SHAKE_DURATION);
                if let Some(text) = text {
                    self.add_message(&text, MessageStyle::Error);
                }
            }
            Update::Evaluated {
                attempt, outcome, ..
            } => {
                let style = if *outcome == Outcome::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Info
                };
                self.reveal = Some(Reveal {
                    row: attempt - 1,
                    started: now,
                    message: text.map(|text| Message { text, style }),
                });
            }
            Update::Pending(_) | Update::Ignored => {}
        }
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Instant) {
        if self.shake_until.is_some_and(|until| now >= until) {
            self.shake_until = None;
        }

        if self.reveal.as_ref().is_some_and(|reveal| reveal.is_done(now))
            && let Some(reveal) = self.reveal.take()
        {
            if let Some(message) = reveal.message {
                self.add_message(&message.text, message.style);
            }
            if let Some(share) = self.session.share_text(&self.day_label) {
                let first_line = share.lines().next().unwrap_or_default().to_string();
                self.add_message(&first_line, MessageStyle::Info);
            }
        }
    }

    /// Whether the current input row should be drawn as rejected
    #[must_use]
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(res)
}

/// Print the share text once the terminal is restored, passing errors through
fn finish(res: Result<Option<String>>) -> Result<()> {
    if let Some(share) = res? {
        println!("{share}");
    }
    Ok(())
}

/// Returns the share text if the game finished
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(&key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.share_text(&app.day_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;

    fn bank() -> WordBank {
        WordBank::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["mango"]),
        )
        .unwrap()
    }

    fn press(app: &mut App<'_>, code: KeyCode, now: Instant) {
        app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App<'_>, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn map_key_covers_game_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            map_key(&key(KeyCode::Char('a'))),
            Some(KeyAction::Input(InputEvent::Letter('a')))
        );
        assert_eq!(
            map_key(&key(KeyCode::Enter)),
            Some(KeyAction::Input(InputEvent::Submit))
        );
        assert_eq!(
            map_key(&key(KeyCode::Backspace)),
            Some(KeyAction::Input(InputEvent::Delete))
        );
        assert_eq!(
            map_key(&key(KeyCode::Delete)),
            Some(KeyAction::Input(InputEvent::Delete))
        );
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(map_key(&key(KeyCode::Char('1'))), None);
        assert_eq!(map_key(&key(KeyCode::Tab)), None);
    }

    #[test]
    fn rejected_guess_shakes_and_reports() {
        let bank = bank();
        let mut app = App::new(GameSession::new(&bank, Word::new("mango").unwrap()), "0".into());
        let now = Instant::now();

        type_word(&mut app, "cra", now);
        assert!(app.is_shaking(now));
        assert_eq!(app.messages.last().unwrap().text, "Not enough letters");

        app.tick(now + SHAKE_DURATION);
        assert!(!app.is_shaking(now + SHAKE_DURATION));
    }

    #[test]
    fn input_is_dropped_during_reveal() {
        let bank = bank();
        let mut app = App::new(GameSession::new(&bank, Word::new("mango").unwrap()), "0".into());
        let now = Instant::now();

        type_word(&mut app, "crane", now);
        assert!(!app.accepts_input());

        press(&mut app, KeyCode::Char('s'), now);
        assert_eq!(app.session.pending(), "");

        let done = now + FLIP_INTERVAL * WORD_LENGTH as u32;
        app.tick(done);
        assert!(app.accepts_input());
        press(&mut app, KeyCode::Char('s'), done);
        assert_eq!(app.session.pending(), "s");
    }

    #[test]
    fn reveal_flips_one_tile_per_interval() {
        let now = Instant::now();
        let reveal = Reveal {
            row: 0,
            started: now,
            message: None,
        };
        assert_eq!(reveal.revealed_tiles(now), 1);
        assert_eq!(reveal.revealed_tiles(now + FLIP_INTERVAL * 2), 3);
        assert_eq!(reveal.revealed_tiles(now + FLIP_INTERVAL * 10), WORD_LENGTH);
        assert!(!reveal.is_done(now + FLIP_INTERVAL));
        assert!(reveal.is_done(now + FLIP_INTERVAL * WORD_LENGTH as u32));
    }

    #[test]
    fn win_message_waits_for_reveal() {
        let bank = bank();
        let mut app = App::new(GameSession::new(&bank, Word::new("mango").unwrap()), "7".into());
        let now = Instant::now();

        type_word(&mut app, "mango", now);
        assert_eq!(app.session.outcome(), Outcome::Won);
        assert_ne!(app.messages.last().unwrap().text, "Genius");

        app.tick(now + FLIP_INTERVAL * WORD_LENGTH as u32);
        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"Genius"));
        assert_eq!(texts.last(), Some(&"Wordle 7 1/6"));
    }

    #[test]
    fn finish_propagates_event_loop_errors() {
        let err = finish(Err(anyhow::anyhow!("terminal went away"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");

        assert!(finish(Ok(None)).is_ok());
        assert!(finish(Ok(Some("Wordle 0 1/6".to_string()))).is_ok());
    }

    #[test]
    fn escape_quits() {
        let bank = bank();
        let mut app = App::new(GameSession::new(&bank, Word::new("mango").unwrap()), "0".into());
        press(&mut app, KeyCode::Esc, Instant::now());
        assert!(app.should_quit);
    }
}
