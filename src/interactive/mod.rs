//! Interactive TUI game
//!
//! Full-screen board with an on-screen keyboard, driven by crossterm key events.

mod app;
mod rendering;

pub use app::{App, KeyAction, Message, MessageStyle, Reveal, map_key, run_tui};
