//! Formatting utilities for terminal output

use crate::core::{KeyboardState, LetterResult};
use crate::game::EvaluatedGuess;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Paint a single letter as a colored tile
#[must_use]
pub fn tile(letter: char, result: Option<LetterResult>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        Some(LetterResult::Correct) => text.black().on_green().bold(),
        Some(LetterResult::Present) => text.black().on_yellow().bold(),
        Some(LetterResult::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render an evaluated guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &EvaluatedGuess) -> String {
    guess
        .word
        .text()
        .chars()
        .zip(guess.feedback.results())
        .map(|(letter, &result)| tile(letter, Some(result)).to_string())
        .collect()
}

/// Render the keyboard with each key colored by its best known result
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}
