//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, InputEvent, Outcome, Update};
use crate::output::display::print_board;
use crate::output::formatters::guess_tiles;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(session: &mut GameSession<'_>, day_label: &str) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, day_label, stdin.lock())
}

/// Run the simple mode reading guesses from `input`
///
/// Stops when the game finishes, the player quits, or input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<R: BufRead>(
    session: &mut GameSession<'_>,
    day_label: &str,
    input: R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║              Wordle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word. Type 'quit' to give up.\n");

    let mut lines = input.lines();
    while !session.outcome().is_finished() {
        print!("Guess {}: ", session.guesses().len() + 1);
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("failed to read guess")?;
        let entry = line.trim();

        if matches!(entry, "quit" | "q" | "exit") {
            println!(
                "\n👋 The word was {}\n",
                session.target().text().to_uppercase().bright_yellow().bold()
            );
            return Ok(());
        }

        if entry.chars().count() > WORD_LENGTH {
            println!("{}", "Too many letters".red());
            continue;
        }

        let update = submit_line(session, entry);
        if let Some(message) = session.message(&update) {
            let styled = match &update {
                Update::Rejected(_) => message.red(),
                Update::Evaluated {
                    outcome: Outcome::Won,
                    ..
                } => message.green().bold(),
                _ => message.bright_yellow().bold(),
            };
            println!("{styled}");
        }
        if let Update::Evaluated { guess, .. } = &update {
            println!("         {}", guess_tiles(guess));
        }
    }

    print_board(session);
    if let Some(share) = session.share_text(day_label) {
        println!("\n{share}\n");
    }
    Ok(())
}

/// Replace the pending letters with `entry` and submit
fn submit_line(session: &mut GameSession<'_>, entry: &str) -> Update {
    while session.apply(InputEvent::Delete) != Update::Ignored {}
    for ch in entry.chars() {
        session.apply(InputEvent::Letter(ch));
    }
    session.apply(InputEvent::Submit)
}
