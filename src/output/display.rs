//! Display functions for command results

use super::formatters::{guess_tiles, keyboard_lines};
use crate::commands::{EvaluationResult, TodayResult};
use crate::core::MAX_ATTEMPTS;
use crate::game::GameSession;
use colored::Colorize;

/// Print the board so far: evaluated rows, then the on-screen keyboard
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for (i, guess) in session.guesses().iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), guess_tiles(guess));
    }
    println!();
    for line in keyboard_lines(session.keyboard()) {
        println!("  {line}");
    }
    println!(
        "\n  {} of {MAX_ATTEMPTS} guesses left",
        session.remaining_attempts().to_string().bright_cyan()
    );
}

/// Print the result of the `evaluate` command
pub fn print_evaluation(result: &EvaluationResult) {
    println!(
        "{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}  {}", result.feedback.to_emoji(), result.feedback);

    if let Some(expected) = result.expected {
        if expected == result.feedback {
            println!("{}", "✅ Matches expected feedback".green().bold());
        } else {
            println!(
                "{}",
                format!("❌ Expected {expected}, got {}", result.feedback)
                    .red()
                    .bold()
            );
        }
    }
}

/// Print the result of the `today` command
pub fn print_today(result: &TodayResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} {}", "Date:".bright_cyan().bold(), result.info.date);
    println!(" {} {}", "Day:".bright_cyan().bold(), result.info.offset);
    println!(
        " {} {} of {}",
        "Index:".bright_cyan().bold(),
        result.info.index,
        result.target_count
    );
    if let Some(word) = &result.word {
        println!(
            " {} {}",
            "Word:".bright_cyan().bold(),
            word.text().to_uppercase().bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(40).cyan());
}
