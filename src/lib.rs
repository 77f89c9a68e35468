//! Daily Wordle
//!
//! A single-player Wordle: guess the five-letter word of the day in six tries.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daily_wordle::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("bongo").unwrap();
//! let target = Word::new("mango").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::evaluate(&guess, &target);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Day selection, validation and game state
pub mod game;

// Word lists
pub mod wordlists;

// Resolved game settings
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
