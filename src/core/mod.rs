//! Core domain types for the game
//!
//! Pure, synchronous types with no I/O: words, letter evaluation and keyboard state.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, FeedbackParseError, LetterResult};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;
