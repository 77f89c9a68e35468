//! Guess validation

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::WordBank;
use thiserror::Error;

/// Why a submitted guess was refused
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters")]
    Incomplete,
    #[error("Not in word list")]
    NotInDictionary,
}

/// Check the pending letters form a complete dictionary word
///
/// Length is checked before membership, so a short guess always reports `Incomplete`.
/// Letters are compared case-insensitively.
///
/// # Errors
///
/// Returns the first failing `Rejection`.
pub fn validate_guess(pending: &str, bank: &WordBank) -> Result<Word, Rejection> {
    if pending.chars().count() != WORD_LENGTH {
        return Err(Rejection::Incomplete);
    }

    let word = Word::new(pending).map_err(|_| Rejection::NotInDictionary)?;
    if bank.contains(&word) {
        Ok(word)
    } else {
        Err(Rejection::NotInDictionary)
    }
}
