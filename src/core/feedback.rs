//! Letter evaluation and feedback representation
//!
//! Feedback is one `LetterResult` per position of a guess:
//! - `Absent` (gray): letter not in the target, or all its occurrences already matched
//! - `Present` (yellow): letter in the target at another position
//! - `Correct` (green): letter at the exact position

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of a single guess letter
///
/// Variants are ordered `Absent < Present < Correct` so the keyboard can keep the best one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Emoji square used in shared result grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for an evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

/// Error returned when parsing a feedback string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("Feedback must have exactly {expected} marks, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Invalid feedback mark '{0}' (use G, Y or -)")]
    InvalidMark(char),
}

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([LetterResult::Correct; WORD_LENGTH]);

    /// Wrap raw per-position results
    #[inline]
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the available pool
    /// 2. Second pass: mark remaining letters `Present` while the pool still holds that
    ///    letter, consuming one occurrence each time, otherwise `Absent`
    ///
    /// A letter occurring once in the target is therefore credited at most once in the guess.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{Feedback, LetterResult::{Absent, Correct, Present}, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("allow").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.results(), &[Correct, Absent, Absent, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut results = [LetterResult::Absent; WORD_LENGTH];
        let mut available = target.char_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                results[i] = LetterResult::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if results[i] == LetterResult::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                results[i] = LetterResult::Present;
                *count -= 1;
            }
        }

        Self(results)
    }

    /// Results in guess order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and '-'/'_'/⬜ for absent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<char> = s.trim().chars().collect();
        if marks.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(marks.len()));
        }

        let mut results = [LetterResult::Absent; WORD_LENGTH];
        for (slot, mark) in results.iter_mut().zip(marks) {
            *slot = match mark {
                'G' | 'g' | '🟩' => LetterResult::Correct,
                'Y' | 'y' | '🟨' => LetterResult::Present,
                '-' | '_' | '⬜' => LetterResult::Absent,
                other => return Err(FeedbackParseError::InvalidMark(other)),
            };
        }

        Ok(Self(results))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            let mark = match result {
                LetterResult::Correct => 'G',
                LetterResult::Present => 'Y',
                LetterResult::Absent => '-',
            };
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}
