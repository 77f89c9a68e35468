//! Evaluate command
//!
//! Scores one guess against one target without starting a game.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of evaluating a guess
#[derive(Debug)]
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    pub expected: Option<Feedback>,
}

impl EvaluationResult {
    /// True unless an expected pattern was given and differs
    #[must_use]
    pub fn matches_expected(&self) -> bool {
        self.expected.is_none_or(|expected| expected == self.feedback)
    }
}

/// Evaluate `guess` against `target`, optionally checking an expected pattern
///
/// Dictionary membership is not checked: any well-formed words can be compared.
///
/// # Errors
///
/// Returns an error if either word is malformed or `expected` is not a valid pattern.
pub fn evaluate_words(guess: &str, target: &str, expected: Option<&str>) -> Result<EvaluationResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let expected = expected
        .map(|pattern| {
            pattern
                .parse::<Feedback>()
                .with_context(|| format!("invalid expected pattern '{pattern}'"))
        })
        .transpose()?;

    Ok(EvaluationResult {
        feedback: Feedback::evaluate(&guess, &target),
        guess,
        target,
        expected,
    })
}
