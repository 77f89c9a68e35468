//! Keyboard letter state
//!
//! Tracks the best result seen for each letter across all evaluated guesses.

use super::{Feedback, LetterResult, Word};

/// Best known result per letter `a..=z`
///
/// Updates only ever upgrade a letter: `Correct` is never downgraded and
/// `Present` never falls back to `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterResult>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best result recorded for `letter`, or `None` if it was never guessed
    ///
    /// Letters are matched case-insensitively; non-letters always return `None`.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        let index = letter_index(letter)?;
        self.letters[index]
    }

    /// Fold one evaluated guess into the state
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.chars().iter().zip(feedback.results()) {
            if let Some(index) = letter_index(char::from(letter)) {
                let slot = &mut self.letters[index];
                *slot = Some(slot.map_or(result, |best| best.max(result)));
            }
        }
    }

    /// Iterate over every letter that has been guessed, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        (b'a'..=b'z')
            .zip(&self.letters)
            .filter_map(|(letter, result)| result.map(|r| (char::from(letter), r)))
    }
}

fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(usize::from(lower as u8 - b'a'))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::LetterResult::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn record(state: &mut KeyboardState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        state.record(&guess, &Feedback::evaluate(&guess, &target));
    }

    #[test]
    fn keyboard_starts_empty() {
        let state = KeyboardState::new();
        assert_eq!(state.get('a'), None);
        assert_eq!(state.iter().count(), 0);
    }

    #[test]
    fn keyboard_records_each_letter() {
        let mut state = KeyboardState::new();
        record(&mut state, "apple", "allow");

        assert_eq!(state.get('a'), Some(Correct));
        assert_eq!(state.get('p'), Some(Absent));
        assert_eq!(state.get('l'), Some(Present));
        assert_eq!(state.get('e'), Some(Absent));
        assert_eq!(state.get('z'), None);
    }

    #[test]
    fn keyboard_lookup_is_case_insensitive() {
        let mut state = KeyboardState::new();
        record(&mut state, "apple", "allow");
        assert_eq!(state.get('A'), Some(Correct));
        assert_eq!(state.get('!'), None);
    }

    #[test]
    fn keyboard_keeps_best_within_one_guess() {
        // First O yellow, second O green: the key must show green
        let mut state = KeyboardState::new();
        record(&mut state, "robot", "floor");
        assert_eq!(state.get('o'), Some(Correct));
    }

    #[test]
    fn keyboard_never_downgrades_correct() {
        let mut state = KeyboardState::new();
        record(&mut state, "crane", "crate");
        assert_eq!(state.get('c'), Some(Correct));

        // 'c' lands out of position in EPOCH and scores only yellow
        record(&mut state, "epoch", "crate");
        assert_eq!(state.get('c'), Some(Correct));
    }

    #[test]
    fn keyboard_never_downgrades_present() {
        let mut state = KeyboardState::new();
        record(&mut state, "lemon", "allow");
        assert_eq!(state.get('l'), Some(Present));

        record(&mut state, "label", "crane");
        assert_eq!(state.get('l'), Some(Present));

        record(&mut state, "llama", "allow");
        assert_eq!(state.get('l'), Some(Correct));
    }

    #[test]
    fn keyboard_iter_is_alphabetical() {
        let mut state = KeyboardState::new();
        record(&mut state, "crane", "slate");
        let letters: Vec<char> = state.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['a', 'c', 'e', 'n', 'r']);
    }

    proptest! {
        #[test]
        fn keyboard_updates_are_monotonic(
            target in "[a-f]{5}",
            guesses in proptest::collection::vec("[a-f]{5}", 1..8),
        ) {
            let target = Word::new(target).unwrap();
            let mut state = KeyboardState::new();

            for guess in guesses {
                let before = state.clone();
                let guess = Word::new(guess).unwrap();
                state.record(&guess, &Feedback::evaluate(&guess, &target));

                for (letter, previous) in before.iter() {
                    let current = state.get(letter);
                    prop_assert!(current.is_some_and(|now| now >= previous));
                }
            }
        }
    }
}
