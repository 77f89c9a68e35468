//! Word bank: the dictionary of valid guesses plus the ordered daily targets

use super::WordBankError;
use super::loader::words_from_slice;
use super::{DICTIONARY, TARGETS};
use crate::core::Word;
use crate::game::day::select_target;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable word bank shared by a game session
///
/// Membership in `dictionary` is all that matters for guesses; `targets` is ordered
/// because its index is the day offset.
#[derive(Debug, Clone)]
pub struct WordBank {
    dictionary: FxHashSet<Word>,
    targets: Vec<Word>,
}

impl WordBank {
    /// Build a bank from a guess dictionary and an ordered target list
    ///
    /// Every target is also accepted as a guess, even if the dictionary omits it.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::NoTargets` if `targets` is empty.
    pub fn new(
        dictionary: impl IntoIterator<Item = Word>,
        targets: Vec<Word>,
    ) -> Result<Self, WordBankError> {
        if targets.is_empty() {
            return Err(WordBankError::NoTargets);
        }

        let mut dictionary: FxHashSet<Word> = dictionary.into_iter().collect();
        dictionary.extend(targets.iter().cloned());

        Ok(Self {
            dictionary,
            targets,
        })
    }

    /// Bank built from the word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::NoTargets` if the embedded target list is empty.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(words_from_slice(DICTIONARY), words_from_slice(TARGETS))
    }

    /// Check whether `word` is accepted as a guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Ordered daily target words
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Target for a day offset, wrapping around once the list is exhausted
    #[must_use]
    pub fn daily_target(&self, day_offset: i64) -> &Word {
        select_target(&self.targets, day_offset).unwrap_or_else(|| &self.targets[0])
    }

    /// Uniformly random target
    #[must_use]
    pub fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.targets[rng.random_range(0..self.targets.len())]
    }

    /// Number of distinct words accepted as guesses
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn bank_accepts_dictionary_and_targets() {
        let bank = WordBank::new(words(&["crane", "slate"]), words(&["mango"])).unwrap();

        assert!(bank.contains(&Word::new("crane").unwrap()));
        assert!(bank.contains(&Word::new("MANGO").unwrap()));
        assert!(!bank.contains(&Word::new("zzzzz").unwrap()));
        assert_eq!(bank.dictionary_len(), 3);
    }

    #[test]
    fn bank_keeps_target_order() {
        let bank = WordBank::new(Vec::new(), words(&["mango", "allow", "apple"])).unwrap();
        let texts: Vec<&str> = bank.targets().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["mango", "allow", "apple"]);
    }

    #[test]
    fn bank_rejects_empty_targets() {
        let err = WordBank::new(words(&["crane"]), Vec::new()).unwrap_err();
        assert!(matches!(err, WordBankError::NoTargets));
    }

    #[test]
    fn bank_daily_target_wraps() {
        let bank = WordBank::new(Vec::new(), words(&["mango", "allow", "apple"])).unwrap();
        assert_eq!(bank.daily_target(1).text(), "allow");
        assert_eq!(bank.daily_target(3).text(), "mango");
        assert_eq!(bank.daily_target(-1).text(), "apple");
    }

    #[test]
    fn embedded_bank_contains_every_target() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(bank.targets().len(), TARGETS.len());
        assert!(bank.targets().iter().all(|t| bank.contains(t)));
    }
}
