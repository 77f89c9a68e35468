//! Game configuration
//!
//! Resolved from command-line flags in `main`; decides which word lists to use and
//! how the target word is picked.

use crate::core::Word;
use crate::game::GameSession;
use crate::game::day::{day_offset, default_epoch, target_index};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{DICTIONARY, TARGETS, WordBank, WordBankError};
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

/// How the target word is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// One word per calendar day since the epoch
    #[default]
    Daily,
    /// Uniformly random target, reproducible when seeded
    Random { seed: Option<u64> },
}

/// Settings for starting a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Day offset 0
    pub epoch: NaiveDate,
    /// Play this date instead of today
    pub date: Option<NaiveDate>,
    pub target_mode: TargetMode,
    /// Replaces the embedded dictionary
    pub dictionary: Option<PathBuf>,
    /// Replaces the embedded target list
    pub targets: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            date: None,
            target_mode: TargetMode::default(),
            dictionary: None,
            targets: None,
        }
    }
}

/// Which day a daily game is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub offset: i64,
    pub index: usize,
}

impl GameConfig {
    /// Calendar date being played
    #[must_use]
    pub fn play_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Fix the play date to today if none was given
    ///
    /// Every later day lookup then agrees, even if the clock passes midnight.
    #[must_use]
    pub fn with_pinned_date(self) -> Self {
        Self {
            date: Some(self.play_date()),
            ..self
        }
    }

    /// Days since the epoch for the date being played
    #[must_use]
    pub fn day_offset(&self) -> i64 {
        day_offset(self.play_date(), self.epoch)
    }

    /// Day offset and target-list index for the date being played
    #[must_use]
    pub fn day_info(&self, bank: &WordBank) -> DayInfo {
        let date = self.play_date();
        let offset = day_offset(date, self.epoch);
        DayInfo {
            date,
            offset,
            index: target_index(offset, bank.targets().len()).unwrap_or_default(),
        }
    }

    /// Build the word bank from embedded lists or the configured files
    ///
    /// # Errors
    ///
    /// Returns `WordBankError` if a configured file cannot be read or no targets remain.
    pub fn load_word_bank(&self) -> Result<WordBank, WordBankError> {
        let dictionary = load_list(self.dictionary.as_ref(), DICTIONARY)?;
        let targets = load_list(self.targets.as_ref(), TARGETS)?;
        let bank = WordBank::new(dictionary, targets)?;

        info!(
            dictionary = bank.dictionary_len(),
            targets = bank.targets().len(),
            "word bank ready"
        );
        Ok(bank)
    }

    /// Start a session according to the target mode
    #[must_use]
    pub fn start_session<'a>(&self, bank: &'a WordBank) -> GameSession<'a> {
        match self.target_mode {
            TargetMode::Daily => GameSession::daily(bank, self.day_offset()),
            TargetMode::Random { seed: Some(seed) } => {
                GameSession::random(bank, &mut StdRng::seed_from_u64(seed))
            }
            TargetMode::Random { seed: None } => GameSession::random(bank, &mut rand::rng()),
        }
    }

    /// Label identifying the puzzle in share text
    #[must_use]
    pub fn day_label(&self) -> String {
        match self.target_mode {
            TargetMode::Daily => self.day_offset().to_string(),
            TargetMode::Random { .. } => "random".to_string(),
        }
    }
}

fn load_list(path: Option<&PathBuf>, embedded: &[&str]) -> Result<Vec<Word>, WordBankError> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(words_from_slice(embedded)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(date: NaiveDate) -> GameConfig {
        GameConfig {
            date: Some(date),
            ..GameConfig::default()
        }
    }

    #[test]
    fn default_config_is_daily_with_embedded_lists() {
        let config = GameConfig::default();
        assert_eq!(config.target_mode, TargetMode::Daily);
        assert_eq!(config.epoch, default_epoch());
        assert!(config.dictionary.is_none());
        assert!(config.targets.is_none());
    }

    #[test]
    fn explicit_date_sets_offset() {
        let config = config_for(NaiveDate::from_ymd_opt(2022, 1, 11).unwrap());
        assert_eq!(config.day_offset(), 10);
        assert_eq!(config.day_label(), "10");
        assert_eq!(config.play_date(), NaiveDate::from_ymd_opt(2022, 1, 11).unwrap());
    }

    #[test]
    fn pinned_date_keeps_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 4).unwrap();
        assert_eq!(config_for(date).with_pinned_date().date, Some(date));
    }

    #[test]
    fn pinned_date_fills_in_today() {
        let config = GameConfig::default().with_pinned_date();
        let pinned = config.date.unwrap();
        assert!((pinned - Local::now().date_naive()).num_days().abs() <= 1);

        let bank = config.load_word_bank().unwrap();
        let session = config.start_session(&bank);
        let label: i64 = config.day_label().parse().unwrap();
        assert_eq!(session.target(), bank.daily_target(label));
        assert_eq!(config.day_info(&bank).offset, label);
    }

    #[test]
    fn daily_session_matches_bank_target() {
        let config = config_for(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        let bank = config.load_word_bank().unwrap();
        let session = config.start_session(&bank);

        assert_eq!(session.target(), &bank.targets()[2]);
        assert_eq!(config.day_info(&bank).index, 2);
    }

    #[test]
    fn seeded_random_sessions_repeat() {
        let config = GameConfig {
            target_mode: TargetMode::Random { seed: Some(42) },
            ..GameConfig::default()
        };
        let bank = config.load_word_bank().unwrap();

        let first = config.start_session(&bank);
        let second = config.start_session(&bank);
        assert_eq!(first.target(), second.target());
        assert_eq!(config.day_label(), "random");
    }

    #[test]
    fn missing_word_list_file_is_an_error() {
        let config = GameConfig {
            targets: Some(PathBuf::from("/no/such/targets.txt")),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.load_word_bank(),
            Err(WordBankError::Io { .. })
        ));
    }
}
