//! Today command
//!
//! Reports which day and target index a daily game would use.

use crate::config::{DayInfo, GameConfig};
use crate::core::Word;
use crate::wordlists::WordBank;

/// Day lookup result
#[derive(Debug)]
pub struct TodayResult {
    pub info: DayInfo,
    pub target_count: usize,
    /// Present only when the caller asked to reveal the word
    pub word: Option<Word>,
}

/// Look up the daily target for the configured date
#[must_use]
pub fn today(config: &GameConfig, bank: &WordBank, reveal: bool) -> TodayResult {
    let info = config.day_info(bank);
    TodayResult {
        info,
        target_count: bank.targets().len(),
        word: reveal.then(|| bank.daily_target(info.offset).clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn today_hides_word_unless_revealed() {
        let config = GameConfig {
            date: NaiveDate::from_ymd_opt(2022, 1, 2),
            ..GameConfig::default()
        };
        let bank = config.load_word_bank().unwrap();

        let hidden = today(&config, &bank, false);
        assert_eq!(hidden.info.offset, 1);
        assert_eq!(hidden.info.index, 1);
        assert!(hidden.word.is_none());

        let shown = today(&config, &bank, true);
        assert_eq!(shown.word.as_ref(), Some(&bank.targets()[1]));
        assert_eq!(shown.target_count, bank.targets().len());
    }
}
