//! Day selection
//!
//! One target word per calendar day since a fixed epoch. Offsets past the end of the
//! target list (or before the epoch) wrap around with Euclidean modulo.

use crate::core::Word;
use chrono::NaiveDate;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Default epoch (2022-01-01): day offset 0
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default()
}

/// Whole days elapsed between two millisecond timestamps
///
/// Floors toward negative infinity, so an instant just before the epoch is day -1.
///
/// # Examples
/// ```
/// use daily_wordle::game::day::{day_offset_from_millis, MILLIS_PER_DAY};
///
/// assert_eq!(day_offset_from_millis(MILLIS_PER_DAY * 3 + 5, 0), 3);
/// assert_eq!(day_offset_from_millis(-1, 0), -1);
/// ```
#[must_use]
pub const fn day_offset_from_millis(now_ms: i64, epoch_ms: i64) -> i64 {
    (now_ms - epoch_ms).div_euclid(MILLIS_PER_DAY)
}

/// Whole calendar days from `epoch` to `date`
#[must_use]
pub fn day_offset(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Map a day offset onto a list of `len` targets
///
/// Returns `None` only when the list is empty.
#[must_use]
pub fn target_index(offset: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    offset
        .checked_rem_euclid(len)
        .and_then(|index| usize::try_from(index).ok())
}

/// Target word for a day offset
#[must_use]
pub fn select_target(targets: &[Word], offset: i64) -> Option<&Word> {
    target_index(offset, targets.len()).map(|index| &targets[index])
}
