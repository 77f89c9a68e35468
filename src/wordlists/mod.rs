//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, file loading for custom
//! lists, and the `WordBank` that combines them.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a word bank
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("target word list is empty")]
    NoTargets,
}
