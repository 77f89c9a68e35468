//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! Log levels used across the crate:
//! - `warn`: skipped word-list entries
//! - `info`: word bank loaded, game won or lost
//! - `debug`: every evaluated or rejected guess

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level written
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`
    pub use_env_filter: bool,
    /// Append to this file instead of writing to stderr
    pub log_file: Option<PathBuf>,
    /// Colored output (only sensible on a terminal)
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            log_file: None,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Silence all output; used when the TUI owns the terminal and no log file was given
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            use_env_filter: false,
            ..Self::default()
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        init_with_writer(config, Mutex::new(file), false)
    } else {
        init_with_writer(config, io::stderr, config.with_ansi)
    }
}

fn init_with_writer<W>(config: &LogConfig, writer: W, with_ansi: bool) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
        .context("failed to install tracing subscriber")
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::default().add_directive(config.level_filter.into());
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_warns_to_stderr() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.log_file.is_none());
        assert!(config.use_env_filter);
    }

    #[test]
    fn disabled_config_ignores_environment() {
        let config = LogConfig::disabled();
        assert_eq!(config.level_filter, LevelFilter::OFF);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn missing_log_directory_is_an_error() {
        let config = LogConfig {
            log_file: Some(PathBuf::from("/no/such/dir/game.log")),
            ..LogConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/game.log"));
    }
}
