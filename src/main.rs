//! Daily Wordle - CLI
//!
//! Play the word of the day in a TUI or line mode, or inspect the daily schedule.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use daily_wordle::{
    commands::{evaluate_words, run_simple, today},
    config::{GameConfig, TargetMode},
    game::day::default_epoch,
    interactive::{App, run_tui},
    logging::{LogConfig, init_logging},
    output::{print_evaluation, print_today},
    wordlists::WordBank,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the five-letter word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Date of day 0 (YYYY-MM-DD)
    #[arg(long, global = true)]
    epoch: Option<NaiveDate>,

    /// Pick a random target instead of the daily word
    #[arg(long, global = true)]
    random: bool,

    /// Seed for --random
    #[arg(long, global = true, requires = "random")]
    seed: Option<u64>,

    /// Dictionary of valid guesses, one word per line
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Ordered list of target words, one per line
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode: one guess per line
    Simple,

    /// Score a guess against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The word to compare against
        target: String,

        /// Fail unless the result matches this pattern (e.g. "G-Y--")
        #[arg(short, long)]
        expect: Option<String>,
    },

    /// Show which day and target index today maps to
    Today {
        /// Also print the target word
        #[arg(long)]
        reveal: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            epoch: self.epoch.unwrap_or_else(default_epoch),
            date: self.date,
            target_mode: if self.random {
                TargetMode::Random { seed: self.seed }
            } else {
                TargetMode::Daily
            },
            dictionary: self.dictionary.clone(),
            targets: self.targets.clone(),
        }
        .with_pinned_date()
    }

    fn log_config(&self, command: &Commands) -> LogConfig {
        // The TUI owns the terminal; only log when a file was given
        if matches!(command, Commands::Play) && self.log_file.is_none() {
            return LogConfig::disabled();
        }
        LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            use_env_filter: !self.verbosity.is_present(),
            log_file: self.log_file.clone(),
            with_ansi: self.log_file.is_none(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    init_logging(&cli.log_config(command))?;

    let config = cli.game_config();

    match command {
        Commands::Evaluate {
            guess,
            target,
            expect,
        } => run_evaluate_command(guess, target, expect.as_deref()),
        Commands::Play => {
            let bank = load_bank(&config)?;
            run_play_command(&config, &bank)
        }
        Commands::Simple => {
            let bank = load_bank(&config)?;
            run_simple_command(&config, &bank)
        }
        Commands::Today { reveal } => {
            let bank = load_bank(&config)?;
            print_today(&today(&config, &bank, *reveal));
            Ok(())
        }
    }
}

fn load_bank(config: &GameConfig) -> Result<WordBank> {
    config
        .load_word_bank()
        .context("failed to load word lists")
}

fn run_evaluate_command(guess: &str, target: &str, expect: Option<&str>) -> Result<()> {
    let result = evaluate_words(guess, target, expect)?;
    print_evaluation(&result);

    if !result.matches_expected() {
        bail!("feedback did not match the expected pattern");
    }
    Ok(())
}

fn run_simple_command(config: &GameConfig, bank: &WordBank) -> Result<()> {
    let mut session = config.start_session(bank);
    run_simple(&mut session, &config.day_label())
}

fn run_play_command(config: &GameConfig, bank: &WordBank) -> Result<()> {
    let app = App::new(config.start_session(bank), config.day_label());
    run_tui(app)
}
