//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod today;

pub use evaluate::{EvaluationResult, evaluate_words};
pub use simple::run_simple;
pub use today::{TodayResult, today};
