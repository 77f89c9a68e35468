//! Game progression: day selection, guess validation and the session state machine

pub mod day;
mod session;
mod validator;

pub use session::{EvaluatedGuess, GameSession, InputEvent, Outcome, Update, win_message};
pub use validator::{Rejection, validate_guess};
