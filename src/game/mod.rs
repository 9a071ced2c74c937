//! Game module - Core game logic and state management

mod digits;
mod scoring;
mod state;
mod stats;
mod time;

pub use digits::{DigitSource, RngDigits, ScriptedDigits};
pub use scoring::{digits_to_string, score_guess};
pub use state::{Game, GameStatus, MAX_LEVEL, START_LEVEL};
pub use stats::{GuessRecord, LevelStats, RunSummary};
pub use time::{Clock, ManualClock, SystemClock};
