//! Game state machine
//!
//! Owns the session: current level, hidden code, guess being composed,
//! guess history and the statistics of every level cleared this run.

use std::time::Duration;

use super::digits::{DigitSource, RngDigits};
use super::scoring::score_guess;
use super::stats::{GuessRecord, LevelStats, RunSummary};
use super::time::{whole_seconds_between, Clock, SystemClock};

/// Code length of the first level
pub const START_LEVEL: usize = 2;
/// Code length of the last level
pub const MAX_LEVEL: usize = 6;

/// The main game struct that holds the session
pub struct Game {
    /// Current screen
    status: GameStatus,
    /// Code length of the active level
    current_level: usize,
    /// Hidden code for the active level
    target_code: Vec<u8>,
    /// Digits typed so far
    guess_input: Vec<u8>,
    /// Guesses submitted this level, oldest first
    history: Vec<GuessRecord>,
    /// Stats of every level cleared this run
    all_level_stats: Vec<LevelStats>,
    /// Clock reading when the active level began
    level_start: Duration,
    digits: Box<dyn DigitSource>,
    clock: Box<dyn Clock>,
}

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen
    Menu,
    /// Composing and submitting guesses
    Playing,
    /// The code for the current level was cracked
    LevelWon,
    /// All levels cleared, showing the run summary
    FinalStats,
}

impl Game {
    /// Create a game with an entropy-seeded RNG and the wall clock
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// Create a game whose codes come from a seeded RNG
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::with_sources(Box::new(RngDigits::new(seed)), Box::new(SystemClock::new()))
    }

    /// Create a game from explicit digit and time sources
    pub fn with_sources(digits: Box<dyn DigitSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            status: GameStatus::Menu,
            current_level: START_LEVEL,
            target_code: Vec::new(),
            guess_input: Vec::new(),
            history: Vec::new(),
            all_level_stats: Vec::new(),
            level_start: Duration::ZERO,
            digits,
            clock,
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Begin a fresh run at the first level
    pub fn start_game(&mut self) {
        log::info!("Starting new run");
        self.current_level = START_LEVEL;
        self.all_level_stats.clear();
        self.start_level(START_LEVEL);
    }

    /// Begin a level with a new hidden code of `level` digits
    pub fn start_level(&mut self, level: usize) {
        let clamped = level.clamp(START_LEVEL, MAX_LEVEL);
        if clamped != level {
            log::warn!("Level {} out of range, using {}", level, clamped);
        }

        self.current_level = clamped;
        self.guess_input.clear();
        self.history.clear();
        self.target_code = self.digits.draw_code(clamped);
        self.level_start = self.clock.now();
        log::info!("Level {} started", clamped);
        self.set_status(GameStatus::Playing);
    }

    /// Add a digit to the guess; ignored once the guess is full
    pub fn append_digit(&mut self, digit: u8) {
        if self.status != GameStatus::Playing {
            return;
        }
        if digit > 9 {
            log::debug!("Ignoring non-digit input {}", digit);
            return;
        }
        if self.guess_input.len() >= self.current_level {
            log::debug!("Guess already has {} digits", self.current_level);
            return;
        }
        self.guess_input.push(digit);
    }

    /// Drop the last typed digit
    pub fn remove_last_digit(&mut self) {
        self.guess_input.pop();
    }

    /// Discard the guess being composed
    pub fn clear_input(&mut self) {
        self.guess_input.clear();
    }

    /// Score the composed guess against the hidden code
    ///
    /// Returns the new history record, or `None` when the guess is
    /// incomplete or no level is being played. A full match records the
    /// level's stats and moves to `LevelWon`.
    pub fn submit_guess(&mut self) -> Option<GuessRecord> {
        if self.status != GameStatus::Playing {
            return None;
        }
        if self.guess_input.len() != self.current_level {
            log::debug!(
                "Ignoring incomplete guess ({}/{} digits)",
                self.guess_input.len(),
                self.current_level
            );
            return None;
        }

        let guess = std::mem::take(&mut self.guess_input);
        let correct_count = score_guess(&guess, &self.target_code);
        let record = GuessRecord { guess, correct_count };
        self.history.push(record.clone());
        log::debug!(
            "Guess {} matched {}/{}",
            record.guess_text(),
            correct_count,
            self.current_level
        );

        if correct_count == self.current_level {
            let stats = LevelStats {
                level: self.current_level,
                attempts: self.history.len(),
                time_spent: whole_seconds_between(self.level_start, self.clock.now()),
            };
            log::info!(
                "Level {} cracked in {} attempts, {}s",
                stats.level,
                stats.attempts,
                stats.time_spent
            );
            self.all_level_stats.push(stats);
            self.set_status(GameStatus::LevelWon);
        }

        Some(record)
    }

    /// Move on from a cleared level to the next one, or to the final stats
    pub fn advance_level(&mut self) {
        if self.status != GameStatus::LevelWon {
            return;
        }
        if self.current_level < MAX_LEVEL {
            self.start_level(self.current_level + 1);
        } else {
            let summary = self.run_summary();
            log::info!(
                "Run complete: {} levels, {} attempts, {}s",
                summary.total_levels,
                summary.total_attempts,
                summary.total_time
            );
            self.set_status(GameStatus::FinalStats);
        }
    }

    /// Leave the current screen for the menu
    ///
    /// Run state is left alone; the next `start_game` resets it.
    pub fn return_to_menu(&mut self) {
        self.set_status(GameStatus::Menu);
    }

    fn set_status(&mut self, status: GameStatus) {
        log::debug!("State transition: {:?} -> {:?}", self.status, status);
        self.status = status;
    }

    // ------------------------------------------------------------------
    // Snapshot accessors
    // ------------------------------------------------------------------

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Digits typed so far
    pub fn guess_input(&self) -> &[u8] {
        &self.guess_input
    }

    /// Guess padded to the level length; `None` marks an empty slot
    pub fn input_slots(&self) -> Vec<Option<u8>> {
        (0..self.current_level)
            .map(|i| self.guess_input.get(i).copied())
            .collect()
    }

    /// Whether the guess has as many digits as the code
    pub fn input_complete(&self) -> bool {
        self.guess_input.len() == self.current_level
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Guesses made on the current level
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    pub fn all_level_stats(&self) -> &[LevelStats] {
        &self.all_level_stats
    }

    /// Time spent on the most recently cleared level
    pub fn last_time_spent(&self) -> Option<u64> {
        self.all_level_stats.last().map(|s| s.time_spent)
    }

    pub fn run_summary(&self) -> RunSummary {
        RunSummary::from_levels(&self.all_level_stats)
    }

    /// (levels reached, total levels), counting the first level as 1
    pub fn level_progress(&self) -> (usize, usize) {
        (
            self.current_level - START_LEVEL + 1,
            MAX_LEVEL - START_LEVEL + 1,
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
