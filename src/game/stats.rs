//! Guess records and per-level statistics

use serde::{Deserialize, Serialize};

use super::scoring::digits_to_string;

/// One submitted guess and its match count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Vec<u8>,
    pub correct_count: usize,
}

impl GuessRecord {
    /// The guess as a digit string
    pub fn guess_text(&self) -> String {
        digits_to_string(&self.guess)
    }
}

/// Result of a completed level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Code length, doubles as the level identifier
    pub level: usize,
    /// Guesses needed, including the winning one
    pub attempts: usize,
    /// Whole seconds from level start to the winning guess
    pub time_spent: u64,
}

/// Aggregate over a run, shown on the final screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_levels: usize,
    pub total_attempts: usize,
    pub total_time: u64,
    pub levels: Vec<LevelStats>,
}

impl RunSummary {
    pub fn from_levels(levels: &[LevelStats]) -> Self {
        Self {
            total_levels: levels.len(),
            total_attempts: levels.iter().map(|s| s.attempts).sum(),
            total_time: levels.iter().map(|s| s.time_spent).sum(),
            levels: levels.to_vec(),
        }
    }

    /// Mean guesses per completed level
    pub fn average_attempts(&self) -> Option<f32> {
        if self.total_levels == 0 {
            None
        } else {
            Some(self.total_attempts as f32 / self.total_levels as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_summary_totals() {
        let levels = [
            LevelStats { level: 2, attempts: 3, time_spent: 10 },
            LevelStats { level: 3, attempts: 7, time_spent: 25 },
        ];
        let summary = RunSummary::from_levels(&levels);
        assert_eq!(summary.total_levels, 2);
        assert_eq!(summary.total_attempts, 10);
        assert_eq!(summary.total_time, 35);
        assert_eq!(summary.average_attempts(), Some(5.0));
    }

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::from_levels(&[]);
        assert_eq!(summary, RunSummary::default());
        assert_eq!(summary.average_attempts(), None);
    }

    #[test]
    fn test_guess_text() {
        let record = GuessRecord { guess: vec![0, 4, 2], correct_count: 1 };
        assert_eq!(record.guess_text(), "042");
    }
}
