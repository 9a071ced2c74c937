//! Digit sources for target code generation

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies independent uniform digits in 0..=9
pub trait DigitSource {
    fn next_digit(&mut self) -> u8;

    /// Draw a code of `len` digits (repeats allowed)
    fn draw_code(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next_digit()).collect()
    }
}

/// Digits drawn from a `StdRng`
pub struct RngDigits {
    rng: StdRng,
}

impl RngDigits {
    /// Seeded for reproducible runs, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl DigitSource for RngDigits {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..10)
    }
}

/// Replays a fixed digit sequence, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedDigits {
    queue: VecDeque<u8>,
}

impl ScriptedDigits {
    /// Digits above 9 are reduced mod 10. An empty script yields zeros.
    pub fn new(digits: impl IntoIterator<Item = u8>) -> Self {
        Self {
            queue: digits.into_iter().map(|d| d % 10).collect(),
        }
    }

    /// Parse a script like "37" or "37 123"; non-digit characters are skipped
    pub fn from_str_digits(s: &str) -> Self {
        Self::new(s.chars().filter_map(|c| c.to_digit(10)).map(|d| d as u8))
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> u8 {
        match self.queue.pop_front() {
            Some(d) => {
                self.queue.push_back(d);
                d
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_digits_in_range() {
        let mut digits = RngDigits::new(Some(7));
        for _ in 0..1000 {
            assert!(digits.next_digit() <= 9);
        }
    }

    #[test]
    fn test_rng_digits_seed_reproducible() {
        let a = RngDigits::new(Some(42)).draw_code(6);
        let b = RngDigits::new(Some(42)).draw_code(6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_digits_cover_all_values() {
        let mut digits = RngDigits::new(Some(1));
        let mut seen = [false; 10];
        for _ in 0..500 {
            seen[digits.next_digit() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_digits_cycle() {
        let mut digits = ScriptedDigits::from_str_digits("37 1");
        assert_eq!(digits.draw_code(2), vec![3, 7]);
        assert_eq!(digits.draw_code(3), vec![1, 3, 7]);
    }

    #[test]
    fn test_scripted_digits_empty_yields_zero() {
        let mut digits = ScriptedDigits::new(Vec::new());
        assert_eq!(digits.draw_code(3), vec![0, 0, 0]);
    }
}
