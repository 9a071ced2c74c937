//! Guess scoring
//!
//! Only exact positional matches count. A digit that appears in the target
//! at a different position scores nothing.

/// Count positions where `guess` and `target` hold the same digit
pub fn score_guess(guess: &[u8], target: &[u8]) -> usize {
    guess
        .iter()
        .zip(target.iter())
        .filter(|(g, t)| g == t)
        .count()
}

/// Render a digit sequence as a string, e.g. `[3, 7]` -> "37"
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
