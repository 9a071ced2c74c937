//! Keybreach - A terminal code-breaking game
//!
//! Crack the hidden key, one layer at a time. Each layer's key is one
//! digit longer than the last, from 2 digits up to 6.

pub mod config;
pub mod game;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game::{Game, GameStatus};
