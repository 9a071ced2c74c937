//! UI widgets

pub mod code_slots;
pub mod keypad;

pub use code_slots::CodeSlotsWidget;
pub use keypad::{KeypadCursor, KeypadKey, KeypadWidget};
