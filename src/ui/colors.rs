//! Terminal palette (green-on-black)

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Black;
pub const TEXT_PRIMARY: Color = Color::Rgb(52, 211, 153);
pub const ACCENT: Color = Color::Rgb(16, 185, 129);
pub const TEXT_MUTED: Color = Color::Rgb(6, 95, 70);
pub const BORDER_DIM: Color = Color::Rgb(6, 78, 59);
/// Background of the highlighted keypad key
pub const HIGHLIGHT_BG: Color = Color::Rgb(16, 185, 129);
pub const HIGHLIGHT_FG: Color = Color::Black;
