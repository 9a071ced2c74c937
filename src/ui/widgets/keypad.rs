//! On-screen keypad widget
//!
//! A 3x4 grid laid out like a phone keypad, with `C` and `OK` flanking `0`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::colors;

pub const KEYPAD_COLS: usize = 3;
pub const KEYPAD_ROWS: usize = 4;

/// A key on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Clear,
    Submit,
}

impl KeypadKey {
    pub fn label(&self) -> String {
        match self {
            KeypadKey::Digit(d) => d.to_string(),
            KeypadKey::Clear => "C".to_string(),
            KeypadKey::Submit => "OK".to_string(),
        }
    }
}

const LAYOUT: [[KeypadKey; KEYPAD_COLS]; KEYPAD_ROWS] = [
    [KeypadKey::Digit(1), KeypadKey::Digit(2), KeypadKey::Digit(3)],
    [KeypadKey::Digit(4), KeypadKey::Digit(5), KeypadKey::Digit(6)],
    [KeypadKey::Digit(7), KeypadKey::Digit(8), KeypadKey::Digit(9)],
    [KeypadKey::Clear, KeypadKey::Digit(0), KeypadKey::Submit],
];

/// Highlighted key position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadCursor {
    pub col: u8,
    pub row: u8,
}

impl Default for KeypadCursor {
    /// Starts on `OK`
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl KeypadCursor {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub fn key(&self) -> KeypadKey {
        LAYOUT[self.row as usize][self.col as usize]
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if (self.row as usize) < KEYPAD_ROWS - 1 {
            self.row += 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if (self.col as usize) < KEYPAD_COLS - 1 {
            self.col += 1;
        }
    }
}

/// Widget for rendering the keypad
pub struct KeypadWidget {
    cursor: KeypadCursor,
}

impl KeypadWidget {
    pub fn new(cursor: KeypadCursor) -> Self {
        Self { cursor }
    }
}

impl Widget for KeypadWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_width = area.width / KEYPAD_COLS as u16;
        let key_height = (area.height / KEYPAD_ROWS as u16).min(3);
        if key_width < 4 || key_height == 0 {
            return;
        }

        for (row, keys) in LAYOUT.iter().enumerate() {
            for (col, key) in keys.iter().enumerate() {
                let rect = Rect {
                    x: area.x + col as u16 * key_width,
                    y: area.y + row as u16 * key_height,
                    width: key_width,
                    height: key_height,
                };
                let is_cursor = self.cursor.col as usize == col && self.cursor.row as usize == row;

                let style = if is_cursor {
                    Style::default()
                        .fg(colors::HIGHLIGHT_FG)
                        .bg(colors::HIGHLIGHT_BG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
                };

                let inner = if key_height >= 3 {
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors::ACCENT));
                    let inner = block.inner(rect);
                    block.render(rect, buf);
                    inner
                } else {
                    rect
                };
                buf.set_style(inner, style);

                let label = key.label();
                let label_x = inner.x + inner.width.saturating_sub(label.len() as u16) / 2;
                let label_y = inner.y + inner.height.saturating_sub(1) / 2;
                buf.set_string(label_x, label_y, &label, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cursor_on_submit() {
        assert_eq!(KeypadCursor::default().key(), KeypadKey::Submit);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = KeypadCursor::new(0, 0);
        cursor.move_up();
        cursor.move_left();
        assert_eq!(cursor.key(), KeypadKey::Digit(1));

        for _ in 0..10 {
            cursor.move_down();
            cursor.move_right();
        }
        assert_eq!(cursor, KeypadCursor::new(2, 3));
    }

    #[test]
    fn test_bottom_row() {
        let mut cursor = KeypadCursor::new(0, 3);
        assert_eq!(cursor.key(), KeypadKey::Clear);
        cursor.move_right();
        assert_eq!(cursor.key(), KeypadKey::Digit(0));
    }

    #[test]
    fn test_renders_all_labels() {
        let area = Rect::new(0, 0, 15, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(KeypadCursor::default()).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        for label in ["1", "5", "9", "0", "C", "OK"] {
            assert!(text.contains(label), "missing {}", label);
        }
    }
}
