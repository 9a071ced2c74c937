//! Guess slots widget
//!
//! One boxed cell per code digit; empty cells show `_`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::colors;

const SLOT_WIDTH: u16 = 5;
const SLOT_HEIGHT: u16 = 3;
const SLOT_GAP: u16 = 1;

pub struct CodeSlotsWidget<'a> {
    slots: &'a [Option<u8>],
}

impl<'a> CodeSlotsWidget<'a> {
    pub fn new(slots: &'a [Option<u8>]) -> Self {
        Self { slots }
    }

    /// Width needed to draw every slot
    pub fn required_width(&self) -> u16 {
        let n = self.slots.len() as u16;
        n * SLOT_WIDTH + n.saturating_sub(1) * SLOT_GAP
    }
}

impl<'a> Widget for CodeSlotsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.required_width();
        let start_x = area.x + area.width.saturating_sub(width) / 2;
        let height = SLOT_HEIGHT.min(area.height);

        for (i, slot) in self.slots.iter().enumerate() {
            let x = start_x + i as u16 * (SLOT_WIDTH + SLOT_GAP);
            if x + SLOT_WIDTH > area.x + area.width {
                break;
            }
            let rect = Rect::new(x, area.y, SLOT_WIDTH, height);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT));
            let inner = block.inner(rect);
            block.render(rect, buf);

            let glyph = match slot {
                Some(d) => char::from(b'0' + d),
                None => '_',
            };
            let style = Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD);
            if let Some(cell) = buf.cell_mut((inner.x + inner.width / 2, inner.y)) {
                cell.set_char(glyph).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_required_width() {
        assert_eq!(CodeSlotsWidget::new(&[None, None]).required_width(), 11);
        assert_eq!(CodeSlotsWidget::new(&[None; 6]).required_width(), 35);
    }

    #[test]
    fn test_renders_digits_and_placeholders() {
        let slots = [Some(4), Some(0), None];
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        CodeSlotsWidget::new(&slots).render(area, &mut buf);

        let middle: String = row_text(&buf, 1).chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(middle, "│4││0││_│");
    }
}
