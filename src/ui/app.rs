//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Game, GameStatus, LevelStats};
use crate::ui::colors;
use crate::ui::widgets::{CodeSlotsWidget, KeypadCursor, KeypadKey, KeypadWidget};

/// Width of the play column
const COLUMN_WIDTH: u16 = 44;

/// Main UI application
pub struct App {
    /// Highlighted keypad key
    keypad_cursor: KeypadCursor,
}

impl App {
    pub fn new() -> Self {
        Self {
            keypad_cursor: KeypadCursor::default(),
        }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        // Global quit shortcut
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            return Ok(true);
        }

        match game.status() {
            GameStatus::Menu => self.handle_menu_input(key, game),
            GameStatus::Playing => self.handle_playing_input(key, game),
            GameStatus::LevelWon => self.handle_level_won_input(key, game),
            GameStatus::FinalStats => self.handle_final_stats_input(key, game),
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                self.keypad_cursor = KeypadCursor::default();
                game.start_game();
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    fn handle_playing_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                game.append_digit(c as u8 - b'0');
            }
            KeyCode::Backspace => game.remove_last_digit(),
            KeyCode::Delete | KeyCode::Char('c') | KeyCode::Char('C') => game.clear_input(),
            KeyCode::Enter => self.press_key(KeypadKey::Submit, game),
            KeyCode::Char(' ') => self.press_key(self.keypad_cursor.key(), game),
            KeyCode::Up | KeyCode::Char('k') => self.keypad_cursor.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.keypad_cursor.move_down(),
            KeyCode::Left | KeyCode::Char('h') => self.keypad_cursor.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.keypad_cursor.move_right(),
            KeyCode::Esc => game.return_to_menu(),
            _ => {}
        }
        Ok(false)
    }

    fn press_key(&mut self, key: KeypadKey, game: &mut Game) {
        match key {
            KeypadKey::Digit(d) => game.append_digit(d),
            KeypadKey::Clear => game.clear_input(),
            KeypadKey::Submit => {
                game.submit_guess();
            }
        }
    }

    fn handle_level_won_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => game.advance_level(),
            KeyCode::Esc => game.return_to_menu(),
            _ => {}
        }
        Ok(false)
    }

    fn handle_final_stats_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                self.keypad_cursor = KeypadCursor::default();
                game.start_game();
            }
            KeyCode::Esc => game.return_to_menu(),
            KeyCode::Char('q') => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    /// Render the current game state
    pub fn render(&self, frame: &mut Frame, game: &Game) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(colors::BACKGROUND)),
            area,
        );

        let column = centered_column(COLUMN_WIDTH, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(column);

        self.render_header(frame, game, chunks[0]);

        match game.status() {
            GameStatus::Menu => self.render_menu(frame, chunks[1]),
            GameStatus::Playing => self.render_playing(frame, game, chunks[1]),
            GameStatus::LevelWon => self.render_level_won(frame, game, chunks[1]),
            GameStatus::FinalStats => self.render_final_stats(frame, game, chunks[1]),
        }

        let footer = Paragraph::new(format!("OFFLINE_LOCAL_BUILD_V{}", env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(colors::BORDER_DIM))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors::BORDER_DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            "I_AM_HACKER.EXE",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ));
        frame.render_widget(title, chunks[0]);

        if game.status() == GameStatus::Playing {
            let (reached, total) = game.level_progress();
            let level = Paragraph::new(format!("LEVEL: {}/{}", reached, total))
                .style(Style::default().fg(colors::TEXT_PRIMARY))
                .alignment(Alignment::Right);
            frame.render_widget(level, chunks[1]);
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let lock = Style::default().fg(colors::TEXT_PRIMARY);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("  ┌───┐  ", lock)),
            Line::from(Span::styled("  │   │  ", lock)),
            Line::from(Span::styled("┌─┴───┴─┐", lock)),
            Line::from(Span::styled("│   ●   │", lock)),
            Line::from(Span::styled("│   ┃   │", lock)),
            Line::from(Span::styled("└───────┘", lock)),
            Line::from(""),
            Line::from(Span::styled(
                "FIREWALL PENETRATION TEST",
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Find the hidden 2-6 digit key",
                Style::default().fg(colors::TEXT_MUTED),
            )),
            Line::from(Span::styled(
                "to gain system access",
                Style::default().fg(colors::TEXT_MUTED),
            )),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] INITIALIZE",
                Style::default()
                    .fg(colors::HIGHLIGHT_FG)
                    .bg(colors::HIGHLIGHT_BG)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Q] Quit",
                Style::default().fg(colors::TEXT_MUTED),
            )),
        ];

        let para = Paragraph::new(text).alignment(Alignment::Center);
        frame.render_widget(para, area);
    }

    fn render_playing(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(area);

        let slots = game.input_slots();
        frame.render_widget(CodeSlotsWidget::new(&slots), chunks[1]);
        self.render_history(frame, game, chunks[3]);
        frame.render_widget(KeypadWidget::new(self.keypad_cursor), chunks[5]);
    }

    /// Guess log, newest at the bottom
    fn render_history(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER_DIM));
        let inner = block.inner(area);

        let width = inner.width as usize;
        let lines: Vec<Line> = game
            .history()
            .iter()
            .rev()
            .take(inner.height as usize)
            .rev()
            .map(|record| {
                let left = format!("> {}", record.guess_text());
                let right = format!("MATCH: {}", record.correct_count);
                let pad = width.saturating_sub(left.len() + right.len());
                Line::from(vec![
                    Span::styled(left, Style::default().fg(colors::TEXT_PRIMARY)),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(right, Style::default().fg(colors::ACCENT)),
                ])
            })
            .collect();

        let para = Paragraph::new(lines).block(block);
        frame.render_widget(para, area);
    }

    fn render_level_won(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "ACCESS GRANTED",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let time = game.last_time_spent().unwrap_or(0);
        let stats = Paragraph::new(vec![
            Line::from(format!("Attempts: {}", game.attempts())),
            Line::from(format!("Time: {}s", time)),
        ])
        .style(Style::default().fg(colors::TEXT_PRIMARY))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT)),
        );
        frame.render_widget(stats, chunks[2]);

        let next = Paragraph::new(Span::styled(
            "[Enter] ENTER NEXT LAYER",
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(next, chunks[4]);
    }

    fn render_final_stats(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let summary = game.run_summary();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(15),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "LEGENDARY HACKER",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let totals = Paragraph::new(vec![
            Line::from(format!("Total attempts: {}", summary.total_attempts)),
            Line::from(format!("Total time: {}s", summary.total_time)),
        ])
        .style(Style::default().fg(colors::TEXT_PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT)),
        );
        frame.render_widget(totals, chunks[2]);

        self.render_level_grid(frame, &summary.levels, chunks[3]);

        let help = Paragraph::new(vec![
            Line::from(Span::styled(
                "[Enter] RESTART",
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "[Esc] Menu  [Q] Quit",
                Style::default().fg(colors::TEXT_MUTED),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }

    /// One cell per cleared level: code length over attempts
    fn render_level_grid(&self, frame: &mut Frame, levels: &[LevelStats], area: Rect) {
        if levels.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = levels
            .iter()
            .map(|_| Constraint::Ratio(1, levels.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (stats, cell) in levels.iter().zip(cells.iter()) {
            let para = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{} DIG", stats.level),
                    Style::default().fg(colors::TEXT_MUTED),
                )),
                Line::from(Span::styled(
                    stats.attempts.to_string(),
                    Style::default()
                        .fg(colors::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::BORDER_DIM)),
            );
            frame.render_widget(para, *cell);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// A full-height column of at most `width` cells, centered horizontally
fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y,
        width,
        height: r.height,
    }
}
