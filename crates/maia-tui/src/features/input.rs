//! Prompt line.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};

/// Height of the input box including borders.
pub const INPUT_HEIGHT: u16 = 3;

/// Single-line prompt buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text; line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| *ch != '\r') {
            self.insert_char(if ch == '\n' { ' ' } else { ch });
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}

pub fn render_input(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::Input;
    let border_style = if focused {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2) as usize;
    let line = if state.input.is_empty() {
        let placeholder = if state.is_busy() {
            "Maia está processando..."
        } else if state.nav.active().is_none() {
            "Selecione ou crie um chat..."
        } else {
            "Digite sua mensagem..."
        };
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(visible_slice(&state.input, inner_width))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let before: String = state.input.text().chars().take(state.input.cursor()).collect();
        let scroll = before.width().saturating_sub(inner_width.saturating_sub(1));
        let x = area.x + 1 + (before.width() - scroll) as u16;
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Tail of the buffer that fits the box while keeping the cursor visible.
fn visible_slice(input: &InputState, width: usize) -> String {
    let before: String = input.text().chars().take(input.cursor()).collect();
    let overflow = before.width().saturating_sub(width.saturating_sub(1));
    let mut skipped = 0;
    input
        .text()
        .chars()
        .skip_while(|ch| {
            if skipped >= overflow {
                return false;
            }
            skipped += unicode_width::UnicodeWidthChar::width(*ch).unwrap_or(0);
            true
        })
        .collect()
}
