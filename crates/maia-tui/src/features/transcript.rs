//! Transcript pane.
//!
//! Renders history items as labelled blocks (user turns right aligned,
//! model turns left aligned). Scroll is kept as an offset from the bottom so
//! new turns stay in view unless the user scrolled up.

use maia_core::api::{HistoryItem, Role};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::text::wrap_text;
use crate::state::AppState;

/// Share of the pane width a message may use.
const MESSAGE_WIDTH_PERCENT: usize = 80;

#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptView {
    /// Lines scrolled up from the bottom (0 = following).
    pub scroll: usize,
}

impl TranscriptView {
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn follow(&mut self) {
        self.scroll = 0;
    }
}

/// Builds display lines for the transcript at the given width.
pub fn build_lines(items: &[HistoryItem], width: usize) -> Vec<Line<'static>> {
    let message_width = (width * MESSAGE_WIDTH_PERCENT / 100).max(10);
    let mut lines = Vec::new();

    for item in items {
        let (alignment, label_style, body_style) = match item.role {
            Role::User => (
                Alignment::Right,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                Style::default(),
            ),
            Role::Model => (
                Alignment::Left,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                Style::default(),
            ),
        };

        lines.push(Line::from(Span::styled(item.role.display_name(), label_style)).alignment(alignment));

        if item.is_tool_only() {
            for note in item.parts.iter().filter_map(|part| part.tool_note()) {
                lines.push(
                    Line::from(Span::styled(
                        note,
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                    ))
                    .alignment(alignment),
                );
            }
        } else {
            for text in wrap_text(&item.text(), message_width) {
                lines.push(Line::from(Span::styled(text, body_style)).alignment(alignment));
            }
        }
        lines.push(Line::default());
    }

    lines
}

pub fn render_transcript(state: &AppState, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let height = area.height as usize;
    let items = state.transcript.items();

    if items.is_empty() {
        let hint = if state.is_busy() {
            "Carregando histórico..."
        } else if state.nav.active().is_none() {
            "Nenhum chat selecionado."
        } else {
            "Nenhuma mensagem ainda. Digite algo para começar."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(paragraph, inset(area));
        return;
    }

    let lines = build_lines(items, width);
    let total = lines.len();
    let max_scroll = total.saturating_sub(height);
    let scroll = state.view.scroll.min(max_scroll);
    let top = max_scroll - scroll;

    let visible: Vec<Line<'static>> = lines.into_iter().skip(top).take(height).collect();
    frame.render_widget(Paragraph::new(visible), inset(area));
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}
