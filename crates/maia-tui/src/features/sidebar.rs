//! Session sidebar.
//!
//! Row 0 is the "+ Novo Chat" action; rows 1.. are sessions in directory
//! order. The active session is highlighted; the cursor is only drawn while
//! the sidebar has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::text::truncate_with_ellipsis;
use crate::state::{AppState, Focus};

/// Width of the sidebar column.
pub const SIDEBAR_WIDTH: u16 = 30;

/// What the sidebar row under the cursor refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    NewChat,
    Session(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarState {
    pub cursor: usize,
}

impl SidebarState {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// `rows` counts the "+ Novo Chat" row.
    pub fn move_down(&mut self, rows: usize) {
        self.cursor = (self.cursor + 1).min(rows.saturating_sub(1));
    }

    pub fn clamp(&mut self, rows: usize) {
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Points the cursor at the session at `position` in the directory.
    pub fn select_session(&mut self, position: usize) {
        self.cursor = position + 1;
    }
}

/// Entry under the sidebar cursor.
pub fn entry_at_cursor(state: &AppState) -> SidebarEntry {
    match state.sidebar.cursor {
        0 => SidebarEntry::NewChat,
        n => state
            .directory
            .sessions()
            .get(n - 1)
            .map_or(SidebarEntry::NewChat, |s| {
                SidebarEntry::Session(s.session_id.clone())
            }),
    }
}

/// Number of selectable rows.
pub fn row_count(state: &AppState) -> usize {
    state.directory.sessions().len() + 1
}

pub fn render_sidebar(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::Sidebar;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Meus Chats ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let width = area.width.saturating_sub(3) as usize;

    let new_chat_label = if state.directory.is_creating() {
        "Criando..."
    } else {
        "+ Novo Chat"
    };
    let mut lines = vec![
        Line::default(),
        row(new_chat_label, Style::default().fg(Color::Blue), focused && state.sidebar.cursor == 0, width),
        Line::default(),
    ];

    for (idx, session) in state.directory.sessions().iter().enumerate() {
        let base = if state.nav.is_active(&session.session_id) {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        };
        let selected = focused && state.sidebar.cursor == idx + 1;
        lines.push(row(&session.title, base, selected, width));
    }

    // Keep the cursor row on screen.
    let visible = area.height.saturating_sub(1) as usize;
    let cursor_line = state.sidebar.cursor + if state.sidebar.cursor == 0 { 1 } else { 2 };
    let scroll = (cursor_line + 1).saturating_sub(visible);

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll as u16, 0)),
        area,
    );
}

fn row(label: &str, style: Style, selected: bool, width: usize) -> Line<'static> {
    let marker = if selected { "› " } else { "  " };
    let style = if selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(truncate_with_ellipsis(label, width.saturating_sub(1)), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_bounds() {
        let mut sidebar = SidebarState::default();
        sidebar.move_up();
        assert_eq!(sidebar.cursor, 0);
        sidebar.move_down(3);
        sidebar.move_down(3);
        sidebar.move_down(3);
        assert_eq!(sidebar.cursor, 2);
        sidebar.clamp(1);
        assert_eq!(sidebar.cursor, 0);
    }
}
