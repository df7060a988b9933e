//! Pure view functions for the TUI.
//!
//! Everything here takes `&AppState`, draws to a ratatui `Frame`, and never
//! mutates state or returns effects.
//!
//! ```text
//! ┌ Meus Chats ─┬ ASP (Maia) · <title> ───────────┐
//! │ + Novo Chat │ transcript                       │
//! │ sessions... │                                  │
//! │             ├──────────────────────────────────┤
//! │             │ prompt                           │
//! │             │ status line                      │
//! └─────────────┴──────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::text::truncate_with_ellipsis;
use crate::input::{self, INPUT_HEIGHT};
use crate::sidebar::{self, SIDEBAR_WIDTH};
use crate::state::AppState;
use crate::transcript;

const TITLE_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;

/// Application name shown in the title bar.
const APP_TITLE: &str = "ASP (Maia)";

/// Spinner frames for the status line.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the whole TUI.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH.min(area.width / 2)),
            Constraint::Min(1),
        ])
        .split(area);

    sidebar::render_sidebar(app, frame, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(columns[1]);

    render_title(app, frame, rows[0]);
    transcript::render_transcript(app, frame, rows[1]);
    input::render_input(app, frame, rows[2]);
    render_status_line(app, frame, rows[3]);
}

fn render_title(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {APP_TITLE}"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(title) = app.active_title() {
        let width = (area.width as usize).saturating_sub(APP_TITLE.len() + 4);
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(truncate_with_ellipsis(title, width)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();

    if app.is_busy() || app.directory.is_creating() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!(" {spinner} Maia está processando..."),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(" Pronto", dim));
    }

    if !app.queued.is_empty() {
        spans.push(Span::styled(format!("  · {} na fila", app.queued.len()), dim));
    }

    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            format!("  · {notice}"),
            Style::default().fg(Color::Red),
        ));
    }

    spans.push(Span::styled(format!("  · {}", app.nav.route()), dim));
    spans.push(Span::styled(
        "  · Enter enviar · Tab alternar · Ctrl+N novo · Esc sair",
        dim,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
