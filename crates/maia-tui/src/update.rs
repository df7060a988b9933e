//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use maia_core::directory::DirectoryAction;
use maia_core::transcript::{PendingSend, SendRejection};
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::{ChatUiEvent, SessionUiEvent, UiEvent};
use crate::sidebar::{self, SidebarEntry};
use crate::state::{AppState, Focus};

/// Effects to run once before the first frame.
///
/// Loads the initial session (if one was given) and the sidebar listing.
pub fn init_effects(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    if let Some(session_id) = app.nav.active().map(str::to_string) {
        app.transcript.switch_to(Some(session_id));
        effects.extend(load_history(app));
    }
    effects.push(load_sessions(app));
    effects
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.viewport = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Session(session_event) => handle_session_event(app, session_event),
        UiEvent::Chat(chat_event) => handle_chat_event(app, chat_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) if app.focus == Focus::Input => {
            app.input.insert_str(&text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Char('n') if ctrl => return request_create(app),
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Input => Focus::Sidebar,
                Focus::Sidebar => Focus::Input,
            };
            return vec![];
        }
        KeyCode::PageUp => {
            app.view.scroll_up(page_size(app));
            return vec![];
        }
        KeyCode::PageDown => {
            app.view.scroll_down(page_size(app));
            return vec![];
        }
        _ => {}
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::Sidebar => handle_sidebar_key(app, key),
    }
}

fn handle_input_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => return submit(app),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.insert_char(ch);
        }
        _ => {}
    }
    vec![]
}

fn handle_sidebar_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up => app.sidebar.move_up(),
        KeyCode::Down => {
            let rows = sidebar::row_count(app);
            app.sidebar.move_down(rows);
        }
        KeyCode::Enter => {
            return match sidebar::entry_at_cursor(app) {
                SidebarEntry::NewChat => request_create(app),
                SidebarEntry::Session(session_id) => {
                    app.focus = Focus::Input;
                    navigate(app, session_id)
                }
            };
        }
        _ => {}
    }
    vec![]
}

fn handle_session_event(app: &mut AppState, event: SessionUiEvent) -> Vec<UiEffect> {
    match event {
        SessionUiEvent::Listed { request, sessions } => {
            let action = app
                .directory
                .apply_listing(request, sessions, app.nav.active());
            sync_sidebar_cursor(app);
            match action {
                DirectoryAction::None => vec![],
                DirectoryAction::CreateSession => request_create(app),
                DirectoryAction::Navigate(session_id) => navigate(app, session_id),
            }
        }
        SessionUiEvent::ListFailed { request, error } => {
            app.directory.apply_listing_failure(request, &error);
            sync_sidebar_cursor(app);
            vec![]
        }
        SessionUiEvent::Created { result } => match app.directory.finish_create(result) {
            Some(session_id) => navigate(app, session_id),
            None => {
                app.notice = Some("Falha ao criar novo chat".to_string());
                vec![]
            }
        },
    }
}

fn handle_chat_event(app: &mut AppState, event: ChatUiEvent) -> Vec<UiEffect> {
    match event {
        ChatUiEvent::HistoryLoaded {
            session_id,
            request,
            items,
        } => {
            if !app.transcript.finish_load(request, items) {
                debug!(session_id, ?request, "dropping superseded history");
                return vec![];
            }
            app.view.follow();
            dispatch_queued(app)
        }
        ChatUiEvent::SendFinished {
            session_id,
            request,
            outcome,
        } => {
            if !app.transcript.finish_send(request, outcome) {
                debug!(session_id, ?request, "dropping send result for inactive session");
                return vec![];
            }
            app.view.follow();
            dispatch_queued(app)
        }
    }
}

/// Submits the prompt line. While busy, the prompt is queued instead.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    let prompt = app.input.text().to_string();
    match app.transcript.begin_send(&prompt) {
        Ok(pending) => {
            app.input.clear();
            app.view.follow();
            app.notice = None;
            vec![send_message(pending)]
        }
        Err(SendRejection::Busy) => {
            app.input.clear();
            app.queued.push_back(prompt);
            app.notice = Some("Mensagem na fila".to_string());
            vec![]
        }
        Err(SendRejection::NoSession) => {
            app.notice = Some("Nenhum chat selecionado".to_string());
            vec![]
        }
        Err(SendRejection::EmptyPrompt) => vec![],
    }
}

/// Sends the oldest queued prompt once the transcript is idle.
fn dispatch_queued(app: &mut AppState) -> Vec<UiEffect> {
    if app.transcript.is_loading() {
        return vec![];
    }
    while let Some(prompt) = app.queued.pop_front() {
        if let Ok(pending) = app.transcript.begin_send(&prompt) {
            if app.queued.is_empty() {
                app.notice = None;
            }
            return vec![send_message(pending)];
        }
    }
    vec![]
}

fn request_create(app: &mut AppState) -> Vec<UiEffect> {
    if !app.directory.begin_create() {
        return vec![];
    }
    vec![UiEffect::CreateSession {
        title: app.config.session_title().to_string(),
    }]
}

/// Makes `session_id` active: reloads its transcript and refreshes the sidebar.
fn navigate(app: &mut AppState, session_id: String) -> Vec<UiEffect> {
    if !app.nav.navigate(session_id.clone()) {
        return vec![];
    }
    debug!(route = %app.nav.route(), "navigated");

    app.queued.clear();
    app.notice = None;
    app.transcript.switch_to(Some(session_id));
    app.view.follow();
    sync_sidebar_cursor(app);

    let mut effects: Vec<UiEffect> = load_history(app).into_iter().collect();
    effects.push(load_sessions(app));
    effects
}

fn load_history(app: &mut AppState) -> Option<UiEffect> {
    let request = app.transcript.begin_load()?;
    let session_id = app.transcript.session_id()?.to_string();
    Some(UiEffect::LoadHistory {
        session_id,
        request,
    })
}

fn load_sessions(app: &mut AppState) -> UiEffect {
    UiEffect::LoadSessions {
        request: app.directory.begin_listing(),
    }
}

fn send_message(pending: PendingSend) -> UiEffect {
    UiEffect::SendMessage {
        session_id: pending.session_id,
        request: pending.request,
        prompt: pending.prompt,
    }
}

/// Points the sidebar cursor at the active session unless the user is
/// moving it.
fn sync_sidebar_cursor(app: &mut AppState) {
    if app.focus == Focus::Input
        && let Some(position) = app.nav.active().and_then(|id| app.directory.position(id))
    {
        app.sidebar.select_session(position);
    }
    let rows = sidebar::row_count(app);
    app.sidebar.clamp(rows);
}

fn page_size(app: &AppState) -> usize {
    (usize::from(app.viewport.1) / 2).max(1)
}
