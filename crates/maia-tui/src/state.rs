//! Application state composition.
//!
//! ```text
//! AppState
//! ├── nav: Navigation          (active session id)
//! ├── directory: SessionDirectory (sidebar list, create-in-flight flag)
//! ├── transcript: TranscriptState (active transcript, busy flag)
//! ├── input: InputState        (prompt line)
//! ├── sidebar: SidebarState    (sidebar cursor)
//! ├── view: TranscriptView     (transcript scroll)
//! └── queued: VecDeque<String> (prompts deferred while busy)
//! ```
//!
//! Only the reducer in `update.rs` mutates this state.

use std::collections::VecDeque;

use maia_core::config::Config;
use maia_core::directory::SessionDirectory;
use maia_core::navigation::Navigation;
use maia_core::transcript::TranscriptState;

use crate::input::InputState;
use crate::sidebar::SidebarState;
use crate::transcript::TranscriptView;

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Sidebar,
}

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    pub nav: Navigation,
    pub directory: SessionDirectory,
    pub transcript: TranscriptState,
    pub input: InputState,
    pub sidebar: SidebarState,
    pub view: TranscriptView,
    pub focus: Focus,
    /// Prompts submitted while a request was in flight, sent in order once
    /// the transcript is idle again.
    pub queued: VecDeque<String>,
    /// One-line message for the status bar.
    pub notice: Option<String>,
    pub spinner_frame: usize,
    /// Terminal size from the last frame.
    pub viewport: (u16, u16),
}

impl AppState {
    pub fn new(config: Config, initial_session: Option<String>) -> Self {
        Self {
            should_quit: false,
            config,
            nav: Navigation::new(initial_session),
            directory: SessionDirectory::new(),
            transcript: TranscriptState::new(),
            input: InputState::default(),
            sidebar: SidebarState::default(),
            view: TranscriptView::default(),
            focus: Focus::default(),
            queued: VecDeque::new(),
            notice: None,
            spinner_frame: 0,
            viewport: (0, 0),
        }
    }

    /// Title of the active session, if it is in the sidebar list.
    pub fn active_title(&self) -> Option<&str> {
        let id = self.nav.active()?;
        self.directory.get(id).map(|session| session.title.as_str())
    }

    /// True while a history load or send is in flight.
    pub fn is_busy(&self) -> bool {
        self.transcript.is_loading()
    }
}
