//! UI event types.
//!
//! All inputs to the TUI (terminal, async results) are converted to
//! `UiEvent` before being processed by the reducer. Async handlers send their
//! results to the runtime's inbox; the reducer is the only place they touch
//! state.

use crossterm::event::Event as CrosstermEvent;
use maia_core::api::{ApiError, HistoryItem, Session};
use maia_core::request::RequestId;

/// Results of session directory requests.
#[derive(Debug)]
pub enum SessionUiEvent {
    /// Session list fetched.
    Listed {
        request: RequestId,
        sessions: Vec<Session>,
    },
    /// Session list request failed.
    ListFailed { request: RequestId, error: ApiError },
    /// Session creation finished.
    Created { result: Result<Session, ApiError> },
}

/// Results of transcript requests.
#[derive(Debug)]
pub enum ChatUiEvent {
    /// History fetched (empty on failure; the handler already logged it).
    HistoryLoaded {
        session_id: String,
        request: RequestId,
        items: Vec<HistoryItem>,
    },
    /// A send resolved.
    SendFinished {
        session_id: String,
        request: RequestId,
        outcome: Result<Vec<HistoryItem>, ApiError>,
    },
}

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, render cadence).
    Tick,
    /// Terminal size for this frame.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(CrosstermEvent),
    Session(SessionUiEvent),
    Chat(ChatUiEvent),
}
