//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only; the reducer never talks to the backend itself.
//! Requests carry the ticket the reducer issued so their results can be
//! matched against what is still pending.

use maia_core::request::RequestId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the session list.
    LoadSessions { request: RequestId },

    /// Create a session with the given title.
    CreateSession { title: String },

    /// Fetch a session's history.
    LoadHistory {
        session_id: String,
        request: RequestId,
    },

    /// Send a prompt to a session.
    SendMessage {
        session_id: String,
        request: RequestId,
        prompt: String,
    },
}
