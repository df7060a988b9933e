//! Effect handlers for the TUI runtime.
//!
//! Each handler is a pure async function: it performs one backend call and
//! returns the `UiEvent` carrying the result. The runtime spawns them and
//! forwards the event to the inbox. Handlers never touch `AppState`.

use maia_core::api::MaiaClient;
use maia_core::chat::load_history_or_empty;
use maia_core::request::RequestId;
use tracing::debug;

use crate::events::{ChatUiEvent, SessionUiEvent, UiEvent};

/// Fetches the sidebar listing.
pub async fn sessions_list(client: MaiaClient, request: RequestId) -> UiEvent {
    match client.list_sessions().await {
        Ok(sessions) => {
            debug!(count = sessions.len(), "sessions listed");
            UiEvent::Session(SessionUiEvent::Listed { request, sessions })
        }
        Err(error) => UiEvent::Session(SessionUiEvent::ListFailed { request, error }),
    }
}

/// Creates a session with the given title.
pub async fn session_create(client: MaiaClient, title: String) -> UiEvent {
    let result = client.create_session(&title).await;
    UiEvent::Session(SessionUiEvent::Created { result })
}

/// Loads a session's history; failures become an empty transcript.
pub async fn history_load(client: MaiaClient, session_id: String, request: RequestId) -> UiEvent {
    let items = load_history_or_empty(&client, &session_id).await;
    UiEvent::Chat(ChatUiEvent::HistoryLoaded {
        session_id,
        request,
        items,
    })
}

/// Sends a prompt. The outcome is reconciled by the reducer.
pub async fn message_send(
    client: MaiaClient,
    session_id: String,
    request: RequestId,
    prompt: String,
) -> UiEvent {
    let outcome = client.send(&session_id, &prompt).await;
    UiEvent::Chat(ChatUiEvent::SendFinished {
        session_id,
        request,
        outcome,
    })
}
