//! Async session/transcript operations with their fallbacks.
//!
//! `load_history_or_empty` turns a backend failure into an empty transcript.
//! `Conversation` drives the two-phase send against a single session; `send`
//! borrows it mutably, so two sends on one conversation can never overlap.

use tracing::{info, warn};

use crate::api::{HistoryItem, MaiaClient, Role};
use crate::transcript::{SendRejection, TranscriptState};

/// Loads a session's history; any failure yields an empty transcript.
pub async fn load_history_or_empty(client: &MaiaClient, session_id: &str) -> Vec<HistoryItem> {
    match client.history(session_id).await {
        Ok(items) => items,
        Err(err) => {
            warn!(session_id, kind = %err.kind, error = %err, "failed to load history");
            Vec::new()
        }
    }
}

/// Turns after the last prompt typed by the user.
///
/// Tool responses travel as user-role items, so only user items with text
/// count as prompts. Returns everything when there is no prompt at all.
pub fn reply_tail(items: &[HistoryItem]) -> &[HistoryItem] {
    let start = items
        .iter()
        .rposition(|item| item.role == Role::User && !item.is_tool_only())
        .map_or(0, |idx| idx + 1);
    &items[start..]
}

/// One session's transcript bound to a backend client.
#[derive(Debug)]
pub struct Conversation {
    client: MaiaClient,
    transcript: TranscriptState,
}

impl Conversation {
    /// Opens a session and loads its history.
    pub async fn open(client: MaiaClient, session_id: impl Into<String>) -> Self {
        let session_id = session_id.into();
        let mut transcript = TranscriptState::new();
        transcript.switch_to(Some(session_id.clone()));

        if let Some(request) = transcript.begin_load() {
            let items = load_history_or_empty(&client, &session_id).await;
            transcript.finish_load(request, items);
        }

        Self { client, transcript }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.transcript.session_id()
    }

    pub fn items(&self) -> &[HistoryItem] {
        self.transcript.items()
    }

    /// Sends a prompt and returns the reconciled transcript.
    ///
    /// A backend failure is not an error here: the transcript ends with the
    /// optimistic user turn and the fallback model turn.
    ///
    /// # Errors
    /// Returns a [`SendRejection`] when the prompt is blank; no request is made.
    pub async fn send(&mut self, prompt: &str) -> Result<&[HistoryItem], SendRejection> {
        let pending = self.transcript.begin_send(prompt)?;
        info!(session_id = %pending.session_id, "sending prompt");

        let outcome = self.client.send(&pending.session_id, &pending.prompt).await;
        self.transcript.finish_send(pending.request, outcome);

        Ok(self.transcript.items())
    }
}

/// Key for the single-session transcript of the legacy `/chat` endpoint.
const LEGACY_TRANSCRIPT_KEY: &str = "legacy";

/// Conversation on the single-session `POST /chat` endpoint.
///
/// The backend keeps nothing for this endpoint, so the client sends the
/// history it holds with every prompt.
#[derive(Debug)]
pub struct LegacyConversation {
    client: MaiaClient,
    transcript: TranscriptState,
    last_reply: Option<String>,
}

impl LegacyConversation {
    pub fn new(client: MaiaClient) -> Self {
        let mut transcript = TranscriptState::new();
        transcript.switch_to(Some(LEGACY_TRANSCRIPT_KEY.to_string()));
        Self {
            client,
            transcript,
            last_reply: None,
        }
    }

    pub fn items(&self) -> &[HistoryItem] {
        self.transcript.items()
    }

    /// `maia_response` of the last successful exchange, when the backend sent
    /// a non-empty one.
    pub fn last_reply(&self) -> Option<&str> {
        self.last_reply.as_deref()
    }

    /// Sends a prompt with the history held before this turn.
    ///
    /// # Errors
    /// Returns a [`SendRejection`] when the prompt is blank; no request is made.
    pub async fn send(&mut self, prompt: &str) -> Result<&[HistoryItem], SendRejection> {
        let pending = self.transcript.begin_send(prompt)?;

        let items = self.transcript.items();
        let previous = &items[..items.len().saturating_sub(1)];
        let outcome = self.client.legacy_chat(&pending.prompt, previous).await;

        self.last_reply = outcome
            .as_ref()
            .ok()
            .map(|response| response.maia_response.clone())
            .filter(|text| !text.is_empty());
        let outcome = outcome.map(|response| response.updated_history);
        self.transcript.finish_send(pending.request, outcome);

        Ok(self.transcript.items())
    }
}
