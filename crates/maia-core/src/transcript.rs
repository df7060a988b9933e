//! Transcript state for the active session.
//!
//! Sending is a two-phase transition:
//! 1. `begin_send` appends the user turn optimistically and raises the busy flag.
//! 2. `finish_send` either replaces the whole transcript with the backend's
//!    authoritative history, or appends a synthetic model turn carrying
//!    [`CONNECTION_ERROR_MESSAGE`] while keeping the optimistic user turn.
//!
//! At most one request (a history load or a send) is outstanding at a time.
//! Each carries a [`RequestId`]; a response is applied only if it answers the
//! request the state is waiting for.

use std::fmt;

use tracing::warn;

use crate::api::{ApiError, HistoryItem};
use crate::request::{RequestCounter, RequestId};

/// Synthetic model reply shown when a send fails.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Desculpe, não consegui me conectar ao backend. O servidor (maia.py) está rodando?";

/// Why a send was not started. None of these touch the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    /// Prompt was empty or whitespace only.
    EmptyPrompt,
    /// A load or send is already in flight.
    Busy,
    /// No session is selected.
    NoSession,
}

impl fmt::Display for SendRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendRejection::EmptyPrompt => write!(f, "prompt is empty"),
            SendRejection::Busy => write!(f, "a request is already in flight"),
            SendRejection::NoSession => write!(f, "no session selected"),
        }
    }
}

impl std::error::Error for SendRejection {}

/// A send accepted by `begin_send`, to be dispatched to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub request: RequestId,
    pub session_id: String,
    pub prompt: String,
}

/// What the transcript is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading(RequestId),
    Sending(RequestId),
}

/// Local copy of one session's transcript.
#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    session_id: Option<String>,
    items: Vec<HistoryItem>,
    phase: Phase,
    requests: RequestCounter,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a history load or a send is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Points the transcript at another session.
    ///
    /// Clears the local items and forgets any outstanding request, so its
    /// response will be dropped. Returns false (and changes nothing) when the
    /// session is already active.
    pub fn switch_to(&mut self, session_id: Option<String>) -> bool {
        if self.session_id == session_id {
            return false;
        }
        self.session_id = session_id;
        self.items.clear();
        self.phase = Phase::Idle;
        true
    }

    /// Starts a history load for the active session.
    ///
    /// Returns `None` when no session is selected or a send is outstanding
    /// (the send's response carries the authoritative history anyway). A
    /// load started while another load is pending supersedes it.
    pub fn begin_load(&mut self) -> Option<RequestId> {
        if self.session_id.is_none() || matches!(self.phase, Phase::Sending(_)) {
            return None;
        }
        let request = self.requests.next();
        self.phase = Phase::Loading(request);
        Some(request)
    }

    /// Applies a history load. Anything but the pending load is discarded.
    pub fn finish_load(&mut self, request: RequestId, items: Vec<HistoryItem>) -> bool {
        if self.phase != Phase::Loading(request) {
            return false;
        }
        self.items = items;
        self.phase = Phase::Idle;
        true
    }

    /// Phase 1: validates the prompt and appends the optimistic user turn.
    ///
    /// # Errors
    /// Returns a [`SendRejection`] without mutating anything when the prompt
    /// is blank, no session is selected, or a request is in flight.
    pub fn begin_send(&mut self, prompt: &str) -> Result<PendingSend, SendRejection> {
        if prompt.trim().is_empty() {
            return Err(SendRejection::EmptyPrompt);
        }
        let Some(session_id) = self.session_id.clone() else {
            return Err(SendRejection::NoSession);
        };
        if self.phase != Phase::Idle {
            return Err(SendRejection::Busy);
        }

        let request = self.requests.next();
        self.items.push(HistoryItem::user(prompt));
        self.phase = Phase::Sending(request);

        Ok(PendingSend {
            request,
            session_id,
            prompt: prompt.to_string(),
        })
    }

    /// Phase 2: reconciles with the backend response.
    ///
    /// Returns false when the response does not answer the pending send (the
    /// user navigated away meanwhile); it is dropped.
    pub fn finish_send(
        &mut self,
        request: RequestId,
        outcome: Result<Vec<HistoryItem>, ApiError>,
    ) -> bool {
        if self.phase != Phase::Sending(request) {
            return false;
        }
        self.phase = Phase::Idle;
        match outcome {
            Ok(history) => self.items = history,
            Err(err) => {
                warn!(
                    session_id = self.session_id.as_deref().unwrap_or_default(),
                    kind = %err.kind,
                    error = %err,
                    "send failed, showing fallback reply"
                );
                self.items.push(HistoryItem::model(CONNECTION_ERROR_MESSAGE));
            }
        }
        true
    }
}
