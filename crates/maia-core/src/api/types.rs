//! Wire types for the Maia backend.
//!
//! History items mirror the backend's Gemini-style content dicts:
//! `{"role": "user" | "model", "parts": [{"text": "..."}]}`. Parts produced by
//! tool activity carry `function_call` / `function_response` instead of text
//! and are kept verbatim so a history round trip never drops them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A chat session as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub title: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            title: title.into(),
        }
    }
}

/// Author of a history item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Label shown next to a turn in the transcript.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "Você",
            Role::Model => "Maia",
        }
    }
}

/// Tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

/// Tool result fed back to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    #[serde(default)]
    pub response: Value,
}

/// One part of a history item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Short human-readable note for non-text parts.
    pub fn tool_note(&self) -> Option<String> {
        if let Some(call) = &self.function_call {
            return Some(format!("→ {}", call.name));
        }
        self.function_response
            .as_ref()
            .map(|response| format!("← {}", response.name))
    }
}

/// One turn in a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub role: Role,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl HistoryItem {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text parts, newline separated.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when the item has no text at all (tool-only turns).
    pub fn is_tool_only(&self) -> bool {
        self.parts.iter().all(|part| part.text.is_none())
    }
}

/// Body of `POST /api/sessions/create`.
#[derive(Debug, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub title: &'a str,
}

/// Body of `POST /api/chat/{session_id}`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub user_prompt: &'a str,
}

/// Response of `POST /api/chat/{session_id}`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub updated_history: Vec<HistoryItem>,
}

/// Body of the single-session `POST /chat` endpoint.
#[derive(Debug, Serialize)]
pub struct LegacyChatRequest<'a> {
    pub user_prompt: &'a str,
    pub history: &'a [HistoryItem],
}

/// Response of the single-session `POST /chat` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyChatResponse {
    #[serde(default)]
    pub maia_response: String,
    pub updated_history: Vec<HistoryItem>,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}
