//! Navigation binding: which session is active.
//!
//! Sessions are addressed by the route `/chat/{session_id}`; a bare id is
//! accepted too. The active id decides which transcript is loaded and which
//! sidebar entry is highlighted.

/// Route prefix for a chat session.
pub const CHAT_ROUTE_PREFIX: &str = "/chat/";

/// Extracts the session id from a route.
///
/// `"/chat/abc"`, `"chat/abc/"` and `"abc"` all yield `abc`; `"/"`, `""` and
/// `"/chat/"` yield `None`.
pub fn parse_route(route: &str) -> Option<String> {
    let trimmed = route.trim().trim_matches('/');
    let id = trimmed.strip_prefix("chat/").unwrap_or(trimmed);
    let id = id.trim_matches('/');
    if id.is_empty() || id == "chat" || id.contains('/') {
        return None;
    }
    Some(id.to_string())
}

/// Builds the route for a session.
pub fn chat_route(session_id: &str) -> String {
    format!("{CHAT_ROUTE_PREFIX}{session_id}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Option<String>,
}

impl Navigation {
    pub fn new(active: Option<String>) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, session_id: &str) -> bool {
        self.active.as_deref() == Some(session_id)
    }

    /// Moves to `session_id`. Returns true if the active id changed.
    pub fn navigate(&mut self, session_id: impl Into<String>) -> bool {
        let session_id = session_id.into();
        if self.is_active(&session_id) {
            return false;
        }
        self.active = Some(session_id);
        true
    }

    /// Current route (`/` when nothing is selected).
    pub fn route(&self) -> String {
        self.active
            .as_deref()
            .map_or_else(|| "/".to_string(), chat_route)
    }
}
