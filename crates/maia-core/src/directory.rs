//! Session directory (sidebar) state.
//!
//! Holds the known session list, most recent first, and decides what the
//! client should do after each listing: auto-create a session when none
//! exist, or select the first one when nothing is active.
//!
//! Only the most recently started listing is applied, and a successful
//! creation invalidates listings that were already in flight: those could
//! predate the new session and would drop it from the list.

use tracing::{debug, info, warn};

use crate::api::{ApiError, Session};
use crate::request::{RequestCounter, RequestId};

/// Follow-up required after a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAction {
    /// Nothing to do.
    None,
    /// The backend has no sessions; create one.
    CreateSession,
    /// No session is active; navigate to this one.
    Navigate(String),
}

#[derive(Debug, Clone, Default)]
pub struct SessionDirectory {
    sessions: Vec<Session>,
    creating: bool,
    pending_listing: Option<RequestId>,
    requests: RequestCounter,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn position(&self, session_id: &str) -> Option<usize> {
        self.sessions
            .iter()
            .position(|session| session.session_id == session_id)
    }

    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.position(session_id).map(|idx| &self.sessions[idx])
    }

    /// Starts a listing; earlier listings still in flight become stale.
    pub fn begin_listing(&mut self) -> RequestId {
        let request = self.requests.next();
        self.pending_listing = Some(request);
        request
    }

    fn take_listing(&mut self, request: RequestId) -> bool {
        if self.pending_listing != Some(request) {
            debug!(?request, "dropping stale session listing");
            return false;
        }
        self.pending_listing = None;
        true
    }

    /// Replaces the list with a fresh listing and returns the follow-up.
    /// Stale listings change nothing.
    pub fn apply_listing(
        &mut self,
        request: RequestId,
        sessions: Vec<Session>,
        active: Option<&str>,
    ) -> DirectoryAction {
        if !self.take_listing(request) {
            return DirectoryAction::None;
        }
        self.sessions = sessions;

        if self.sessions.is_empty() {
            return DirectoryAction::CreateSession;
        }
        match (active, self.sessions.first()) {
            (None, Some(first)) => DirectoryAction::Navigate(first.session_id.clone()),
            _ => DirectoryAction::None,
        }
    }

    /// A failed listing shows an empty sidebar but triggers no follow-up.
    pub fn apply_listing_failure(&mut self, request: RequestId, err: &ApiError) {
        if !self.take_listing(request) {
            return;
        }
        warn!(kind = %err.kind, error = %err, "failed to list sessions");
        self.sessions.clear();
    }

    /// Marks a creation as in flight. Returns false if one already is.
    pub fn begin_create(&mut self) -> bool {
        if self.creating {
            return false;
        }
        self.creating = true;
        true
    }

    /// Applies a creation result; on success the session is prepended and its
    /// id returned so the caller can navigate to it.
    pub fn finish_create(&mut self, result: Result<Session, ApiError>) -> Option<String> {
        self.creating = false;
        match result {
            Ok(session) => {
                info!(session_id = %session.session_id, title = %session.title, "session created");
                self.pending_listing = None;
                let id = session.session_id.clone();
                if self.position(&id).is_none() {
                    self.sessions.insert(0, session);
                }
                Some(id)
            }
            Err(err) => {
                warn!(kind = %err.kind, error = %err, "failed to create session");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    fn sample() -> Vec<Session> {
        vec![Session::new("a", "Chat A"), Session::new("b", "Chat B")]
    }

    fn apply(
        dir: &mut SessionDirectory,
        sessions: Vec<Session>,
        active: Option<&str>,
    ) -> DirectoryAction {
        let request = dir.begin_listing();
        dir.apply_listing(request, sessions, active)
    }

    #[test]
    fn test_no_active_session_navigates_to_first() {
        let mut dir = SessionDirectory::new();
        let action = apply(&mut dir, sample(), None);
        assert_eq!(action, DirectoryAction::Navigate("a".to_string()));
        assert_eq!(dir.sessions().len(), 2);
    }

    #[test]
    fn test_active_session_keeps_selection() {
        let mut dir = SessionDirectory::new();
        assert_eq!(apply(&mut dir, sample(), Some("b")), DirectoryAction::None);
    }

    #[test]
    fn test_empty_listing_requests_creation() {
        let mut dir = SessionDirectory::new();
        assert_eq!(apply(&mut dir, vec![], None), DirectoryAction::CreateSession);
        assert_eq!(
            apply(&mut dir, vec![], Some("gone")),
            DirectoryAction::CreateSession
        );
    }

    #[test]
    fn test_created_session_is_prepended() {
        let mut dir = SessionDirectory::new();
        apply(&mut dir, sample(), Some("a"));
        assert!(dir.begin_create());

        let id = dir.finish_create(Ok(Session::new("c", "Novo Chat")));

        assert_eq!(id.as_deref(), Some("c"));
        assert_eq!(dir.sessions()[0], Session::new("c", "Novo Chat"));
        assert_eq!(dir.sessions().len(), 3);
        assert!(!dir.is_creating());
    }

    #[test]
    fn test_concurrent_create_is_ignored() {
        let mut dir = SessionDirectory::new();
        assert!(dir.begin_create());
        assert!(!dir.begin_create());
        dir.finish_create(Err(ApiError::new(ApiErrorKind::Transport, "down")));
        assert!(dir.begin_create());
    }

    #[test]
    fn test_failed_create_leaves_list_untouched() {
        let mut dir = SessionDirectory::new();
        apply(&mut dir, sample(), Some("a"));
        dir.begin_create();
        let id = dir.finish_create(Err(ApiError::http_status(500, "")));
        assert!(id.is_none());
        assert_eq!(dir.sessions().len(), 2);
    }

    #[test]
    fn test_duplicate_created_session_not_inserted_twice() {
        let mut dir = SessionDirectory::new();
        apply(&mut dir, sample(), Some("a"));
        dir.begin_create();
        dir.finish_create(Ok(Session::new("b", "Chat B")));
        assert_eq!(dir.sessions().len(), 2);
    }

    #[test]
    fn test_listing_failure_reports_empty_list() {
        let mut dir = SessionDirectory::new();
        apply(&mut dir, sample(), Some("a"));
        let request = dir.begin_listing();
        dir.apply_listing_failure(request, &ApiError::new(ApiErrorKind::Transport, "refused"));
        assert!(dir.sessions().is_empty());
    }

    #[test]
    fn test_only_latest_listing_applies() {
        let mut dir = SessionDirectory::new();
        let old = dir.begin_listing();
        let new = dir.begin_listing();

        assert_eq!(dir.apply_listing(old, vec![], None), DirectoryAction::None);
        assert!(dir.sessions().is_empty());
        assert_eq!(
            dir.apply_listing(new, sample(), None),
            DirectoryAction::Navigate("a".to_string())
        );
        // A ticket is consumed by its listing.
        assert_eq!(dir.apply_listing(new, vec![], None), DirectoryAction::None);
        assert_eq!(dir.sessions().len(), 2);
    }

    #[test]
    fn test_listing_started_before_create_cannot_drop_new_session() {
        let mut dir = SessionDirectory::new();
        let first = dir.begin_listing();
        assert_eq!(dir.apply_listing(first, vec![], None), DirectoryAction::CreateSession);
        assert!(dir.begin_create());

        let in_flight = dir.begin_listing();
        dir.finish_create(Ok(Session::new("new", "Novo Chat")));

        assert_eq!(dir.apply_listing(in_flight, vec![], Some("new")), DirectoryAction::None);
        assert_eq!(dir.sessions(), &[Session::new("new", "Novo Chat")]);

        let failed = dir.begin_listing();
        dir.finish_create(Ok(Session::new("other", "Novo Chat")));
        dir.apply_listing_failure(failed, &ApiError::http_status(500, ""));
        assert_eq!(dir.sessions().len(), 2);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut dir = SessionDirectory::new();
        apply(&mut dir, sample(), Some("a"));
        assert_eq!(dir.position("b"), Some(1));
        assert_eq!(dir.get("a").map(|s| s.title.as_str()), Some("Chat A"));
        assert!(dir.get("zzz").is_none());
    }
}
