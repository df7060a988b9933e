use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::errors::ApiError;
use super::types::{
    ChatRequest, ChatResponse, CreateSessionRequest, HistoryItem, LegacyChatRequest,
    LegacyChatResponse, Session, StatusResponse,
};
use crate::config::Config;

/// HTTP client for the Maia backend.
///
/// Cheap to clone (the underlying `reqwest::Client` is reference counted), so
/// the TUI runtime hands a clone to every spawned request.
#[derive(Debug, Clone)]
pub struct MaiaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MaiaClient {
    /// Creates a client for `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .with_context(|| format!("Invalid backend URL '{base_url}'"))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            bail!("Backend URL must be http(s): {base_url}");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// Creates a client from the loaded configuration.
    ///
    /// # Errors
    /// See [`MaiaClient::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/sessions/list`
    pub async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        let url = self.endpoint(&["api", "sessions", "list"]);
        self.get_json(url).await
    }

    /// `POST /api/sessions/create`
    pub async fn create_session(&self, title: &str) -> Result<Session, ApiError> {
        let url = self.endpoint(&["api", "sessions", "create"]);
        self.post_json(url, &CreateSessionRequest { title }).await
    }

    /// `GET /api/chat/{session_id}`
    pub async fn history(&self, session_id: &str) -> Result<Vec<HistoryItem>, ApiError> {
        let url = self.endpoint(&["api", "chat", session_id]);
        self.get_json(url).await
    }

    /// `POST /api/chat/{session_id}`; returns the authoritative updated history.
    pub async fn send(
        &self,
        session_id: &str,
        user_prompt: &str,
    ) -> Result<Vec<HistoryItem>, ApiError> {
        let url = self.endpoint(&["api", "chat", session_id]);
        let response: ChatResponse = self.post_json(url, &ChatRequest { user_prompt }).await?;
        Ok(response.updated_history)
    }

    /// Single-session `POST /chat`: the client carries the history itself.
    pub async fn legacy_chat(
        &self,
        user_prompt: &str,
        history: &[HistoryItem],
    ) -> Result<LegacyChatResponse, ApiError> {
        let url = self.endpoint(&["chat"]);
        self.post_json(
            url,
            &LegacyChatRequest {
                user_prompt,
                history,
            },
        )
        .await
    }

    /// `GET /` health check.
    pub async fn status(&self) -> Result<StatusResponse, ApiError> {
        let url = self.endpoint(&[]);
        self.get_json(url).await
    }

    /// Appends path segments to the base URL (segments are percent-encoded).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, rejected in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::decode(&e, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> MaiaClient {
        MaiaClient::new(base, None).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("http://127.0.0.1:8000");
        assert_eq!(
            c.endpoint(&["api", "sessions", "list"]).as_str(),
            "http://127.0.0.1:8000/api/sessions/list"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let c = client("https://example.com/maia/");
        assert_eq!(
            c.endpoint(&["chat"]).as_str(),
            "https://example.com/maia/chat"
        );
    }

    #[test]
    fn test_endpoint_encodes_session_id() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.endpoint(&["api", "chat", "a b/c"]).as_str(),
            "http://localhost:8000/api/chat/a%20b%2Fc"
        );
    }

    #[test]
    fn test_endpoint_root_for_status() {
        let c = client("http://localhost:8000");
        assert_eq!(c.endpoint(&[]).as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(MaiaClient::new("ftp://example.com", None).is_err());
        assert!(MaiaClient::new("mailto:maia@example.com", None).is_err());
        assert!(MaiaClient::new("not a url", None).is_err());
    }
}
