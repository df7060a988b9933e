use std::fmt;

use serde_json::Value;

/// Categories of backend errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connection refused, DNS failure, reset, etc.
    Transport,
    /// Request exceeded the configured timeout
    Timeout,
    /// Non-success HTTP status (4xx, 5xx)
    HttpStatus,
    /// Body did not match the expected JSON shape
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Structured error from a backend call.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional raw body or source error text
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error.
    ///
    /// FastAPI reports failures as `{"detail": ...}`; when present the detail
    /// is folded into the message.
    pub fn http_status(status: u16, body: &str) -> Self {
        if body.is_empty() {
            return Self::new(ApiErrorKind::HttpStatus, format!("HTTP {status}"));
        }

        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| json.get("detail").cloned())
            .map(|detail| match detail {
                Value::String(s) => s,
                other => other.to_string(),
            });

        let message = match detail {
            Some(detail) => format!("HTTP {status}: {detail}"),
            None => format!("HTTP {status}"),
        };

        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            details: Some(body.to_string()),
        }
    }

    /// Classifies a reqwest failure.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ApiErrorKind::Timeout
        } else if err.is_decode() {
            ApiErrorKind::Decode
        } else {
            ApiErrorKind::Transport
        };
        Self::new(kind, err.to_string())
    }

    pub fn decode(err: &serde_json::Error, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Invalid response body: {err}"),
            details: Some(body.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
