//! Maia backend HTTP API.
//!
//! - `types`: wire shapes (sessions, history items, request/response bodies)
//! - `client`: `MaiaClient`, one method per endpoint
//! - `errors`: `ApiError` taxonomy used by every fallback path

mod client;
mod errors;
pub mod types;

pub use client::MaiaClient;
pub use errors::{ApiError, ApiErrorKind};
pub use types::{FunctionCall, FunctionResponse, HistoryItem, Part, Role, Session};
