//! Core Maia client library (backend API, session/transcript sync, config).

pub mod api;
pub mod chat;
pub mod config;
pub mod directory;
pub mod logging;
pub mod navigation;
pub mod request;
pub mod transcript;
