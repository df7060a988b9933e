//! CLI command handlers.

pub mod chat;
pub mod config;
pub mod history;
pub mod legacy;
pub mod send;
pub mod sessions;
pub mod status;
