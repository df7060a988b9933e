//! Feature slices: each owns a piece of UI state and its render function.

pub mod input;
pub mod sidebar;
pub mod transcript;
