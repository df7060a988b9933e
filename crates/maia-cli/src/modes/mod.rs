//! Runtime execution modes.
//!
//! - `tui`: full-screen interactive terminal UI (optional feature)

#[cfg(feature = "tui")]
pub use maia_tui::run_interactive_chat;

#[cfg(not(feature = "tui"))]
pub async fn run_interactive_chat(
    _config: &maia_core::config::Config,
    _client: maia_core::api::MaiaClient,
    _initial_session: Option<String>,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
