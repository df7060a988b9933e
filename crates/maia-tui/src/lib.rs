//! Full-screen TUI for the Maia chat client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{input, sidebar, transcript};
use maia_core::api::MaiaClient;
use maia_core::config::Config;
pub use runtime::TuiRuntime;
use tracing::info;

/// Runs the interactive chat UI until the user quits.
///
/// `initial_session` opens that session directly; otherwise the first listed
/// session is selected (or one is created when none exist).
///
/// # Errors
/// Returns an error when stderr is not a terminal or terminal I/O fails.
pub async fn run_interactive_chat(
    config: &Config,
    client: MaiaClient,
    initial_session: Option<String>,
) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `maia send <SESSION_ID> <PROMPT>` for non-interactive use."
        );
    }

    let mut err = stderr();
    writeln!(err, "Maia Chat")?;
    writeln!(err, "Backend: {}", client.base_url())?;
    if let Some(ref session_id) = initial_session {
        writeln!(err, "Session: {session_id}")?;
    }
    err.flush()?;

    info!(backend = %client.base_url(), ?initial_session, "starting chat UI");

    let mut runtime = TuiRuntime::new(config.clone(), client, initial_session)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
