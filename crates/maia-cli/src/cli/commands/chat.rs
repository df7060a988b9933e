//! Chat command handler.

use anyhow::{Context, Result};
use maia_core::api::MaiaClient;
use maia_core::config::Config;
use maia_core::navigation::parse_route;

use crate::modes;

pub async fn run(config: &Config, client: MaiaClient, session: Option<String>) -> Result<()> {
    let initial_session = match session {
        Some(raw) => Some(
            parse_route(&raw).with_context(|| format!("'{raw}' is not a session id or route"))?,
        ),
        None => None,
    };

    modes::run_interactive_chat(config, client, initial_session)
        .await
        .context("interactive chat failed")
}
