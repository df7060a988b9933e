//! Session command handlers.

use anyhow::{Context, Result};
use maia_core::api::MaiaClient;

pub async fn list(client: &MaiaClient) -> Result<()> {
    let sessions = client.list_sessions().await.context("list sessions")?;
    if sessions.is_empty() {
        println!("No sessions found.");
    } else {
        for session in sessions {
            println!("{}  {}", session.session_id, session.title);
        }
    }
    Ok(())
}

pub async fn new(client: &MaiaClient, title: &str) -> Result<()> {
    let session = client
        .create_session(title)
        .await
        .context("create session")?;
    println!("Created session {} ({})", session.session_id, session.title);
    Ok(())
}
