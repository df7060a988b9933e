//! Send command handler.

use anyhow::{Context, Result};
use maia_core::api::{MaiaClient, Role};
use maia_core::chat::{Conversation, reply_tail};

use super::history::print_items;

/// Sends one prompt and prints the model turns that answer it.
///
/// The answer is read off the reconciled transcript (the turns after the
/// last user message), so it does not depend on the history load having
/// succeeded. A backend failure prints the fallback reply rather than
/// failing the command; only a blank prompt is an error.
pub async fn run(client: MaiaClient, id: &str, prompt: &str) -> Result<()> {
    let mut conversation = Conversation::open(client, id).await;

    let items = conversation
        .send(prompt)
        .await
        .with_context(|| format!("send to '{id}'"))?;

    let reply: Vec<_> = reply_tail(items)
        .iter()
        .filter(|item| item.role == Role::Model)
        .cloned()
        .collect();
    print_items(&reply);
    Ok(())
}
