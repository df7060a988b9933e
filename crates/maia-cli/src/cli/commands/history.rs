//! History command handler and transcript printing.

use anyhow::{Context, Result};
use maia_core::api::{HistoryItem, MaiaClient};

pub async fn show(client: &MaiaClient, id: &str) -> Result<()> {
    let items = client
        .history(id)
        .await
        .with_context(|| format!("load history for '{id}'"))?;
    if items.is_empty() {
        println!("Session '{id}' has no messages.");
    } else {
        print_items(&items);
    }
    Ok(())
}

/// Prints items as `Label: text`, one turn per block.
pub fn print_items(items: &[HistoryItem]) {
    for item in items {
        println!("{}", format_item(item));
    }
}

pub fn format_item(item: &HistoryItem) -> String {
    let label = item.role.display_name();
    if item.is_tool_only() {
        let notes: Vec<String> = item.parts.iter().filter_map(|part| part.tool_note()).collect();
        format!("{label}: {}", notes.join(" "))
    } else {
        format!("{label}: {}", item.text())
    }
}
