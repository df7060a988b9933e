//! Status command handler.

use anyhow::{Context, Result};
use maia_core::api::MaiaClient;

pub async fn run(client: &MaiaClient) -> Result<()> {
    let status = client
        .status()
        .await
        .with_context(|| format!("backend at {} is not reachable", client.base_url()))?;
    println!("{}: {}", client.base_url(), status.status);
    Ok(())
}
