//! Config command handlers.

use anyhow::{Context, Result};
use maia_core::api::MaiaClient;
use maia_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    // Reject anything the client could not use before touching the file.
    MaiaClient::new(url, None).with_context(|| format!("invalid backend URL '{url}'"))?;

    let config_path = config::paths::config_path();
    config::Config::save_api_url_to(&config_path, url)
        .with_context(|| format!("save api_url to {}", config_path.display()))?;
    println!("Backend URL set to {url}");
    Ok(())
}
